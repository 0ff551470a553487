use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::config::SOURCE_CHAR_BUDGET;
use crate::error::{ArtifactError, RemoteError, RevampError};
use crate::model::advisory::AdvisoryReport;
use crate::services::ai::GenerativeModel;
use crate::services::ai_types::ContentRequest;
use crate::services::{encoding, store};

static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json(.*?)(?:```|\z)").expect("valid regex"));

// Optional one-word info string (```tsx) is skipped.
static ANY_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:[A-Za-z0-9_+.-]+[ \t]*\r?\n)?(.*?)(?:```|\z)").expect("valid regex")
});

/// Pulls the JSON payload out of a chat-style answer: the first ```json
/// fence, else the first fence of any kind, else the whole text. An unclosed
/// fence runs to the end of the text.
pub fn extract_json_block(text: &str) -> String {
    if let Some(c) = JSON_FENCE.captures(text) {
        return c[1].to_string();
    }
    if let Some(c) = ANY_FENCE.captures(text) {
        return c[1].to_string();
    }
    text.to_string()
}

/// Never fails: text that is not JSON comes back as `Raw` with the full
/// original answer.
pub fn parse_report(text: &str) -> AdvisoryReport {
    let block = extract_json_block(text);
    match serde_json::from_str::<serde_json::Value>(block.trim()) {
        Ok(v) => AdvisoryReport::from_value(v),
        Err(_) => AdvisoryReport::Raw {
            raw: text.to_string(),
        },
    }
}

pub fn build_prompt(app_code: &str) -> String {
    let snippet = encoding::char_prefix(app_code, SOURCE_CHAR_BUDGET);

    let mut p = String::with_capacity(snippet.len() + 2048);
    p.push_str(
        "You are a senior UI/UX designer and React developer. Analyze this Texas Hold'em Poker Trainer application and provide specific, actionable UI improvements.

The app uses React, TypeScript, and Tailwind CSS. It has:
- A main menu with Practice Mode, Full Game, Tutorial, and Interactive Tutorial buttons
- A poker table with 8 players arranged in an oval
- Card displays, chip counts, action buttons
- Tutorial components

Please provide:
1. **Color Scheme Improvements**: Suggest a more professional poker-themed color palette
2. **Layout Improvements**: Better spacing, alignment, and visual hierarchy
3. **Component Styling**: Specific Tailwind classes to improve buttons, cards, player positions
4. **Animation Suggestions**: Subtle animations for better UX
5. **Typography**: Font improvements for readability
6. **Specific Code Changes**: Provide actual Tailwind class changes

Focus on making it look like a premium, professional poker application.

Here's a portion of the current UI code (main menu and key components):

```tsx
",
    );
    p.push_str(snippet);
    p.push_str(
        r#"
```

Respond with a JSON object containing:
{
  "colorScheme": {
    "primary": "suggested color",
    "secondary": "suggested color",
    "accent": "suggested color",
    "background": "suggested color",
    "surface": "suggested color"
  },
  "improvements": [
    {
      "area": "component/section name",
      "current": "current classes or description",
      "suggested": "new classes or description",
      "reason": "why this improves UX"
    }
  ],
  "animations": ["list of animation suggestions"],
  "typography": {
    "headings": "suggested approach",
    "body": "suggested approach"
  }
}
"#,
    );
    p
}

/// Reads the source, asks the text model, parses leniently. Errors only on
/// I/O or transport problems.
pub fn request_suggestions(
    client: &dyn GenerativeModel,
    model: &str,
    source_path: &Path,
) -> Result<AdvisoryReport, RevampError> {
    let source = encoding::read_source(source_path)?;
    if source.had_errors {
        warn!(
            path = %source_path.display(),
            encoding = source.encoding,
            "source decoded with replacement characters"
        );
    }
    info!(path = %source_path.display(), encoding = source.encoding, "analyzing UI source");

    let request = ContentRequest::text(model, build_prompt(&source.text));
    let text = client.generate(&request)?.text().ok_or(RemoteError::NoText)?;

    let report = parse_report(&text);
    if report.is_raw() {
        warn!("advisory answer was not JSON, keeping raw text");
    } else if let Some(f) = report.feedback() {
        info!(
            improvements = f.improvements.as_ref().map_or(0, Vec::len),
            animations = f.animations.as_ref().map_or(0, Vec::len),
            extra_keys = f.extra.len(),
            "advisory answer parsed"
        );
    } else {
        warn!("advisory answer is JSON but not in the requested shape");
    }
    Ok(report)
}

pub fn save_report(report: &AdvisoryReport, path: &Path) -> Result<(), ArtifactError> {
    let json = serde_json::to_string_pretty(report)?;
    store::write_atomic(path, json.as_bytes())
}
