use crate::config::Settings;
use crate::error::RevampError;
use crate::model::catalog;
use crate::model::report::BatchReport;
use crate::services::ai::GeminiClient;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FATAL: u8 = 1;

pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Validates configuration and builds the HTTP client. No request is sent,
/// so a missing credential fails here before any remote call.
pub fn bootstrap<F>(lookup: F) -> Result<(Settings, GeminiClient), RevampError>
where
    F: Fn(&str) -> Option<String>,
{
    let settings = Settings::from_lookup(lookup)?;
    let client = GeminiClient::new(&settings)?;
    Ok((settings, client))
}

/// Per-icon failures are not fatal; only an `Err` maps to a non-zero code.
pub fn exit_code<T>(result: &Result<T, RevampError>) -> u8 {
    match result {
        Ok(_) => EXIT_OK,
        Err(_) => EXIT_FATAL,
    }
}

/// One line per failed icon, with the emoji it was meant to replace.
pub fn failure_lines(report: &BatchReport) -> Vec<String> {
    report
        .failed()
        .map(|item| {
            let emoji = catalog::find(&item.name).map_or("?", |r| r.emoji);
            let reason = item.error.as_deref().unwrap_or("unknown error");
            format!("{emoji} {}: {reason}", item.name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::report::GenerationResult;

    #[test]
    fn failed_icons_show_their_emoji() {
        let mut report = BatchReport::default();
        report.push(GenerationResult::failed("fold", "no image produced"));
        report.push(GenerationResult::saved("chips", "chips-icon.png".into(), "ab".into()));
        report.push(GenerationResult::failed("mystery", "HTTP 500: boom"));

        assert_eq!(
            failure_lines(&report),
            vec![
                "🚫 fold: no image produced".to_string(),
                "? mystery: HTTP 500: boom".to_string(),
            ]
        );
    }
}
