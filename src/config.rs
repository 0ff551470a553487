use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-pro-preview";

const DEFAULT_ITEM_DELAY_MS: u64 = 2000;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Characters of the front-end source sent to the advisory model.
pub const SOURCE_CHAR_BUDGET: usize = 15_000;

const ICONS_DIR: &str = "public/icons";
const SOURCE_FILE: &str = "src/App.tsx";
const REPORT_FILE: &str = "scripts/ui-suggestions.json";
const COMPONENT_FILE: &str = "src/components/PokerIcon.tsx";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_base: String,
    pub image_model: String,
    pub text_model: String,
    pub project_root: PathBuf,
    pub item_delay: Duration,
    pub request_timeout: Duration,
    pub log_json: bool,
}

impl Settings {
    /// Builds settings from any key lookup. The credential is checked first so
    /// a missing key is reported even when other values are also bad.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get("GEMINI_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let item_delay_ms = parse_u64("REVAMP_ITEM_DELAY_MS", get("REVAMP_ITEM_DELAY_MS"))?
            .unwrap_or(DEFAULT_ITEM_DELAY_MS);

        let timeout_secs = match parse_u64("REVAMP_TIMEOUT_SECS", get("REVAMP_TIMEOUT_SECS"))? {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    key: "REVAMP_TIMEOUT_SECS",
                    value: "0".into(),
                    reason: "timeout must be positive".into(),
                })
            }
            Some(v) => v,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let log_json = match get("REVAMP_LOG_JSON").as_deref() {
            None | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "REVAMP_LOG_JSON",
                    value: other.to_string(),
                    reason: "expected 1, 0, true or false".into(),
                })
            }
        };

        Ok(Settings {
            api_key,
            api_base: get("GEMINI_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            image_model: get("GEMINI_IMAGE_MODEL").unwrap_or_else(|| DEFAULT_IMAGE_MODEL.into()),
            text_model: get("GEMINI_TEXT_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.into()),
            project_root: get("REVAMP_PROJECT_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            item_delay: Duration::from_millis(item_delay_ms),
            request_timeout: Duration::from_secs(timeout_secs),
            log_json,
        })
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.project_root.join(ICONS_DIR)
    }

    pub fn source_path(&self) -> PathBuf {
        self.project_root.join(SOURCE_FILE)
    }

    pub fn report_path(&self) -> PathBuf {
        self.project_root.join(REPORT_FILE)
    }

    pub fn component_path(&self) -> PathBuf {
        self.project_root.join(COMPONENT_FILE)
    }
}

fn parse_u64(key: &'static str, raw: Option<String>) -> Result<Option<u64>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(v) => v
            .parse::<u64>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                key,
                value: v,
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn missing_key_is_fatal() {
        assert!(matches!(settings(&[]), Err(ConfigError::MissingApiKey)));
        assert!(matches!(
            settings(&[("GEMINI_API_KEY", "   ")]),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn missing_key_wins_over_bad_values() {
        let r = settings(&[("REVAMP_ITEM_DELAY_MS", "soon")]);
        assert!(matches!(r, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn defaults() {
        let s = settings(&[("GEMINI_API_KEY", "k")]).unwrap();
        assert_eq!(s.api_key, "k");
        assert_eq!(s.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(s.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(s.item_delay, Duration::from_secs(2));
        assert_eq!(s.request_timeout, Duration::from_secs(120));
        assert!(!s.log_json);
        assert_eq!(s.icons_dir(), PathBuf::from("./public/icons"));
        assert_eq!(
            s.component_path(),
            PathBuf::from("./src/components/PokerIcon.tsx")
        );
    }

    #[test]
    fn overrides() {
        let s = settings(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_API_BASE", "http://localhost:9000/"),
            ("REVAMP_ITEM_DELAY_MS", "0"),
            ("REVAMP_PROJECT_ROOT", "/tmp/app"),
            ("REVAMP_LOG_JSON", "true"),
        ])
        .unwrap();
        assert_eq!(s.api_base, "http://localhost:9000");
        assert_eq!(s.item_delay, Duration::ZERO);
        assert_eq!(s.report_path(), PathBuf::from("/tmp/app/scripts/ui-suggestions.json"));
        assert!(s.log_json);
    }

    #[test]
    fn rejects_bad_numbers() {
        let r = settings(&[("GEMINI_API_KEY", "k"), ("REVAMP_ITEM_DELAY_MS", "-5")]);
        assert!(matches!(
            r,
            Err(ConfigError::InvalidValue { key: "REVAMP_ITEM_DELAY_MS", .. })
        ));

        let r = settings(&[("GEMINI_API_KEY", "k"), ("REVAMP_TIMEOUT_SECS", "0")]);
        assert!(r.is_err());
    }
}
