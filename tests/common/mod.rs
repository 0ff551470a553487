#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use revamp_core::error::RemoteError;
use revamp_core::services::ai::GenerativeModel;
use revamp_core::services::ai_types::{ContentPart, ContentRequest, ContentResponse};
use revamp_core::services::batch::Pacer;
use revamp_core::Settings;

pub enum Reply {
    Image(Vec<u8>),
    TextOnly(String),
    Fail(u16, &'static str),
}

/// Answers by prompt substring, recording every request.
pub struct ScriptedModel {
    rules: Vec<(String, Reply)>,
    default: Reply,
    pub requests: RefCell<Vec<ContentRequest>>,
}

impl ScriptedModel {
    pub fn new(default: Reply) -> Self {
        ScriptedModel {
            rules: Vec::new(),
            default,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn when(mut self, prompt_contains: &str, reply: Reply) -> Self {
        self.rules.push((prompt_contains.to_string(), reply));
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl GenerativeModel for ScriptedModel {
    fn generate(&self, request: &ContentRequest) -> Result<ContentResponse, RemoteError> {
        self.requests.borrow_mut().push(request.clone());

        let reply = self
            .rules
            .iter()
            .find(|(needle, _)| request.prompt.contains(needle.as_str()))
            .map(|(_, r)| r)
            .unwrap_or(&self.default);

        match reply {
            Reply::Image(bytes) => Ok(ContentResponse {
                parts: vec![
                    ContentPart::Text("Here is your icon".into()),
                    ContentPart::InlineData {
                        mime_type: "image/png".into(),
                        data: bytes.clone(),
                    },
                ],
            }),
            Reply::TextOnly(t) => Ok(ContentResponse {
                parts: vec![ContentPart::Text(t.clone())],
            }),
            Reply::Fail(code, msg) => Err(RemoteError::Status {
                status: StatusCode::from_u16(*code).unwrap(),
                message: msg.to_string(),
            }),
        }
    }
}

#[derive(Default)]
pub struct CountingPacer {
    pub pauses: Vec<Duration>,
}

impl Pacer for CountingPacer {
    fn pause(&mut self, delay: Duration) {
        self.pauses.push(delay);
    }
}

pub fn settings_for(root: &Path) -> Settings {
    let vars: HashMap<&str, String> = [
        ("GEMINI_API_KEY", "test-key".to_string()),
        ("REVAMP_PROJECT_ROOT", root.display().to_string()),
        ("REVAMP_ITEM_DELAY_MS", "2000".to_string()),
    ]
    .into_iter()
    .collect();
    Settings::from_lookup(|k| vars.get(k).cloned()).unwrap()
}

pub fn png_for(name: &str) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G'];
    bytes.extend_from_slice(name.as_bytes());
    bytes
}
