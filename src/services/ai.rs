use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;

use crate::config::Settings;
use crate::error::RemoteError;
use crate::services::ai_types::{parse_response, ContentRequest, ContentResponse, WireRequest};

/// The remote generative capability. Implemented over HTTP by `GeminiClient`
/// and by scripted doubles in tests.
pub trait GenerativeModel {
    fn generate(&self, request: &ContentRequest) -> Result<ContentResponse, RemoteError>;
}

pub struct GeminiClient {
    http: Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(settings: &Settings) -> Result<Self, RemoteError> {
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()?;

        Ok(GeminiClient {
            http,
            api_base: settings.api_base.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_base, model)
    }
}

impl GenerativeModel for GeminiClient {
    fn generate(&self, request: &ContentRequest) -> Result<ContentResponse, RemoteError> {
        let endpoint = self.endpoint(&request.model);
        debug!(
            model = %request.model,
            prompt_chars = request.prompt.chars().count(),
            "generateContent"
        );

        let resp = self
            .http
            .post(&endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&WireRequest::from_request(request))
            .send()?;

        let status = resp.status();

        // Read as text first so an error body is never lost to a JSON failure.
        let text = resp.text()?;

        if !status.is_success() {
            return Err(RemoteError::Status {
                status,
                message: extract_error_message(&text),
            });
        }

        parse_response(&text)
    }
}

/// `{ "error": { "message": .. } }` or `{ "message": .. }`, else a trimmed body.
pub fn extract_error_message(body_text: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body_text) {
        if let Some(msg) = v
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return msg.to_string();
        }
        if let Some(msg) = v.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }

    let trimmed = body_text.trim();
    match trimmed.char_indices().nth(400) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

/// True for statuses that usually clear up on a later run.
pub fn is_transient(status: StatusCode) -> bool {
    status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
        || status.is_server_error()
}
