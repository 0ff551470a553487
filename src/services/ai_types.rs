use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::RemoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modality {
    Text,
    Image,
}

/// One prompt sent to a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub model: String,
    pub prompt: String,
    /// Empty means "let the model decide" (plain text).
    pub modalities: Vec<Modality>,
}

impl ContentRequest {
    pub fn text(model: &str, prompt: impl Into<String>) -> Self {
        ContentRequest {
            model: model.to_string(),
            prompt: prompt.into(),
            modalities: Vec::new(),
        }
    }

    pub fn image(model: &str, prompt: impl Into<String>) -> Self {
        ContentRequest {
            model: model.to_string(),
            prompt: prompt.into(),
            modalities: vec![Modality::Text, Modality::Image],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    InlineData { mime_type: String, data: Vec<u8> },
}

/// Ordered parts of the first candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentResponse {
    pub parts: Vec<ContentPart>,
}

impl ContentResponse {
    /// First part carrying inline binary data, in response order.
    pub fn first_inline_data(&self) -> Option<(&str, &[u8])> {
        self.parts.iter().find_map(|p| match p {
            ContentPart::InlineData { mime_type, data } => {
                Some((mime_type.as_str(), data.as_slice()))
            }
            ContentPart::Text(_) => None,
        })
    }

    /// Concatenated text parts, or `None` when there are none.
    pub fn text(&self) -> Option<String> {
        let mut out: Option<String> = None;
        for p in &self.parts {
            if let ContentPart::Text(t) = p {
                out.get_or_insert_with(String::new).push_str(t);
            }
        }
        out
    }
}

// Wire format of generateContent.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireRequest<'a> {
    pub contents: Vec<WireContentOut<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<WireGenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireContentOut<'a> {
    pub role: &'static str,
    pub parts: Vec<WireTextPart<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireTextPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireGenerationConfig<'a> {
    pub response_modalities: &'a [Modality],
}

impl<'a> WireRequest<'a> {
    pub fn from_request(req: &'a ContentRequest) -> Self {
        WireRequest {
            contents: vec![WireContentOut {
                role: "user",
                parts: vec![WireTextPart { text: &req.prompt }],
            }],
            generation_config: if req.modalities.is_empty() {
                None
            } else {
                Some(WireGenerationConfig {
                    response_modalities: &req.modalities,
                })
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResponse {
    #[serde(default)]
    pub candidates: Vec<WireCandidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCandidate {
    #[serde(default)]
    pub content: Option<WireContentIn>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireContentIn {
    #[serde(default)]
    pub parts: Vec<WirePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WirePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<WireBlob>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireBlob {
    #[serde(default)]
    pub mime_type: String,
    pub data: String,
}

/// Decodes a generateContent body into the first candidate's parts.
pub fn parse_response(body: &str) -> Result<ContentResponse, RemoteError> {
    let wire: WireResponse =
        serde_json::from_str(body).map_err(|e| RemoteError::Decode(e.to_string()))?;

    let candidate = wire
        .candidates
        .into_iter()
        .next()
        .ok_or(RemoteError::NoCandidates)?;

    let mut parts = Vec::new();
    for p in candidate.content.map(|c| c.parts).unwrap_or_default() {
        if let Some(blob) = p.inline_data {
            let data = STANDARD
                .decode(blob.data.as_bytes())
                .map_err(|e| RemoteError::Decode(format!("inline data is not base64: {e}")))?;
            parts.push(ContentPart::InlineData {
                mime_type: blob.mime_type,
                data,
            });
        } else if let Some(text) = p.text {
            parts.push(ContentPart::Text(text));
        }
    }

    Ok(ContentResponse { parts })
}
