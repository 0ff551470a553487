use std::path::PathBuf;

use reqwest::StatusCode;

/// Startup problems. Reported once, before any remote call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set (export it or add it to the environment)")]
    MissingApiKey,

    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Anything that goes wrong between sending a prompt and holding parsed parts.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {}: {message}", .status.as_u16())]
    Status { status: StatusCode, message: String },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("response contained no candidates")]
    NoCandidates,

    #[error("response contained no text")]
    NoText,
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ArtifactError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArtifactError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a single catalog entry did not produce a file.
#[derive(Debug, thiserror::Error)]
pub enum GenerationFailure {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("no image produced")]
    NoImage,

    #[error(transparent)]
    Write(#[from] ArtifactError),
}

/// Fatal errors surfaced by the binaries.
#[derive(Debug, thiserror::Error)]
pub enum RevampError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}
