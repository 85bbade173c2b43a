use soom_core::models::artifact::FailureKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    /// Missing credential or unusable settings. Fatal; raised before any
    /// request is attempted.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("completion service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GeminiError {
    /// The recoverable failure kind, or `None` for errors that must halt.
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            GeminiError::Transport(_) => Some(FailureKind::Transport),
            GeminiError::Upstream { .. } => Some(FailureKind::Upstream),
            GeminiError::Config(_) | GeminiError::Serialization(_) => None,
        }
    }
}

impl From<ureq::Error> for GeminiError {
    fn from(e: ureq::Error) -> Self {
        GeminiError::Transport(e.to_string())
    }
}
