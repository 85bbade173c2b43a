use std::env;
use std::time::Duration;

use crate::error::GeminiError;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Upper bound on a single completion call, connect through last byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for the completion client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GeminiConfig {
    /// Read `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL` and
    /// `GEMINI_TIMEOUT_SECS`. A missing key is not an error here; it is
    /// reported when the client is built.
    pub fn from_env() -> Result<Self, GeminiError> {
        let defaults = Self::default();

        let timeout = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    GeminiError::Config(format!("GEMINI_TIMEOUT_SECS is not a number: {raw}"))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => defaults.timeout,
        };

        Ok(Self {
            api_key: env::var("GEMINI_API_KEY").ok(),
            model: env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            timeout,
        })
    }

    /// The API key, or a `Config` error when it is missing or blank.
    pub fn require_api_key(&self) -> Result<&str, GeminiError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GeminiError::Config("GEMINI_API_KEY is not set".to_string()))
    }

    /// `{base}/models/{model}:generateContent`, without the key.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}
