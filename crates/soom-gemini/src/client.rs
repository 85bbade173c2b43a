//! Blocking client for the generative-language `generateContent` endpoint.
//!
//! One call is one POST with a single user-role text part. There are no
//! retries: a failed call surfaces as an error and the operator re-triggers
//! it by hand.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ureq::Agent;

use crate::config::GeminiConfig;
use crate::error::GeminiError;

/// Text returned by a successful completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Text(String),
    /// The response envelope had no candidate text, or the text was blank.
    Empty,
}

/// Anything that can turn a prompt into a completion.
pub trait CompletionService: Send + Sync {
    /// Model identifier recorded on generated artifacts.
    fn model_id(&self) -> &str;

    fn complete(&self, prompt: &str) -> Result<Completion, GeminiError>;
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// First candidate's first part's text.
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

// ── Client ───────────────────────────────────────────────────────────────────

pub struct GeminiClient {
    agent: Agent,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client. Fails with [`GeminiError::Config`] when no API key is
    /// configured, before any network activity.
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let api_key = config.require_api_key()?.to_string();

        let agent_config = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build();

        Ok(Self {
            agent: Agent::new_with_config(agent_config),
            endpoint: config.endpoint(),
            model: config.model.clone(),
            api_key,
        })
    }
}

impl CompletionService for GeminiClient {
    fn model_id(&self) -> &str {
        &self.model
    }

    fn complete(&self, prompt: &str) -> Result<Completion, GeminiError> {
        let request = GenerateRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
        };
        let payload = serde_json::to_vec(&request)?;

        info!(model = %self.model, prompt_len = prompt.len(), "requesting completion");

        let mut response = self
            .agent
            .post(&self.endpoint)
            .query("key", &self.api_key)
            .header("Content-Type", "application/json")
            .send(payload.as_slice())?;

        let status = response.status();
        let body = response.body_mut().read_to_string()?;

        if !status.is_success() {
            warn!(
                model = %self.model,
                status = status.as_u16(),
                "completion service rejected request"
            );
            return Err(GeminiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Upstream {
                status: status.as_u16(),
                body: format!("unreadable response envelope ({e}): {body}"),
            })?;

        match envelope.into_text() {
            Some(text) if !text.trim().is_empty() => {
                info!(model = %self.model, text_len = text.len(), "completion received");
                Ok(Completion::Text(text))
            }
            _ => {
                warn!(model = %self.model, "completion envelope carried no text");
                Ok(Completion::Empty)
            }
        }
    }
}
