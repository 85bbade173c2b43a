use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::suggestion::SuggestionDraft;

/// Why a completion call failed. Both kinds are recoverable: the failure is
/// shown inline and the operator may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FailureKind {
    /// Network error or timeout.
    Transport,
    /// Non-success status from the service.
    Upstream,
}

/// Result of asking the completion service for a patient summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum SummaryOutcome {
    Text { text: String },
    /// The service answered but the completion text was empty or missing.
    Empty,
    Failed { kind: FailureKind, message: String },
}

/// Result of asking the completion service for a treatment suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum SuggestionOutcome {
    Structured { draft: SuggestionDraft },
    /// No JSON object could be recovered. `raw` is the completion verbatim.
    ParseFailure { raw: String, reason: String },
    Empty,
    Failed { kind: FailureKind, message: String },
}

impl SuggestionOutcome {
    pub fn draft(&self) -> Option<&SuggestionDraft> {
        match self {
            SuggestionOutcome::Structured { draft } => Some(draft),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryArtifact {
    pub id: Uuid,
    pub model_id: String,
    pub generated_at: jiff::Timestamp,
    pub outcome: SummaryOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SuggestionArtifact {
    pub id: Uuid,
    pub model_id: String,
    pub generated_at: jiff::Timestamp,
    pub outcome: SuggestionOutcome,
}

/// Lifecycle of one artifact within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ArtifactState {
    NotGenerated,
    Generated,
}

impl ArtifactState {
    pub fn of<T>(artifact: &Option<T>) -> Self {
        if artifact.is_some() {
            ArtifactState::Generated
        } else {
            ArtifactState::NotGenerated
        }
    }
}
