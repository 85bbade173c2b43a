use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use soom_core::models::artifact::{
    SuggestionArtifact, SuggestionOutcome, SummaryArtifact, SummaryOutcome,
};
use soom_core::models::intake::PatientIntake;
use soom_core::reconcile::filter_suggestion;

use crate::client::{Completion, CompletionService};
use crate::error::GeminiError;
use crate::extract::{Extraction, extract_json_object};
use crate::prompt;

/// Generate the patient summary.
///
/// Transport and upstream failures are folded into the artifact so the
/// caller can show them inline. Only non-recoverable errors (configuration)
/// are returned as `Err`.
pub fn generate_summary(
    service: &dyn CompletionService,
    intake: &PatientIntake,
) -> Result<SummaryArtifact, GeminiError> {
    let id = Uuid::new_v4();
    info!(artifact_id = %id, model = service.model_id(), "starting summary generation");

    let outcome = match service.complete(&prompt::summary_prompt(intake)) {
        Ok(Completion::Text(text)) => SummaryOutcome::Text { text },
        Ok(Completion::Empty) => SummaryOutcome::Empty,
        Err(e) => match e.kind() {
            Some(kind) => {
                warn!(artifact_id = %id, error = %e, "summary generation failed");
                SummaryOutcome::Failed {
                    kind,
                    message: e.to_string(),
                }
            }
            None => return Err(e),
        },
    };

    info!(artifact_id = %id, "summary generation complete");

    Ok(SummaryArtifact {
        id,
        model_id: service.model_id().to_string(),
        generated_at: jiff::Timestamp::now(),
        outcome,
    })
}

/// Generate the structured treatment suggestion.
///
/// JSON extraction runs only on a successful completion. When no object can
/// be recovered the raw text is kept verbatim in
/// [`SuggestionOutcome::ParseFailure`].
pub fn generate_suggestion(
    service: &dyn CompletionService,
    intake: &PatientIntake,
) -> Result<SuggestionArtifact, GeminiError> {
    let id = Uuid::new_v4();
    info!(artifact_id = %id, model = service.model_id(), "starting suggestion generation");

    let outcome = match service.complete(&prompt::suggestion_prompt(intake)) {
        Ok(Completion::Text(raw)) => match extract_json_object(&raw) {
            Extraction::Object(object) => SuggestionOutcome::Structured {
                draft: filter_suggestion(&Value::Object(object), intake),
            },
            Extraction::Failed { raw, reason } => {
                warn!(artifact_id = %id, reason = %reason, "suggestion was not valid JSON");
                SuggestionOutcome::ParseFailure { raw, reason }
            }
        },
        Ok(Completion::Empty) => SuggestionOutcome::Empty,
        Err(e) => match e.kind() {
            Some(kind) => {
                warn!(artifact_id = %id, error = %e, "suggestion generation failed");
                SuggestionOutcome::Failed {
                    kind,
                    message: e.to_string(),
                }
            }
            None => return Err(e),
        },
    };

    info!(artifact_id = %id, "suggestion generation complete");

    Ok(SuggestionArtifact {
        id,
        model_id: service.model_id().to_string(),
        generated_at: jiff::Timestamp::now(),
        outcome,
    })
}
