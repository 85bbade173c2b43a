use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use uuid::Uuid;

use soom_core::models::artifact::{SuggestionArtifact, SummaryArtifact};
use soom_core::models::intake::PatientIntake;
use soom_core::models::plan::{FinalPlan, StaffSelection};
use soom_core::models::session::IntakeSession;
use soom_core::reconcile;
use soom_gemini::client::CompletionService;
use soom_gemini::generate;
use soom_report::render::summary_text;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SummaryResponse {
    pub artifact: SummaryArtifact,
    pub text: String,
}

#[derive(Serialize)]
pub struct SuggestionResponse {
    pub artifact: SuggestionArtifact,
    pub text: String,
}

#[derive(Serialize)]
pub struct FinalPlanResponse {
    pub plan: FinalPlan,
    pub report: String,
}

async fn current_intake(state: &AppState, id: Uuid) -> Result<PatientIntake, ApiError> {
    with_session(state, id, |session| session.intake.clone()).await
}

async fn with_session<T>(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut IntakeSession) -> T,
) -> Result<T, ApiError> {
    let mut sessions = state.sessions().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::session_not_found(id))?;
    session.touch();
    Ok(f(session))
}

/// Generate (or regenerate) the patient summary from the current intake.
///
/// The completion call is blocking, so it runs off the async runtime and the
/// session lock is not held across it.
pub async fn generate_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let intake = current_intake(&state, id).await?;
    let service: Arc<dyn CompletionService> = Arc::clone(&state.completion);

    let artifact =
        tokio::task::spawn_blocking(move || generate::generate_summary(service.as_ref(), &intake))
            .await??;

    let text = summary_text(Some(&artifact.outcome));
    with_session(&state, id, |session| session.record_summary(artifact.clone())).await?;

    Ok(Json(SummaryResponse { artifact, text }))
}

/// Generate (or regenerate) the structured treatment suggestion.
pub async fn generate_suggestion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuggestionResponse>, ApiError> {
    let intake = current_intake(&state, id).await?;
    let service: Arc<dyn CompletionService> = Arc::clone(&state.completion);

    let artifact = tokio::task::spawn_blocking(move || {
        generate::generate_suggestion(service.as_ref(), &intake)
    })
    .await??;

    let text = state.renderer.suggestion_text(&artifact.outcome)?;
    with_session(&state, id, |session| session.record_suggestion(artifact.clone())).await?;

    Ok(Json(SuggestionResponse { artifact, text }))
}

/// Compose the clinician-confirmed plan and render the final report.
///
/// The latest structured suggestion, if any, is carried along for
/// comparison only; the selection alone decides the plan.
pub async fn compose_final_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(selection): Json<StaffSelection>,
) -> Result<Json<FinalPlanResponse>, ApiError> {
    let mut sessions = state.sessions().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::session_not_found(id))?;
    session.touch();

    let summary = session.summary.as_ref().map(|a| &a.outcome);
    let suggestion = session.suggestion.as_ref().map(|a| &a.outcome);
    let reference = suggestion.and_then(|o| o.draft());

    let plan = reconcile::compose_final_plan(&session.intake, reference, &selection)?;
    let report = state.renderer.report(summary, suggestion, &plan)?;

    tracing::info!(session_id = %id, plan_id = %plan.id, "final plan composed");
    session.record_final_plan(plan.clone(), report.clone());

    Ok(Json(FinalPlanResponse { plan, report }))
}
