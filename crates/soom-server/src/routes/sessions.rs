use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use uuid::Uuid;

use soom_core::models::intake::PatientIntake;
use soom_core::models::session::{IntakeSession, SessionStatus};

use crate::error::ApiError;
use crate::state::AppState;

/// A session as the form sees it: stored state, per-artifact status and the
/// intake rendered the way the prompts will see it.
#[derive(Serialize)]
pub struct SessionView {
    #[serde(flatten)]
    pub session: IntakeSession,
    pub status: SessionStatus,
    pub intake_lines: Vec<String>,
}

impl From<IntakeSession> for SessionView {
    fn from(session: IntakeSession) -> Self {
        Self {
            status: session.status(),
            intake_lines: session.intake.display_lines(),
            session,
        }
    }
}

pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let session = IntakeSession::new();
    tracing::info!(session_id = %session.id, "session created");

    state.sessions().await.insert(session.id, session.clone());
    (StatusCode::CREATED, Json(session.into()))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let mut sessions = state.sessions().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::session_not_found(id))?;
    session.touch();
    Ok(Json(session.clone().into()))
}

/// Replace the intake. Generated artifacts stay until re-triggered.
pub async fn update_intake(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(intake): Json<PatientIntake>,
) -> Result<Json<SessionView>, ApiError> {
    let mut sessions = state.sessions().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::session_not_found(id))?;
    session.touch();
    session.set_intake(intake);
    Ok(Json(session.clone().into()))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .sessions()
        .await
        .remove(&id)
        .ok_or_else(|| ApiError::session_not_found(id))?;
    tracing::info!(session_id = %id, "session deleted");
    Ok(StatusCode::NO_CONTENT)
}
