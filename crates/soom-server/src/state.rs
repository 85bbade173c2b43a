use std::collections::HashMap;
use std::sync::Arc;

use jiff::SignedDuration;
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use soom_core::models::session::IntakeSession;
use soom_gemini::client::CompletionService;
use soom_report::error::ReportError;
use soom_report::render::ReportRenderer;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Sessions are kept in memory only. A session left idle for longer than
/// `session_ttl` is discarded the next time the map is locked.
#[derive(Clone)]
pub struct AppState {
    sessions: Arc<Mutex<HashMap<Uuid, IntakeSession>>>,
    session_ttl: SignedDuration,
    pub completion: Arc<dyn CompletionService>,
    pub renderer: Arc<ReportRenderer>,
}

impl AppState {
    pub fn new(
        completion: Arc<dyn CompletionService>,
        session_ttl: SignedDuration,
    ) -> Result<Self, ReportError> {
        Ok(Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            session_ttl,
            completion,
            renderer: Arc::new(ReportRenderer::new()?),
        })
    }

    /// Lock the session map with idle sessions already evicted.
    pub async fn sessions(&self) -> MutexGuard<'_, HashMap<Uuid, IntakeSession>> {
        let mut sessions = self.sessions.lock().await;
        let now = jiff::Timestamp::now();

        let before = sessions.len();
        sessions.retain(|_, session| session.idle_for(now) < self.session_ttl);

        let expired = before - sessions.len();
        if expired > 0 {
            tracing::info!(expired, remaining = sessions.len(), "evicted idle sessions");
        }
        sessions
    }
}
