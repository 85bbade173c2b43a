use axum::Json;

use soom_core::vocab::Vocabulary;

/// The fixed lists the intake and final-plan forms are built from.
pub async fn get_vocabulary() -> Json<Vocabulary> {
    Json(Vocabulary::fixed())
}
