use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the HTTP router over the given state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/vocabulary", get(routes::vocabulary::get_vocabulary))
        .route("/sessions", post(routes::sessions::create_session))
        .route(
            "/sessions/{id}",
            get(routes::sessions::get_session).delete(routes::sessions::delete_session),
        )
        .route("/sessions/{id}/intake", put(routes::sessions::update_intake))
        .route("/sessions/{id}/summary", post(routes::generate::generate_summary))
        .route(
            "/sessions/{id}/suggestion",
            post(routes::generate::generate_suggestion),
        )
        .route(
            "/sessions/{id}/final-plan",
            post(routes::generate::compose_final_plan),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
