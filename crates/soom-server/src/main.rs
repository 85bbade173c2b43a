use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use soom_gemini::client::GeminiClient;
use soom_server::config::ServerConfig;
use soom_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    // A missing API key stops start-up here rather than on the first request.
    let client = GeminiClient::new(&config.gemini)?;
    tracing::info!(model = %config.gemini.model, "completion client ready");

    let state = AppState::new(Arc::new(client), config.session_ttl)?;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, session_ttl = %config.session_ttl, "listening");

    axum::serve(listener, soom_server::app(state)).await?;
    Ok(())
}
