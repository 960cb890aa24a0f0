mod config;
mod errors;
mod llm_client;
mod routes;
mod sequence;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CompletionBackend, OpenAiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Dripline API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the completion backend when the credential is configured.
    // Without it the service still starts; generation endpoints answer
    // MISSING_CONFIGURATION until the credential is supplied.
    let llm: Option<Arc<dyn CompletionBackend>> = match &config.openai_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(OpenAiClient::new(key.clone())))
        }
        None => {
            warn!("OPENAI_API_KEY not set; generation endpoints will return MISSING_CONFIGURATION");
            None
        }
    };

    // Build app state
    let state = AppState { llm };

    // Build router. The permissive CORS layer also answers OPTIONS preflight
    // with an empty success, matching the browser-facing contract.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
