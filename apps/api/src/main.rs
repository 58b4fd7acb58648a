mod config;
mod errors;
mod feedback;
mod llm_client;
mod routes;
mod session;
mod speech;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GroqModel, OpenAiModel, TextModel, GROQ_MODEL, OPENAI_MODEL};
use crate::routes::build_router;
use crate::speech::{DeepgramKeyIssuer, KeyIssuer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; provider credentials may be absent and are
    // only enforced per handler.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting interview API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize provider clients
    let openai: Arc<dyn TextModel> = Arc::new(OpenAiModel::new(config.openai_api_key.clone()));
    let groq: Arc<dyn TextModel> = Arc::new(GroqModel::new(config.groq_api_key.clone()));
    let key_issuer: Arc<dyn KeyIssuer> = Arc::new(DeepgramKeyIssuer::new(
        config.deepgram_api_key.clone(),
        config.deepgram_project_id.clone(),
    ));
    info!("Provider clients initialized (openai: {OPENAI_MODEL}, groq: {GROQ_MODEL})");

    // Build app state
    let state = AppState {
        openai,
        groq,
        key_issuer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
