mod completion;
mod config;
mod errors;
mod incident_log;
mod routes;
mod state;
mod triage;

use anyhow::Result;
use aws_config::Region;
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::completion::bedrock::BedrockBackend;
use crate::config::Config;
use crate::incident_log::IncidentLog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (every variable has a default)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SafeLink intake API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the Bedrock completion backend
    let backend = build_bedrock_backend(&config).await;
    info!(
        "Bedrock client initialized (region: {}, model: {})",
        config.aws_region, config.bedrock_model_id
    );

    // Build app state; the incident log lives here for the process lifetime
    let state = AppState {
        log: IncidentLog::new(),
        backend: Arc::new(backend),
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

/// Constructs the Bedrock completion backend, honoring the optional
/// endpoint override used to point at a local Bedrock stand-in.
async fn build_bedrock_backend(config: &Config) -> BedrockBackend {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()));

    if let Some(endpoint) = &config.bedrock_endpoint {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    let client = aws_sdk_bedrockruntime::Client::new(&sdk_config);

    BedrockBackend::new(
        client,
        config.bedrock_model_id.clone(),
        Duration::from_secs(config.backend_timeout_secs),
    )
}
