use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobmatch::config::Config;
use jobmatch::matching::engine::{JobMatcher, KeywordJobMatcher};
use jobmatch::matching::reference::ReferenceData;
use jobmatch::routes::build_router;
use jobmatch::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so RUST_LOG from .env is honoured
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Match API v{}", env!("CARGO_PKG_VERSION"));

    // Reference tables: override file if configured, built-in otherwise
    let reference = match &config.reference_data_path {
        Some(path) => {
            let data = ReferenceData::from_json_file(path)
                .with_context(|| format!("Invalid reference data at {}", path.display()))?;
            info!("Loaded reference data from {}", path.display());
            data
        }
        None => ReferenceData::builtin(),
    };
    info!(
        "Reference data: {} roles, {} skills",
        reference.roles().len(),
        reference.skills().len()
    );

    let matcher: Arc<dyn JobMatcher> = Arc::new(KeywordJobMatcher::new(reference));

    let state = AppState {
        config: config.clone(),
        matcher,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
