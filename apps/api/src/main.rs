mod analytics;
mod config;
mod dataset;
mod errors;
mod matcher;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analytics::buckets::BucketConfig;
use crate::analytics::color::ColorScaleConfig;
use crate::config::Config;
use crate::matcher::{JobMatcher, RemoteMatcher, StaticMatcher};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Matchboard API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the matcher backend
    let matcher: Arc<dyn JobMatcher> = match (&config.match_service_url, config.match_offline) {
        (Some(url), false) => {
            info!("Match service: {url}");
            Arc::new(RemoteMatcher::new(url.clone()))
        }
        _ => {
            info!("Running offline against the bundled dataset");
            Arc::new(StaticMatcher::bundled())
        }
    };

    // Seed the session collection so the dashboard renders before any upload
    let seed = dataset::fallback_jobs();
    info!("Seeded session store with {} bundled jobs", seed.len());

    let state = AppState {
        matcher,
        jobs: Arc::new(RwLock::new(seed)),
        bucket_config: BucketConfig::default(),
        color_config: ColorScaleConfig::default(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the dashboard is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
