mod analysis;
mod config;
mod db;
mod errors;
mod extraction;
mod models;
mod render;
mod routes;
mod state;
mod store;
mod uploads;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::catalog::RoleCatalog;
use crate::config::Config;
use crate::db::create_pool;
use crate::extraction::PdfTextExtractor;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgAnalysisStore;

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

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Role table is fixed for the life of the process
    let catalog = RoleCatalog::builtin(&config.default_role)?;
    info!(
        "Role catalog loaded: {} roles, default '{}'",
        catalog.roles().len(),
        catalog.default_role().id
    );

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        extractor: Arc::new(PdfTextExtractor::new(config.max_concurrent_extractions)),
        store: Arc::new(PgAnalysisStore::new(db)),
    };

    if let Some(dir) = &config.static_dir {
        info!("Serving frontend from {}", dir.display());
    }

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
