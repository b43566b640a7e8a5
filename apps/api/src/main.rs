mod config;
mod errors;
mod extraction;
mod models;
mod routes;
mod scoring;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::extraction::DocumentTextExtractor;
use crate::routes::build_router;
use crate::scoring::{HeuristicAtsScorer, SkillCatalog};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill catalog (built-in unless CATALOG_PATH overrides it)
    let catalog = match &config.catalog_path {
        Some(path) => SkillCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load skill catalog from {}", path.display()))?,
        None => SkillCatalog::standard().context("Built-in skill catalog is invalid")?,
    };
    info!(
        "Skill catalog loaded: {} technical, {} soft, {} action verbs, {} achievement patterns",
        catalog.technical_skills.len(),
        catalog.soft_skills.len(),
        catalog.action_verbs.len(),
        catalog.achievement_patterns.len()
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        scorer: Arc::new(HeuristicAtsScorer::new(Arc::new(catalog))),
        extractor: Arc::new(DocumentTextExtractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the portal's domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
