mod careers;
mod config;
mod errors;
mod models;
mod prediction;
mod questions;
mod roadmap;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::questions::question_bank;
use crate::roadmap::provider::{LocalRoadmapGenerator, RemoteRoadmapClient, RoadmapProvider};
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

    info!("Starting CareerPath API v{}", env!("CARGO_PKG_VERSION"));

    // Load the built-in question bank
    let questions = Arc::new(question_bank());
    info!("Question bank loaded ({} questions)", questions.len());

    // Initialize roadmap provider (local catalog by default, remote service
    // with local fallback when ROADMAP_API_URL is set)
    let roadmap: Arc<dyn RoadmapProvider> = match &config.roadmap_api_url {
        Some(url) => {
            info!("Roadmap provider: remote ({url}) with local fallback");
            Arc::new(RemoteRoadmapClient::new(url.clone()))
        }
        None => {
            info!("Roadmap provider: local catalog");
            Arc::new(LocalRoadmapGenerator)
        }
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        questions,
        roadmap,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
