mod config;
mod gemini;
mod i18n;
mod image;
mod models;
mod pipeline;
mod prompt;
mod routes;

use anyhow::Context;
use routes::{router, AppState};
use tracing_subscriber::{fmt, EnvFilter};
use std::sync::Arc;

use crate::{config::Config, gemini::GeminiClient, image::ImageUrlBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Init tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env();

    let gemini = GeminiClient::new(config.gemini_api_base.clone(), config.gemini_model.clone());
    tracing::info!(model = gemini.model(), image_service = %config.image_service_base, "Story pipeline configured");

    let state = AppState {
        generator: Arc::new(gemini),
        images: ImageUrlBuilder::new(config.image_service_base.clone()),
    };

    let app = router(state);

    let addr = config.bind_addr();
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr).await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
