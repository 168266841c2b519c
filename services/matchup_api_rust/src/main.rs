use anyhow::{Context, Result};
use dotenv::dotenv;
use matchup_api_rust::{build_router, AppState, Config};
use matchup_rust_core::TeamCatalog;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Matchup API Service...");

    let config = Config::from_env();

    let catalog = match &config.team_catalog_path {
        Some(path) => TeamCatalog::load(path)
            .with_context(|| format!("Failed to load team catalog from {}", path.display()))?,
        None => TeamCatalog::default_roster(),
    };
    info!(
        "Team catalog ready: {} teams ({})",
        catalog.len(),
        config
            .team_catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in roster".to_string())
    );

    let app = build_router(AppState::new(catalog), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    info!(
        "Matchup API listening on {} (static assets: {})",
        listener.local_addr()?,
        config.static_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Matchup API stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
