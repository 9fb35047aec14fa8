mod app;
mod form;

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    path::Path,
    sync::Arc,
};

use parcel_core::{
    config::{self, AppConfig},
    Network, ParcelRegistry, PricingEngine, SharedRegistry,
};
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = config::ensure_default_config()?;
    let config = AppConfig::load()?;
    init_logging(&config.log_dir)?;
    tracing::info!(config = %config_path.display(), "Configuration loaded");

    let network = Network::from_config(&config.network).context("invalid network in config")?;
    tracing::info!(
        locations = network.locations().names().len(),
        routes = config.network.routes.len(),
        "Network ready"
    );
    let registry = SharedRegistry::new(ParcelRegistry::new(
        Arc::new(network),
        PricingEngine::default(),
    ));

    let mut app = app::ParcelApp::new(registry);
    app.run().await
}

fn init_logging(log_dir: &Path) -> Result<()> {
    let log_dir = if log_dir.is_absolute() {
        log_dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(log_dir)
    };
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let log_path = log_dir.join("parcel-route.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // The terminal UI owns stdout, so events only go to the file.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .compact()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
