//! Order service - REST entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use monitoring_system::adapters::http::{order_router, OrderAppState};
use monitoring_system::config::{AppConfig, Service};
use monitoring_system::{startup, telemetry};

#[derive(Debug, Parser)]
#[command(name = "order-service", version, about = "Creates and serves orders")]
struct Cli {
    /// YAML configuration file; skipped when missing
    #[arg(short, long, env = "MONITORING_CONFIG", default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_validated(Some(&cli.config), Service::OrderService)
        .context("Failed to load configuration")?;

    telemetry::init_logging(&config.server).context("Failed to initialize logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.database.backend,
        "Starting order service"
    );

    let repository = startup::order_repository(&config.database).await?;

    let addr = config.server.socket_addr()?;
    let router = order_router(
        OrderAppState::new(repository),
        config.server.request_timeout(),
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener on {addr}"))?;
    tracing::info!(%addr, "Order service listening");

    startup::serve_http(listener, router, startup::shutdown_signal()).await?;

    tracing::info!("Order service shutdown complete");
    Ok(())
}
