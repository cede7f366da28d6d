//! Metrics collector - REST and gRPC entry point
//!
//! Serves `POST /metric` / `GET /metric` over HTTP and the
//! `MetricsCollector` gRPC service side by side. Both listeners stop on the
//! same shutdown signal.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use monitoring_system::adapters::grpc::MetricsCollectorService;
use monitoring_system::adapters::http::{metric_router, MetricAppState};
use monitoring_system::config::{AppConfig, Service};
use monitoring_system::{startup, telemetry};

#[derive(Debug, Parser)]
#[command(name = "metrics-collector", version, about = "Collects service metrics")]
struct Cli {
    /// YAML configuration file; skipped when missing
    #[arg(short, long, env = "MONITORING_CONFIG", default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_validated(Some(&cli.config), Service::MetricsCollector)
        .context("Failed to load configuration")?;

    telemetry::init_logging(&config.server).context("Failed to initialize logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.database.backend,
        "Starting metrics collector"
    );

    let repository = startup::metric_repository(&config.database).await?;

    let http_addr = config.server.socket_addr()?;
    let grpc_addr = config.grpc.socket_addr()?;
    let shutdown = startup::spawn_shutdown_listener();

    let router = metric_router(
        MetricAppState::new(repository.clone()),
        config.server.request_timeout(),
    );
    let listener = tokio::net::TcpListener::bind(http_addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener on {http_addr}"))?;
    tracing::info!(%http_addr, "REST listening");

    let rest = startup::serve_http(
        listener,
        router,
        startup::wait_for_shutdown(shutdown.clone()),
    );

    tracing::info!(%grpc_addr, "gRPC listening");
    let grpc = async {
        tonic::transport::Server::builder()
            .add_service(MetricsCollectorService::new(repository.clone()).into_service())
            .serve_with_shutdown(grpc_addr, startup::wait_for_shutdown(shutdown.clone()))
            .await
            .context("gRPC server terminated unexpectedly")
    };

    tokio::try_join!(rest, grpc)?;

    tracing::info!("Metrics collector shutdown complete");
    Ok(())
}
