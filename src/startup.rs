//! Wiring shared by the two binaries: repository selection and shutdown.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info};

use crate::adapters::memory::{InMemoryMetricRepository, InMemoryOrderRepository};
use crate::adapters::postgres::{
    create_pool, run_metric_migrations, run_order_migrations, PostgresMetricRepository,
    PostgresOrderRepository,
};
use crate::config::{DatabaseBackend, DatabaseConfig};
use crate::ports::{MetricRepository, OrderRepository};

/// Builds the metric repository for the configured backend, migrating
/// PostgreSQL first when enabled.
pub async fn metric_repository(
    config: &DatabaseConfig,
) -> anyhow::Result<Arc<dyn MetricRepository>> {
    match config.backend {
        DatabaseBackend::Memory => {
            info!("using in-memory metric storage");
            Ok(Arc::new(InMemoryMetricRepository::new()))
        }
        DatabaseBackend::Postgres => {
            let pool = create_pool(config)
                .await
                .context("Failed to connect to PostgreSQL")?;
            if config.run_migrations {
                run_metric_migrations(&pool)
                    .await
                    .context("Failed to run metric migrations")?;
                info!("metric migrations applied");
            }
            Ok(Arc::new(PostgresMetricRepository::new(
                pool,
                config.query_timeout(),
            )))
        }
    }
}

/// Builds the order repository for the configured backend.
pub async fn order_repository(
    config: &DatabaseConfig,
) -> anyhow::Result<Arc<dyn OrderRepository>> {
    match config.backend {
        DatabaseBackend::Memory => {
            info!("using in-memory order storage");
            Ok(Arc::new(InMemoryOrderRepository::new()))
        }
        DatabaseBackend::Postgres => {
            let pool = create_pool(config)
                .await
                .context("Failed to connect to PostgreSQL")?;
            if config.run_migrations {
                run_order_migrations(&pool)
                    .await
                    .context("Failed to run order migrations")?;
                info!("order migrations applied");
            }
            Ok(Arc::new(PostgresOrderRepository::new(
                pool,
                config.query_timeout(),
            )))
        }
    }
}

/// Serves `router` until `shutdown` resolves. Server failures are returned,
/// not swallowed.
pub async fn serve_http<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("REST server terminated unexpectedly")
}

/// Resolves on SIGINT or SIGTERM.
#[cfg(unix)]
pub async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            error!(error = %e, "failed to install SIGTERM handler, waiting for SIGINT only");
            let _ = tokio::signal::ctrl_c().await;
            info!("SIGINT received, starting graceful shutdown");
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("SIGINT received, starting graceful shutdown");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received, starting graceful shutdown");
        }
    }
}

/// Resolves on SIGINT.
#[cfg(not(unix))]
pub async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received, starting graceful shutdown");
}

/// Spawns a task that flips the returned channel to `true` on shutdown.
pub fn spawn_shutdown_listener() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = tx.send(true);
    });
    rx
}

/// Resolves once `rx` reports shutdown or its sender is gone.
pub async fn wait_for_shutdown(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}
