//! Connection pool construction and schema migrations.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Opens a PostgreSQL pool sized by `config`.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    info!(
        min_connections = config.min_connections,
        max_connections = config.max_connections,
        "connecting to PostgreSQL"
    );
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await?;
    info!("PostgreSQL pool ready");
    Ok(pool)
}

// Both services may share one database and one `_sqlx_migrations` table,
// so versions are disjoint and each migrator skips the other's rows.
fn metric_migrator() -> Migrator {
    let mut migrator = sqlx::migrate!("./migrations/metrics");
    migrator.set_ignore_missing(true);
    migrator
}

fn order_migrator() -> Migrator {
    let mut migrator = sqlx::migrate!("./migrations/orders");
    migrator.set_ignore_missing(true);
    migrator
}

/// Creates the `metric` table if it does not exist yet.
pub async fn run_metric_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    metric_migrator().run(pool).await
}

/// Creates the `order` table if it does not exist yet.
pub async fn run_order_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    order_migrator().run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn metric_and_order_migration_versions_are_disjoint() {
        let metric: HashSet<i64> = metric_migrator().iter().map(|m| m.version).collect();
        let order: HashSet<i64> = order_migrator().iter().map(|m| m.version).collect();

        assert!(!metric.is_empty());
        assert!(!order.is_empty());
        assert!(metric.is_disjoint(&order));
    }

    #[test]
    fn migrators_tolerate_each_others_applied_versions() {
        assert!(metric_migrator().ignore_missing);
        assert!(order_migrator().ignore_missing);
    }
}
