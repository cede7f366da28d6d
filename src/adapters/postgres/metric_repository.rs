//! PostgreSQL implementation of MetricRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::time::Duration;
use tracing::{info, warn};

use super::deadline::within;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::metric::{Metric, MetricIdentity};
use crate::ports::MetricRepository;

/// Stores metrics in the `metric` table, keyed by the full identity.
pub struct PostgresMetricRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresMetricRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct IdentityRow {
    time: DateTime<Utc>,
    service_url: String,
    metric_name: String,
    pod_name: String,
}

impl From<IdentityRow> for MetricIdentity {
    fn from(row: IdentityRow) -> Self {
        MetricIdentity::new(
            Timestamp::from_datetime(row.time),
            row.service_url,
            row.metric_name,
            row.pod_name,
        )
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MetricRow {
    time: DateTime<Utc>,
    service_url: String,
    metric_name: String,
    pod_name: String,
    metric_value: f64,
}

impl From<MetricRow> for Metric {
    fn from(row: MetricRow) -> Self {
        let identity = MetricIdentity::new(
            Timestamp::from_datetime(row.time),
            row.service_url,
            row.metric_name,
            row.pod_name,
        );
        Metric::new(identity, row.metric_value)
    }
}

#[async_trait]
impl MetricRepository for PostgresMetricRepository {
    async fn save(&self, metric: &Metric) -> Result<MetricIdentity, DomainError> {
        let identity = metric.identity();
        let row: IdentityRow = within(
            self.query_timeout,
            "insert metric",
            sqlx::query_as(
                r#"
                INSERT INTO metric (time, service_url, metric_name, pod_name, metric_value)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING time, service_url, metric_name, pod_name
                "#,
            )
            .bind(identity.time.as_datetime())
            .bind(&identity.service_url)
            .bind(&identity.metric_name)
            .bind(&identity.pod_name)
            .bind(metric.value())
            .fetch_one(&self.pool),
        )
        .await?;

        info!(%identity, "metric row inserted");
        Ok(row.into())
    }

    async fn find_by_identity(
        &self,
        identity: &MetricIdentity,
    ) -> Result<Option<Metric>, DomainError> {
        let row: Option<MetricRow> = within(
            self.query_timeout,
            "load metric",
            sqlx::query_as(
                r#"
                SELECT time, service_url, metric_name, pod_name, metric_value
                FROM metric
                WHERE time = $1 AND service_url = $2 AND metric_name = $3 AND pod_name = $4
                "#,
            )
            .bind(identity.time.as_datetime())
            .bind(&identity.service_url)
            .bind(&identity.metric_name)
            .bind(&identity.pod_name)
            .fetch_optional(&self.pool),
        )
        .await?;

        if row.is_none() {
            warn!(%identity, "no metric row matches identity");
        }
        Ok(row.map(Metric::from))
    }
}
