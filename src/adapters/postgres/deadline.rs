use std::future::Future;
use std::time::Duration;

use tracing::error;

use crate::domain::foundation::DomainError;

/// Runs a query under `limit`, mapping elapsed deadlines to `Timeout` and
/// driver failures to `DatabaseError`.
pub(super) async fn within<T, F>(
    limit: Duration,
    operation: &'static str,
    query: F,
) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, query).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            error!(operation, error = %e, "query failed");
            Err(DomainError::database(format!("Failed to {}: {}", operation, e)))
        }
        Err(_) => {
            error!(operation, timeout_ms = limit.as_millis() as u64, "query timed out");
            Err(DomainError::timeout(operation))
        }
    }
}
