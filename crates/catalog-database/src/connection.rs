//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

use catalog_core::config::DatabaseConfig;
use catalog_core::error::{AppError, ErrorKind};

use crate::repositories::{PgCategoryRepository, PgProductRepository};

/// Shared handle to the catalog database.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open a pool sized and timed according to `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let target = redact_credentials(&config.url);
        info!(
            url = %target,
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Opening catalog database pool"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections.min(config.max_connections))
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                warn!(url = %target, error = %e, "Catalog database unreachable");
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to {target}: {e}"),
                    e,
                )
            })?;

        info!(url = %target, "Catalog database pool ready");
        Ok(Self { pool })
    }

    /// Product store sharing this pool.
    pub fn products(&self) -> PgProductRepository {
        PgProductRepository::new(self.pool.clone())
    }

    /// Category store sharing this pool.
    pub fn categories(&self) -> PgCategoryRepository {
        PgCategoryRepository::new(self.pool.clone())
    }

    /// Round-trip a trivial query to confirm the database answers.
    ///
    /// Fails with `ServiceUnavailable` when it does not.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| {
                AppError::with_source(ErrorKind::ServiceUnavailable, "Database ping failed", e)
            })
    }

    /// Close every connection, waiting for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Catalog database pool closed");
    }
}

/// Replace the password in a connection URL with `****` for logging.
fn redact_credentials(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((userinfo, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    match userinfo.split_once(':') {
        Some((user, _password)) => format!("{scheme}://{user}:****@{host}"),
        None => url.to_string(),
    }
}
