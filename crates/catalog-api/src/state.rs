//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use catalog_core::config::AppConfig;
use catalog_database::DatabasePool;
use catalog_service::CatalogService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Catalog use cases
    pub catalog: Arc<CatalogService>,
    /// Database handle probed by the health endpoint; `None` for in-memory stores
    pub database: Option<DatabasePool>,
}

impl AppState {
    /// Creates state backed by the given service.
    pub fn new(config: AppConfig, catalog: CatalogService) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            database: None,
        }
    }

    /// Attaches the database pool checked by `GET /api/health`.
    pub fn with_database(mut self, database: DatabasePool) -> Self {
        self.database = Some(database);
        self
    }
}
