//! # catalog-database
//!
//! PostgreSQL connection management and the record stores behind the
//! catalog service: sqlx-backed repositories for production and in-memory
//! repositories that can stand in for them.

pub mod connection;
pub mod memory;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::{InMemoryCategoryRepository, InMemoryProductRepository};
pub use repositories::{PgCategoryRepository, PgProductRepository};
