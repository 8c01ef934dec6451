//! # catalog-api
//!
//! HTTP API layer for the catalog backend built on Axum.
//!
//! Exposes the product listing and CRUD endpoints plus a health probe,
//! with CORS, tracing, and request logging middleware and a single
//! mapping from [`catalog_core::AppError`] to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use state::AppState;
