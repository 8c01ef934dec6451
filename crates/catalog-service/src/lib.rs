//! # catalog-service
//!
//! Business logic for the catalog backend. [`CatalogService`] turns raw
//! page requests into bounded store queries and moves products between
//! their stored and transport shapes.
//!
//! Stores are injected at construction time as trait objects, so the same
//! service runs against PostgreSQL or the in-memory repositories.

pub mod catalog;

pub use catalog::CatalogService;
