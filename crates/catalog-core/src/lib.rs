//! # catalog-core
//!
//! Core crate for the catalog backend. Contains the store contracts,
//! configuration schemas, typed identifiers, sorting and paging types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other catalog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
