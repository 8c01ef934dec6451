//! In-memory record stores.
//!
//! Drop-in replacements for the PostgreSQL repositories, used by tests and
//! by local runs without a database. Ordering follows the same whitelisted
//! columns, except that missing values sort before present ones.

pub mod category;
pub mod product;

pub use category::InMemoryCategoryRepository;
pub use product::InMemoryProductRepository;
