//! PostgreSQL-backed record stores.
//!
//! Expected tables:
//!
//! ```sql
//! CREATE TABLE categories (
//!     id   SERIAL PRIMARY KEY,
//!     name VARCHAR(50) NOT NULL
//! );
//!
//! CREATE TABLE products (
//!     id          SERIAL PRIMARY KEY,
//!     name        VARCHAR(50) NOT NULL,
//!     price       INTEGER NOT NULL DEFAULT 0,
//!     category_id INTEGER NULL REFERENCES categories (id),
//!     description VARCHAR(100) NULL,
//!     reg_date    TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

pub mod category;
pub mod product;

pub use category::PgCategoryRepository;
pub use product::PgProductRepository;
