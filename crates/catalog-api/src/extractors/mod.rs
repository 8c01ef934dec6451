//! Request parameter extraction.

pub mod pagination;
pub mod path;

pub use pagination::PaginationParams;
pub use path::parse_product_id;
