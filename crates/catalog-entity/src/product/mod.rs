//! Product domain entities.

pub mod convert;
pub mod dto;
pub mod model;

pub use convert::{to_stored, to_stored_at, to_transport};
pub use dto::ProductDto;
pub use model::Product;
