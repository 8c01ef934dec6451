//! Typed path parameter helpers.

use catalog_core::error::AppError;
use catalog_core::types::ProductId;

/// Parses a product id from a path segment.
pub fn parse_product_id(s: &str) -> Result<ProductId, AppError> {
    s.parse::<ProductId>()
        .map_err(|_| AppError::validation(format!("Invalid product id: {s}")))
}
