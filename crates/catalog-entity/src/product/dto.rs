//! Transport representation of a product.

use serde::{Deserialize, Serialize};
use validator::Validate;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::types::{CategoryId, ProductId};

/// The boundary-safe shape of a product.
///
/// Carries the category as a plain identifier, never the resolved record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProductDto {
    /// Identifier; present on reads, ignored on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Product name.
    #[validate(length(min = 8, max = 50, message = "Product name must be 8 to 50 characters"))]
    pub name: String,
    /// Price in the smallest currency unit.
    #[serde(default)]
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i32,
    /// Referenced category identifier.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Free-form description.
    #[serde(default)]
    #[validate(length(max = 100, message = "Description must be at most 100 characters"))]
    pub description: Option<String>,
}

impl ProductDto {
    /// Run field validation, mapping failures to a validation error.
    pub fn check(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::validation(format!("Invalid product: {e}")))
    }
}
