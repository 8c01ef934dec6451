//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use catalog_core::types::CategoryId;

/// A product category. Products reference categories; they never own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

impl Category {
    /// Create a category value.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
