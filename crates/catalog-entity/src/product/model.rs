//! Product entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::types::{CategoryId, ProductId, SortDirection, SortOrder, Sortable};

use crate::category::Category;

/// A product as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-generated identifier; `None` until the record is inserted.
    pub id: Option<ProductId>,
    /// Product name (8 to 50 characters).
    pub name: String,
    /// Price in the smallest currency unit, never negative.
    pub price: i32,
    /// Referenced category, resolved by the store on reads.
    pub category: Option<Category>,
    /// Free-form description (at most 100 characters).
    pub description: Option<String>,
    /// When the product was registered. Never changed by updates.
    pub reg_date: DateTime<Utc>,
}

impl Product {
    /// Identifier of the referenced category, if any.
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.as_ref().map(|c| c.id)
    }
}

impl Sortable for Product {
    fn sort_column(field: &str) -> Option<&'static str> {
        match field {
            "id" => Some("id"),
            "name" => Some("name"),
            "price" => Some("price"),
            "description" => Some("description"),
            "reg_date" => Some("reg_date"),
            "category_id" => Some("category_id"),
            _ => None,
        }
    }

    fn default_sort() -> Vec<SortOrder> {
        vec![SortOrder::new("id", SortDirection::Desc)]
    }

    fn tiebreaker() -> &'static str {
        "id"
    }
}
