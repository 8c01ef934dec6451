//! In-memory category store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use catalog_core::result::AppResult;
use catalog_core::traits::EntityLookup;
use catalog_core::types::CategoryId;
use catalog_entity::category::Category;

/// Category store backed by a shared ordered map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<CategoryId, Category>>>,
}

impl InMemoryCategoryRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given categories.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let map = categories.into_iter().map(|c| (c.id, c)).collect();
        Self {
            categories: Arc::new(RwLock::new(map)),
        }
    }

    /// Add a category under the next free identifier.
    pub async fn insert(&self, name: impl Into<String>) -> Category {
        let mut categories = self.categories.write().await;
        let next = categories.keys().next_back().map_or(1, |id| id.get() + 1);
        let category = Category::new(CategoryId(next), name);
        categories.insert(category.id, category.clone());

        info!(category_id = %category.id, "Created category");
        category
    }

    /// List every category ordered by identifier.
    pub async fn find_all(&self) -> Vec<Category> {
        self.categories.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl EntityLookup<Category, CategoryId> for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> AppResult<Option<Category>> {
        Ok(self.categories.read().await.get(&id).cloned())
    }
}
