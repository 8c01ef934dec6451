//! In-memory product store.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::{EntityLookup, Repository};
use catalog_core::types::{PageQuery, ProductId, SortDirection, SortOrder};
use catalog_entity::product::Product;

#[derive(Debug)]
struct State {
    rows: BTreeMap<ProductId, Product>,
    next_id: i32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Product store backed by a shared ordered map.
///
/// Identifiers are assigned sequentially from 1 and never reused.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryProductRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare_column(a: &Product, b: &Product, column: &str) -> Ordering {
    match column {
        "id" => a.id.cmp(&b.id),
        "name" => a.name.cmp(&b.name),
        "price" => a.price.cmp(&b.price),
        "description" => a.description.cmp(&b.description),
        "reg_date" => a.reg_date.cmp(&b.reg_date),
        "category_id" => a.category_id().cmp(&b.category_id()),
        _ => Ordering::Equal,
    }
}

fn compare(a: &Product, b: &Product, sort: &[SortOrder]) -> Ordering {
    sort.iter()
        .map(|order| {
            let ord = compare_column(a, b, order.column);
            match order.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[async_trait]
impl EntityLookup<Product, ProductId> for InMemoryProductRepository {
    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }
}

#[async_trait]
impl Repository<Product, ProductId> for InMemoryProductRepository {
    async fn insert(&self, product: &Product) -> AppResult<Product> {
        let mut state = self.state.write().await;
        let id = ProductId(state.next_id);
        state.next_id += 1;

        let stored = Product {
            id: Some(id),
            ..product.clone()
        };
        state.rows.insert(id, stored.clone());

        info!(product_id = %id, "Inserted product");
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> AppResult<Product> {
        let id = product
            .id
            .ok_or_else(|| AppError::validation("Cannot update a product without an identifier"))?;

        let mut state = self.state.write().await;
        let existing = state
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))?;

        existing.name = product.name.clone();
        existing.price = product.price;
        existing.category = product.category.clone();
        existing.description = product.description.clone();

        info!(product_id = %id, "Updated product");
        Ok(existing.clone())
    }

    async fn find_page(&self, query: &PageQuery) -> AppResult<(Vec<Product>, u64)> {
        let state = self.state.read().await;
        let total = state.rows.len() as u64;

        let mut rows: Vec<&Product> = state.rows.values().collect();
        rows.sort_by(|a, b| compare(a, b, query.sort()));

        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit()).unwrap_or(usize::MAX);
        let page: Vec<Product> = rows.into_iter().skip(offset).take(limit).cloned().collect();

        debug!(offset, limit, returned = page.len(), total, "Listing products");
        Ok((page, total))
    }

    async fn delete_by_id(&self, id: ProductId) -> AppResult<()> {
        if self.state.write().await.rows.remove(&id).is_some() {
            info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.state.read().await.rows.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use catalog_core::error::ErrorKind;
    use catalog_core::types::{CategoryId, PageRequest, SortField};
    use catalog_entity::category::Category;

    fn product(name: &str, price: i32) -> Product {
        Product {
            id: None,
            name: name.to_string(),
            price,
            category: None,
            description: None,
            reg_date: Utc::now(),
        }
    }

    async fn seeded(count: i32) -> InMemoryProductRepository {
        let repo = InMemoryProductRepository::new();
        for n in 1..=count {
            repo.insert(&product(&format!("Product {n:03}"), n * 100))
                .await
                .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();
        let first = repo.insert(&product("Paper Notebook", 1200)).await.unwrap();
        let second = repo.insert(&product("Fountain Pen", 5600)).await.unwrap();

        assert_eq!(first.id, Some(ProductId(1)));
        assert_eq!(second.id, Some(ProductId(2)));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_default_sort_returns_newest_first() {
        let repo = seeded(25).await;
        let query = PageRequest::new(1, 10).normalize::<Product>().unwrap();

        let (rows, total) = repo.find_page(&query).await.unwrap();
        assert_eq!(total, 25);
        let ids: Vec<i32> = rows.iter().filter_map(|p| p.id.map(ProductId::get)).collect();
        assert_eq!(ids, (16..=25).rev().collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_last_page_is_partial() {
        let repo = seeded(25).await;
        let query = PageRequest::new(3, 10)
            .sorted_by(SortField::asc("id"))
            .normalize::<Product>()
            .unwrap();

        let (rows, _) = repo.find_page(&query).await.unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].id, Some(ProductId(21)));

        let beyond = PageRequest::new(9, 10).normalize::<Product>().unwrap();
        let (rows, total) = repo.find_page(&beyond).await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(total, 25);
    }

    #[tokio::test]
    async fn test_equal_keys_fall_back_to_tiebreaker() {
        let repo = InMemoryProductRepository::new();
        for name in ["Same Price A", "Same Price B", "Same Price C"] {
            repo.insert(&product(name, 1000)).await.unwrap();
        }
        let query = PageRequest::new(1, 10)
            .sorted_by(SortField::desc("price"))
            .normalize::<Product>()
            .unwrap();

        let (rows, _) = repo.find_page(&query).await.unwrap();
        let ids: Vec<_> = rows.iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![Some(ProductId(1)), Some(ProductId(2)), Some(ProductId(3))]
        );
    }

    #[tokio::test]
    async fn test_update_keeps_reg_date() {
        let repo = InMemoryProductRepository::new();
        let stored = repo.insert(&product("Desk Organizer", 3000)).await.unwrap();

        let changed = Product {
            name: "Desk Organizer XL".to_string(),
            price: 4500,
            category: Some(Category::new(CategoryId(2), "Office")),
            reg_date: Utc::now() + chrono::Duration::days(3),
            ..stored.clone()
        };
        let updated = repo.update(&changed).await.unwrap();

        assert_eq!(updated.name, "Desk Organizer XL");
        assert_eq!(updated.category_id(), Some(CategoryId(2)));
        assert_eq!(updated.reg_date, stored.reg_date);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let ghost = Product {
            id: Some(ProductId(40)),
            ..product("Ghost Product", 0)
        };
        let err = repo.update(&ghost).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = seeded(2).await;
        repo.delete_by_id(ProductId(1)).await.unwrap();
        repo.delete_by_id(ProductId(1)).await.unwrap();

        assert!(repo.find_by_id(ProductId(1)).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 1);

        // Identifiers are not reused after a delete.
        let next = repo.insert(&product("Replacement Item", 10)).await.unwrap();
        assert_eq!(next.id, Some(ProductId(3)));
    }
}
