//! Product repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, info};

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_core::traits::{EntityLookup, Repository};
use catalog_core::types::{CategoryId, PageQuery, ProductId, SortOrder};
use catalog_entity::category::Category;
use catalog_entity::product::Product;

/// Product columns joined with the referenced category.
const SELECT_PRODUCT: &str = "SELECT p.id, p.name, p.price, p.description, p.reg_date, \
     c.id AS category_id, c.name AS category_name \
     FROM products p LEFT JOIN categories c ON c.id = p.category_id";

/// Flat row shape of [`SELECT_PRODUCT`].
#[derive(Debug, FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    price: i32,
    description: Option<String>,
    reg_date: DateTime<Utc>,
    category_id: Option<CategoryId>,
    category_name: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let category = match (row.category_id, row.category_name) {
            (Some(id), Some(name)) => Some(Category { id, name }),
            _ => None,
        };

        Self {
            id: Some(row.id),
            name: row.name,
            price: row.price,
            category,
            description: row.description,
            reg_date: row.reg_date,
        }
    }
}

/// Repository for product CRUD and paged listing.
#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Render whitelisted ordering terms as an `ORDER BY` list.
fn order_by_clause(sort: &[SortOrder]) -> String {
    sort.iter()
        .map(|order| format!("p.{} {}", order.column, order.direction.as_sql()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convert a row count to the signed integer PostgreSQL binds.
fn sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl EntityLookup<Product, ProductId> for PgProductRepository {
    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        let sql = format!("{SELECT_PRODUCT} WHERE p.id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find product", e))?;

        Ok(row.map(Product::from))
    }
}

#[async_trait]
impl Repository<Product, ProductId> for PgProductRepository {
    async fn insert(&self, product: &Product) -> AppResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            "WITH inserted AS ( \
                 INSERT INTO products (name, price, category_id, description, reg_date) \
                 VALUES ($1, $2, $3, $4, $5) RETURNING * \
             ) \
             SELECT i.id, i.name, i.price, i.description, i.reg_date, \
                    c.id AS category_id, c.name AS category_name \
             FROM inserted i LEFT JOIN categories c ON c.id = i.category_id",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.category_id())
        .bind(&product.description)
        .bind(product.reg_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert product", e))?;

        info!(product_id = %row.id, "Inserted product");
        Ok(row.into())
    }

    async fn update(&self, product: &Product) -> AppResult<Product> {
        let id = product
            .id
            .ok_or_else(|| AppError::validation("Cannot update a product without an identifier"))?;

        let result = sqlx::query(
            "UPDATE products SET name = $2, price = $3, category_id = $4, description = $5 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.category_id())
        .bind(&product.description)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Product {id} not found")));
        }

        info!(product_id = %id, "Updated product");
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
    }

    async fn find_page(&self, query: &PageQuery) -> AppResult<(Vec<Product>, u64)> {
        let total = self.count().await?;

        let sql = format!(
            "{SELECT_PRODUCT} ORDER BY {} LIMIT $1 OFFSET $2",
            order_by_clause(query.sort())
        );
        debug!(
            offset = query.offset(),
            limit = query.limit(),
            order_by = %order_by_clause(query.sort()),
            "Listing products"
        );

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(sql_bound(query.limit()))
            .bind(sql_bound(query.offset()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))?;

        Ok((rows.into_iter().map(Product::from).collect(), total))
    }

    async fn delete_by_id(&self, id: ProductId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete product", e))?;

        if result.rows_affected() > 0 {
            info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count products", e))?;
        Ok(total as u64)
    }
}
