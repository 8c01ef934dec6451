//! Paged listing and CRUD over the product and category stores.

use std::sync::Arc;

use tracing::debug;

use catalog_core::config::PaginationConfig;
use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::{EntityLookup, Repository};
use catalog_core::types::{CategoryId, PageRequest, PageResponse, ProductId};
use catalog_entity::category::Category;
use catalog_entity::product::{self, Product, ProductDto};

/// Product store shared by the service.
pub type ProductStore = Arc<dyn Repository<Product, ProductId>>;
/// Category lookup shared by the service.
pub type CategoryStore = Arc<dyn EntityLookup<Category, CategoryId>>;

/// Catalog use cases: list, read, create, update, remove.
///
/// Holds no mutable state of its own. Concurrent writers to the same
/// product are ordered by the store.
#[derive(Clone)]
pub struct CatalogService {
    /// Product record store.
    products: ProductStore,
    /// Category record store.
    categories: CategoryStore,
    /// Listing defaults.
    pagination: PaginationConfig,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        products: ProductStore,
        categories: CategoryStore,
        pagination: &PaginationConfig,
    ) -> Self {
        Self {
            products,
            categories,
            pagination: pagination.clone(),
        }
    }

    /// Lists one page of products in transport form.
    ///
    /// Fails with `InvalidSortField` before touching the store when the
    /// request orders by an unknown field.
    pub async fn list(&self, request: &PageRequest) -> AppResult<PageResponse<ProductDto>> {
        let query = request.normalize_with::<Product>(self.pagination.default_page_size)?;
        let (records, total) = self.products.find_page(&query).await?;

        debug!(
            page = query.page(),
            size = query.size(),
            returned = records.len(),
            total,
            "Listed products"
        );

        Ok(PageResponse::from_records(
            records,
            total,
            &query,
            self.pagination.window_size,
            ProductDto::from,
        ))
    }

    /// Reads one product. `None` when no product has this id.
    pub async fn read(&self, id: ProductId) -> AppResult<Option<ProductDto>> {
        let product = self.products.find_by_id(id).await?;
        Ok(product.map(ProductDto::from))
    }

    /// Creates a product and returns it with its generated id.
    ///
    /// Any id in `dto` is ignored. The category is not attached on create;
    /// `category_id` only takes effect through [`CatalogService::update`].
    pub async fn create(&self, dto: ProductDto) -> AppResult<Product> {
        dto.check()?;

        let dto = ProductDto { id: None, ..dto };
        let stored = self.products.insert(&product::to_stored(&dto)).await?;

        debug!(product_id = ?stored.id, name = %stored.name, "Created product");
        Ok(stored)
    }

    /// Replaces the mutable fields of an existing product.
    ///
    /// A missing product is a no-op whatever the payload. The category is
    /// resolved and the fields validated before any field is merged, so a
    /// failure leaves the record untouched.
    pub async fn update(&self, dto: ProductDto) -> AppResult<()> {
        let id = dto
            .id
            .ok_or_else(|| AppError::validation("Product id is required for update"))?;

        let Some(mut existing) = self.products.find_by_id(id).await? else {
            debug!(product_id = %id, "Update skipped, product does not exist");
            return Ok(());
        };

        let category = self.resolve_category(dto.category_id).await?;
        dto.check()?;

        existing.name = dto.name;
        existing.price = dto.price;
        existing.description = dto.description;
        existing.category = Some(category);

        self.products.update(&existing).await?;
        debug!(product_id = %id, "Updated product");
        Ok(())
    }

    /// Removes a product. Returns whether it existed.
    pub async fn remove(&self, id: ProductId) -> AppResult<bool> {
        if self.products.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        self.products.delete_by_id(id).await?;
        debug!(product_id = %id, "Removed product");
        Ok(true)
    }

    async fn resolve_category(&self, id: Option<CategoryId>) -> AppResult<Category> {
        let id = id.ok_or_else(|| AppError::category_not_found("Category id is required"))?;
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::category_not_found(format!("Category {id} not found")))
    }
}
