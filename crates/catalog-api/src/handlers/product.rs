//! Product listing and CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use catalog_core::error::AppError;
use catalog_core::types::PageResponse;
use catalog_entity::product::ProductDto;

use crate::error::ApiError;
use crate::extractors::{PaginationParams, parse_product_id};
use crate::state::AppState;

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<ProductDto>>, ApiError> {
    let request = params.into_page_request()?;
    let page = state.catalog.list(&request).await?;
    Ok(Json(page))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDto>, ApiError> {
    let id = parse_product_id(&id)?;
    let product = state
        .catalog
        .read(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<ProductDto>,
) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    let stored = state.catalog.create(body).await?;
    Ok((StatusCode::CREATED, Json(ProductDto::from(stored))))
}

/// PUT /api/products/{id}
///
/// The path id replaces any id in the body.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ProductDto>,
) -> Result<StatusCode, ApiError> {
    let id = parse_product_id(&id)?;
    state
        .catalog
        .update(ProductDto {
            id: Some(id),
            ..body
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_product_id(&id)?;
    if state.catalog.remove(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Product {id} not found")).into())
    }
}
