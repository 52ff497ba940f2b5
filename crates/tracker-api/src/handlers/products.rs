//! Product handlers
//!
//! Endpoints for product management. Mutations are admin-gated.

use axum::{
    extract::{Path, State},
    Json,
};
use tracker_service::{
    BacklogResponse, BacklogService, CreateProductRequest, ProductResponse, ProductService,
    UpdateProductRequest,
};

use crate::extractors::{AdminUser, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new product (admin only)
///
/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> ApiResult<Created<Json<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// List all active products
///
/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Get product by id
///
/// GET /products/{product_id}
pub async fn get_product(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(product_id): Path<i64>,
) -> ApiResult<Json<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    let response = service.get(product_id).await?;
    Ok(Json(response))
}

/// Update product fields (admin only)
///
/// PATCH /products/{product_id}
pub async fn update_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(product_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    let response = service.update(product_id, request).await?;
    Ok(Json(response))
}

/// Deactivate a product (admin only)
///
/// DELETE /products/{product_id}
pub async fn deactivate_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(product_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = ProductService::new(state.service_context());
    service.deactivate(product_id).await?;
    Ok(NoContent)
}

/// Get the backlog owned by a product, items included
///
/// GET /products/{product_id}/backlog
pub async fn get_product_backlog(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(product_id): Path<i64>,
) -> ApiResult<Json<BacklogResponse>> {
    let service = BacklogService::new(state.service_context());
    let response = service.get_by_product(product_id).await?;
    Ok(Json(response))
}
