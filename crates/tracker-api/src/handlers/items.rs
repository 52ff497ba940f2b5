//! Backlog item handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracker_service::{ItemResponse, ItemService, UpdateItemRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get item by id
///
/// GET /items/{item_id}
pub async fn get_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(item_id): Path<i64>,
) -> ApiResult<Json<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    let response = service.get(item_id).await?;
    Ok(Json(response))
}

/// Update item fields
///
/// PATCH /items/{item_id}
pub async fn update_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(item_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateItemRequest>,
) -> ApiResult<Json<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    let response = service.update(item_id, request).await?;
    Ok(Json(response))
}

/// Deactivate an item
///
/// DELETE /items/{item_id}
pub async fn deactivate_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(item_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = ItemService::new(state.service_context());
    service.deactivate(item_id).await?;
    Ok(NoContent)
}
