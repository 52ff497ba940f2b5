//! Product backlog handlers
//!
//! Endpoints for backlog lookups and nested item/sprint collections.

use axum::{
    extract::{Path, State},
    Json,
};
use tracker_service::{
    BacklogResponse, BacklogService, CreateItemRequest, CreateSprintRequest, ItemResponse,
    ItemService, SprintResponse, SprintService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get backlog by id, items included
///
/// GET /backlogs/{backlog_id}
pub async fn get_backlog(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(backlog_id): Path<i64>,
) -> ApiResult<Json<BacklogResponse>> {
    let service = BacklogService::new(state.service_context());
    let response = service.get(backlog_id).await?;
    Ok(Json(response))
}

/// List the items of a backlog
///
/// GET /backlogs/{backlog_id}/items
pub async fn list_backlog_items(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(backlog_id): Path<i64>,
) -> ApiResult<Json<Vec<ItemResponse>>> {
    let service = ItemService::new(state.service_context());
    let response = service.list_by_backlog(backlog_id).await?;
    Ok(Json(response))
}

/// Create an item under a backlog
///
/// POST /backlogs/{backlog_id}/items
pub async fn create_backlog_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(backlog_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateItemRequest>,
) -> ApiResult<Created<Json<ItemResponse>>> {
    let service = ItemService::new(state.service_context());
    let response = service.create(backlog_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the sprints of a backlog
///
/// GET /backlogs/{backlog_id}/sprints
pub async fn list_backlog_sprints(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(backlog_id): Path<i64>,
) -> ApiResult<Json<Vec<SprintResponse>>> {
    let service = SprintService::new(state.service_context());
    let response = service.list_by_backlog(backlog_id).await?;
    Ok(Json(response))
}

/// Create a sprint under a backlog
///
/// POST /backlogs/{backlog_id}/sprints
pub async fn create_backlog_sprint(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(backlog_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateSprintRequest>,
) -> ApiResult<Created<Json<SprintResponse>>> {
    let service = SprintService::new(state.service_context());
    let response = service.create(backlog_id, request).await?;
    Ok(Created(Json(response)))
}
