//! Sprint handlers
//!
//! Endpoints for sprint management and item assignment.

use axum::{
    extract::{Path, State},
    Json,
};
use tracker_service::{ItemResponse, SprintResponse, SprintService, UpdateSprintRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get sprint by id
///
/// GET /sprints/{sprint_id}
pub async fn get_sprint(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(sprint_id): Path<i64>,
) -> ApiResult<Json<SprintResponse>> {
    let service = SprintService::new(state.service_context());
    let response = service.get(sprint_id).await?;
    Ok(Json(response))
}

/// Update sprint fields
///
/// PATCH /sprints/{sprint_id}
pub async fn update_sprint(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(sprint_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateSprintRequest>,
) -> ApiResult<Json<SprintResponse>> {
    let service = SprintService::new(state.service_context());
    let response = service.update(sprint_id, request).await?;
    Ok(Json(response))
}

/// Deactivate a sprint
///
/// DELETE /sprints/{sprint_id}
pub async fn deactivate_sprint(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(sprint_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = SprintService::new(state.service_context());
    service.deactivate(sprint_id).await?;
    Ok(NoContent)
}

/// List the items assigned to a sprint
///
/// GET /sprints/{sprint_id}/items
pub async fn list_sprint_items(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(sprint_id): Path<i64>,
) -> ApiResult<Json<Vec<ItemResponse>>> {
    let service = SprintService::new(state.service_context());
    let response = service.items(sprint_id).await?;
    Ok(Json(response))
}

/// Assign an item to a sprint
///
/// PUT /sprints/{sprint_id}/items/{item_id}
pub async fn assign_sprint_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((sprint_id, item_id)): Path<(i64, i64)>,
) -> ApiResult<NoContent> {
    let service = SprintService::new(state.service_context());
    service.assign_item(sprint_id, item_id).await?;
    Ok(NoContent)
}

/// Remove an item from a sprint
///
/// DELETE /sprints/{sprint_id}/items/{item_id}
pub async fn unassign_sprint_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((sprint_id, item_id)): Path<(i64, i64)>,
) -> ApiResult<NoContent> {
    let service = SprintService::new(state.service_context());
    service.unassign_item(sprint_id, item_id).await?;
    Ok(NoContent)
}
