//! Customer handlers
//!
//! Endpoints for customer account management.

use axum::{
    extract::{Path, State},
    Json,
};
use tracker_service::{CustomerResponse, CustomerService, UpdateCustomerRequest};

use crate::extractors::{AdminUser, AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get the authenticated customer's profile
///
/// GET /customers/@me
pub async fn get_current_customer(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CustomerResponse>> {
    let service = CustomerService::new(state.service_context());
    let response = service.get(auth.customer_id).await?;
    Ok(Json(response))
}

/// Get a customer by id (admin only)
///
/// GET /customers/{customer_id}
pub async fn get_customer(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(customer_id): Path<i64>,
) -> ApiResult<Json<CustomerResponse>> {
    let service = CustomerService::new(state.service_context());
    let response = service.get(customer_id).await?;
    Ok(Json(response))
}

/// Update the authenticated customer's profile
///
/// PATCH /customers/@me
pub async fn update_current_customer(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateCustomerRequest>,
) -> ApiResult<Json<CustomerResponse>> {
    let service = CustomerService::new(state.service_context());
    let response = service.update(auth.customer_id, request).await?;
    Ok(Json(response))
}

/// Deactivate a customer account (admin only)
///
/// DELETE /customers/{customer_id}
pub async fn deactivate_customer(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(customer_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = CustomerService::new(state.service_context());
    service.deactivate(customer_id).await?;
    Ok(NoContent)
}
