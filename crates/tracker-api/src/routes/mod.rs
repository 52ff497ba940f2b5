//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, backlogs, customers, health, items, products, sprints};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(customer_routes())
        .merge(product_routes())
        .merge(backlog_routes())
        .merge(item_routes())
        .merge(sprint_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Customer routes
fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/customers/@me", get(customers::get_current_customer))
        .route("/customers/@me", patch(customers::update_current_customer))
        .route("/customers/:customer_id", get(customers::get_customer))
        .route("/customers/:customer_id", delete(customers::deactivate_customer))
}

/// Product routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(products::create_product))
        .route("/products", get(products::list_products))
        .route("/products/:product_id", get(products::get_product))
        .route("/products/:product_id", patch(products::update_product))
        .route("/products/:product_id", delete(products::deactivate_product))
        .route("/products/:product_id/backlog", get(products::get_product_backlog))
}

/// Backlog routes
fn backlog_routes() -> Router<AppState> {
    Router::new()
        .route("/backlogs/:backlog_id", get(backlogs::get_backlog))
        .route("/backlogs/:backlog_id/items", get(backlogs::list_backlog_items))
        .route("/backlogs/:backlog_id/items", post(backlogs::create_backlog_item))
        .route("/backlogs/:backlog_id/sprints", get(backlogs::list_backlog_sprints))
        .route("/backlogs/:backlog_id/sprints", post(backlogs::create_backlog_sprint))
}

/// Backlog item routes
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items/:item_id", get(items::get_item))
        .route("/items/:item_id", patch(items::update_item))
        .route("/items/:item_id", delete(items::deactivate_item))
}

/// Sprint routes
fn sprint_routes() -> Router<AppState> {
    Router::new()
        .route("/sprints/:sprint_id", get(sprints::get_sprint))
        .route("/sprints/:sprint_id", patch(sprints::update_sprint))
        .route("/sprints/:sprint_id", delete(sprints::deactivate_sprint))
        .route("/sprints/:sprint_id/items", get(sprints::list_sprint_items))
        .route("/sprints/:sprint_id/items/:item_id", put(sprints::assign_sprint_item))
        .route(
            "/sprints/:sprint_id/items/:item_id",
            delete(sprints::unassign_sprint_item),
        )
}
