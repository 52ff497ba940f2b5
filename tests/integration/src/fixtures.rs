//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: "Test".to_string(),
            last_name: format!("Customer{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "Pass@2023".to_string(),
            role: "MEMBER".to_string(),
        }
    }

    pub fn unique_admin() -> Self {
        Self {
            role: "ADMIN".to_string(),
            ..Self::unique()
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub customer: CustomerResponse,
}

/// Customer response
#[derive(Debug, Deserialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

/// Error body rendered by the boundary for every classified failure
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub details: Option<Value>,
}

/// Create product request
#[derive(Debug, Serialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub client: String,
    pub objectives: String,
    pub vision: String,
    pub state: String,
    pub definition_of_ready: String,
}

impl CreateProductRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Product {suffix}"),
            client: "Acme Corp".to_string(),
            objectives: "Ship the tracker".to_string(),
            vision: "A lean scrum tool".to_string(),
            state: "discovery".to_string(),
            definition_of_ready: "Estimated and prioritized".to_string(),
        }
    }
}

/// Product response
#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub client: String,
}

/// Backlog response with resolved items
#[derive(Debug, Deserialize)]
pub struct BacklogResponse {
    pub id: i64,
    pub product_id: i64,
    pub items: Vec<ItemResponse>,
}

/// Create backlog item request
#[derive(Debug, Serialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub acceptance_criteria: Vec<String>,
    pub effort_estimation: String,
}

impl CreateItemRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Item {suffix}"),
            description: "As a user I want to log in".to_string(),
            status: "TODO".to_string(),
            priority: "HIGH".to_string(),
            acceptance_criteria: vec!["renders".to_string(), "validates input".to_string()],
            effort_estimation: "5".to_string(),
        }
    }
}

/// Backlog item response
#[derive(Debug, Deserialize)]
pub struct ItemResponse {
    pub id: i64,
    pub product_backlog_id: i64,
    pub name: String,
    pub status: String,
    pub priority: String,
}

/// Create sprint request
#[derive(Debug, Serialize)]
pub struct CreateSprintRequest {
    pub goals: String,
    pub start_date: String,
    pub end_date: String,
}

impl CreateSprintRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            goals: format!("Sprint goals {suffix}"),
            start_date: "2023-10-02".to_string(),
            end_date: "2023-10-13".to_string(),
        }
    }
}

/// Sprint response
#[derive(Debug, Deserialize)]
pub struct SprintResponse {
    pub id: i64,
    pub product_backlog_id: i64,
    pub goals: String,
}
