//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracker_core::{ItemStatus, Priority, Role};

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the issued access token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub customer: CustomerResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        expires_in: i64,
        customer: CustomerResponse,
    ) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            customer,
        }
    }
}

// ============================================================================
// Customer Responses
// ============================================================================

/// Customer response; never carries credential material
#[derive(Debug, Clone, Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Product Responses
// ============================================================================

/// Product response
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub client: String,
    pub objectives: String,
    pub vision: String,
    pub state: String,
    pub definition_of_ready: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Backlog Responses
// ============================================================================

/// Product backlog with its items resolved
#[derive(Debug, Serialize)]
pub struct BacklogResponse {
    pub id: i64,
    pub product_id: i64,
    pub items: Vec<ItemResponse>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Backlog Item Responses
// ============================================================================

/// Backlog item response
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub product_backlog_id: i64,
    pub name: String,
    pub description: String,
    pub status: ItemStatus,
    pub priority: Priority,
    pub acceptance_criteria: Vec<String>,
    pub effort_estimation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Sprint Responses
// ============================================================================

/// Sprint response
#[derive(Debug, Clone, Serialize)]
pub struct SprintResponse {
    pub id: i64,
    pub product_backlog_id: i64,
    pub goals: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
