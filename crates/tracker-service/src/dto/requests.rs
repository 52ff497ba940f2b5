//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::NaiveDate;
use serde::Deserialize;
use tracker_core::{ItemStatus, Priority, Role};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Customer registration request.
/// Password strength is enforced by the credential policy in the service
/// layer, which reports every violated rule.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64, message = "Name must not be blank"))]
    pub name: String,

    #[validate(length(min = 1, max = 64, message = "Last name must not be blank"))]
    pub last_name: String,

    #[validate(
        length(min = 1, message = "Email must not be blank"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    pub password: String,

    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Member
}

/// Customer login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Customer Requests
// ============================================================================

/// Update current customer request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 64, message = "Name must not be blank"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 64, message = "Last name must not be blank"))]
    pub last_name: Option<String>,

    /// New password; checked against the credential policy when present
    pub password: Option<String>,
}

// ============================================================================
// Product Requests
// ============================================================================

/// Create product request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 100, message = "Product name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Client must be 1-100 characters"))]
    pub client: String,

    pub objectives: String,

    pub vision: String,

    pub state: String,

    pub definition_of_ready: String,
}

/// Update product request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 100, message = "Product name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Client must be 1-100 characters"))]
    pub client: Option<String>,

    pub objectives: Option<String>,

    pub vision: Option<String>,

    pub state: Option<String>,

    pub definition_of_ready: Option<String>,
}

// ============================================================================
// Backlog Item Requests
// ============================================================================

/// Create backlog item request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 200, message = "Item name must be 1-200 characters"))]
    pub name: String,

    pub description: String,

    pub status: ItemStatus,

    pub priority: Priority,

    #[serde(default)]
    pub acceptance_criteria: Vec<String>,

    pub effort_estimation: String,
}

/// Update backlog item request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, max = 200, message = "Item name must be 1-200 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub status: Option<ItemStatus>,

    pub priority: Option<Priority>,

    pub acceptance_criteria: Option<Vec<String>>,

    pub effort_estimation: Option<String>,
}

// ============================================================================
// Sprint Requests
// ============================================================================

/// Create sprint request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSprintRequest {
    #[validate(length(min = 1, max = 1000, message = "Goals must be 1-1000 characters"))]
    pub goals: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,
}

/// Update sprint request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSprintRequest {
    #[validate(length(min = 1, max = 1000, message = "Goals must be 1-1000 characters"))]
    pub goals: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_request_rejects_blank_fields() {
        let request = RegisterRequest {
            name: String::new(),
            last_name: "Ninguem".to_string(),
            email: "joao@email.com".to_string(),
            password: "Pass@2023".to_string(),
            role: Role::Member,
        };
        assert!(request.validate().is_err());

        let request = RegisterRequest {
            name: "Joao".to_string(),
            last_name: String::new(),
            email: "joao@email.com".to_string(),
            password: "Pass@2023".to_string(),
            role: Role::Member,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_blank_email() {
        let request = RegisterRequest {
            name: "Joao".to_string(),
            last_name: "Ninguem".to_string(),
            email: String::new(),
            password: "Pass@2023".to_string(),
            role: Role::Member,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_accepts_valid_input() {
        let request = RegisterRequest {
            name: "Joao".to_string(),
            last_name: "Ninguem".to_string(),
            email: "joao@email.com".to_string(),
            password: "Pass@2023".to_string(),
            role: Role::Admin,
        };
        assert!(request.validate().is_ok());
    }
}
