//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_customer() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.customer.email, request.email);
    assert_eq!(auth.customer.role, "MEMBER");
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();

    assert_eq!(error.message, "Entity already exists.");
    assert_eq!(error.status_code, 409);
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest {
        password: "pass123".to_string(),
        ..RegisterRequest::unique()
    };

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(error.message, "Validation failed.");
    assert!(error.details.is_some());
}

#[tokio::test]
async fn test_register_blank_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest {
        password: String::new(),
        ..RegisterRequest::unique()
    };

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_blank_name() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest {
        name: String::new(),
        ..RegisterRequest::unique()
    };

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_blank_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest {
        email: String::new(),
        ..RegisterRequest::unique()
    };

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.customer.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_unknown_email_is_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: format!("nobody{}@example.com", unique_suffix()),
        password: "Pass@2023".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(error.message, "Email wasn't registered.");
    assert_eq!(error.status_code, 404);
}

#[tokio::test]
async fn test_login_wrong_password_is_401() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest {
        email: register_req.email.clone(),
        password: "Wrong@2023".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(error.message, "Authentication failed.");
    assert_eq!(error.status_code, 401);
}

// ============================================================================
// Customer Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_customer() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/customers/@me", &auth.access_token)
        .await
        .unwrap();
    let me: CustomerResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.id, auth.customer.id);
    assert_eq!(me.email, register_req.email);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/customers/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_auth("/api/v1/customers/@me", "not.a.token")
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(error.message, "Authentication failed.");
}

#[tokio::test]
async fn test_member_cannot_use_admin_endpoints() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Customer lookup by id is admin-gated
    let path = format!("/api/v1/customers/{}", auth.customer.id);
    let response = server.get_auth(&path, &auth.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // So is product creation
    let product_req = CreateProductRequest::unique();
    let response = server
        .post_auth("/api/v1/products", &auth.access_token, &product_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Product / Backlog Tests
// ============================================================================

async fn admin_token(server: &TestServer) -> String {
    let register_req = RegisterRequest::unique_admin();
    let response = server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    auth.access_token
}

#[tokio::test]
async fn test_create_product_provisions_backlog() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let product_req = CreateProductRequest::unique();
    let response = server
        .post_auth("/api/v1/products", &token, &product_req)
        .await
        .unwrap();
    let product: ProductResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(product.name, product_req.name);

    // The product's backlog is resolvable immediately, empty
    let path = format!("/api/v1/products/{}/backlog", product.id);
    let response = server.get_auth(&path, &token).await.unwrap();
    let backlog: BacklogResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(backlog.product_id, product.id);
    assert!(backlog.items.is_empty());
}

#[tokio::test]
async fn test_get_missing_product_is_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let response = server
        .get_auth("/api/v1/products/999999999", &token)
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(error.message, "Entity not found.");
    assert_eq!(error.status_code, 404);
}

#[tokio::test]
async fn test_backlog_item_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    // Product + backlog
    let product_req = CreateProductRequest::unique();
    let response = server
        .post_auth("/api/v1/products", &token, &product_req)
        .await
        .unwrap();
    let product: ProductResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/products/{}/backlog", product.id);
    let response = server.get_auth(&path, &token).await.unwrap();
    let backlog: BacklogResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // Create an item
    let item_req = CreateItemRequest::unique();
    let path = format!("/api/v1/backlogs/{}/items", backlog.id);
    let response = server.post_auth(&path, &token, &item_req).await.unwrap();
    let item: ItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(item.product_backlog_id, backlog.id);
    assert_eq!(item.status, "TODO");

    // Update its status
    let path = format!("/api/v1/items/{}", item.id);
    let response = server
        .patch_auth(&path, &token, &serde_json::json!({"status": "IN_PROGRESS"}))
        .await
        .unwrap();
    let updated: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "IN_PROGRESS");

    // It shows up in the backlog listing
    let path = format!("/api/v1/backlogs/{}/items", backlog.id);
    let response = server.get_auth(&path, &token).await.unwrap();
    let items: Vec<ItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.iter().any(|i| i.id == item.id));

    // Deactivate removes it from the listing
    let path = format!("/api/v1/items/{}", item.id);
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let path = format!("/api/v1/backlogs/{}/items", backlog.id);
    let response = server.get_auth(&path, &token).await.unwrap();
    let items: Vec<ItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.iter().all(|i| i.id != item.id));
}

// ============================================================================
// Sprint Tests
// ============================================================================

#[tokio::test]
async fn test_sprint_item_assignment() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    // Product + backlog + item
    let product_req = CreateProductRequest::unique();
    let response = server
        .post_auth("/api/v1/products", &token, &product_req)
        .await
        .unwrap();
    let product: ProductResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/products/{}/backlog", product.id);
    let response = server.get_auth(&path, &token).await.unwrap();
    let backlog: BacklogResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let item_req = CreateItemRequest::unique();
    let path = format!("/api/v1/backlogs/{}/items", backlog.id);
    let response = server.post_auth(&path, &token, &item_req).await.unwrap();
    let item: ItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Sprint under the same backlog
    let sprint_req = CreateSprintRequest::unique();
    let path = format!("/api/v1/backlogs/{}/sprints", backlog.id);
    let response = server.post_auth(&path, &token, &sprint_req).await.unwrap();
    let sprint: SprintResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(sprint.product_backlog_id, backlog.id);

    // Assign the item
    let path = format!("/api/v1/sprints/{}/items/{}", sprint.id, item.id);
    let response = server.put_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Assigning twice is a conflict
    let response = server.put_auth(&path, &token).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.message, "Entity already exists.");

    // The sprint lists the item
    let path = format!("/api/v1/sprints/{}/items", sprint.id);
    let response = server.get_auth(&path, &token).await.unwrap();
    let items: Vec<ItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.iter().any(|i| i.id == item.id));

    // Unassign
    let path = format!("/api/v1/sprints/{}/items/{}", sprint.id, item.id);
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let path = format!("/api/v1/sprints/{}/items", sprint.id);
    let response = server.get_auth(&path, &token).await.unwrap();
    let items: Vec<ItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_sprint_rejects_inverted_window() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = admin_token(&server).await;

    let product_req = CreateProductRequest::unique();
    let response = server
        .post_auth("/api/v1/products", &token, &product_req)
        .await
        .unwrap();
    let product: ProductResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/products/{}/backlog", product.id);
    let response = server.get_auth(&path, &token).await.unwrap();
    let backlog: BacklogResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let sprint_req = CreateSprintRequest {
        start_date: "2023-10-13".to_string(),
        end_date: "2023-10-02".to_string(),
        ..CreateSprintRequest::unique()
    };
    let path = format!("/api/v1/backlogs/{}/sprints", backlog.id);
    let response = server.post_auth(&path, &token, &sprint_req).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(error.message, "Validation failed.");
}
