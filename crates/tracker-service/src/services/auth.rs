//! Authentication service
//!
//! Handles customer registration, login, and token-to-customer resolution.

use tracing::{info, instrument, warn};
use tracker_common::auth::{hash_password, validate_password_strength, verify_password};
use tracker_core::{Customer, DomainError, NewCustomer};

use crate::dto::{AuthResponse, CustomerResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new customer
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Credential policy before anything touches storage
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Duplicate email is a conflict, checked up front
        if self.ctx.customer_repo().email_exists(&request.email).await? {
            return Err(ServiceError::from(DomainError::EmailAlreadyExists));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let new_customer = NewCustomer {
            name: request.name,
            last_name: request.last_name,
            email: request.email,
            role: request.role,
        };

        let customer = self
            .ctx
            .customer_repo()
            .create(&new_customer, &password_hash)
            .await?;

        info!(customer_id = customer.id, "Customer registered successfully");

        self.issue_for(&customer)
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Unknown email is reported distinctly from a bad password
        let customer = self
            .ctx
            .customer_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: email not registered");
                ServiceError::from(DomainError::EmailNotRegistered)
            })?;

        let password_hash = self
            .ctx
            .customer_repo()
            .password_hash_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(customer_id = customer.id, "Login failed: no credential on record");
                ServiceError::from(DomainError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(customer_id = customer.id, "Login failed: invalid password");
            return Err(ServiceError::from(DomainError::InvalidCredentials));
        }

        info!(customer_id = customer.id, "Customer logged in successfully");

        self.issue_for(&customer)
    }

    /// Resolve an access token to the customer it names
    #[instrument(skip(self, token))]
    pub async fn customer_from_token(&self, token: &str) -> ServiceResult<Customer> {
        let claims = self
            .ctx
            .jwt_service()
            .verify(token)
            .map_err(ServiceError::from)?;
        let customer_id = claims.customer_id().map_err(ServiceError::from)?;

        self.ctx
            .customer_repo()
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Customer", customer_id))
    }

    fn issue_for(&self, customer: &Customer) -> ServiceResult<AuthResponse> {
        let issued = self
            .ctx
            .jwt_service()
            .issue(customer.id, customer.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            issued.access_token,
            issued.expires_in,
            CustomerResponse::from(customer),
        ))
    }
}
