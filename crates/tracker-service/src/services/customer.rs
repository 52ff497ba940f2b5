//! Customer service
//!
//! Profile lookups and updates for customer accounts.

use tracing::{info, instrument};
use tracker_common::auth::{hash_password, validate_password_strength};
use tracker_core::DomainError;

use crate::dto::{CustomerResponse, UpdateCustomerRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Customer service
pub struct CustomerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CustomerService<'a> {
    /// Create a new CustomerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get customer by id
    #[instrument(skip(self))]
    pub async fn get(&self, customer_id: i64) -> ServiceResult<CustomerResponse> {
        let customer = self
            .ctx
            .customer_repo()
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Customer", customer_id))?;

        Ok(CustomerResponse::from(&customer))
    }

    /// Get customer by email; unknown emails are reported distinctly
    #[instrument(skip(self))]
    pub async fn get_by_email(&self, email: &str) -> ServiceResult<CustomerResponse> {
        let customer = self
            .ctx
            .customer_repo()
            .find_by_email(email)
            .await?
            .ok_or(ServiceError::Domain(DomainError::EmailNotRegistered))?;

        Ok(CustomerResponse::from(&customer))
    }

    /// Update profile fields; a new password is re-checked against the policy
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        customer_id: i64,
        request: UpdateCustomerRequest,
    ) -> ServiceResult<CustomerResponse> {
        // Check the policy before anything is written
        if let Some(password) = &request.password {
            validate_password_strength(password).map_err(ServiceError::from)?;
        }

        let mut customer = self
            .ctx
            .customer_repo()
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Customer", customer_id))?;

        let name = request.name.unwrap_or_else(|| customer.name.clone());
        let last_name = request.last_name.unwrap_or_else(|| customer.last_name.clone());
        customer.set_names(name, last_name);

        self.ctx.customer_repo().update(&customer).await?;

        if let Some(password) = request.password {
            let password_hash =
                hash_password(&password).map_err(|e| ServiceError::internal(e.to_string()))?;
            self.ctx
                .customer_repo()
                .update_password(customer.id, &password_hash)
                .await?;
            info!(customer_id = customer.id, "Customer password updated");
        }

        info!(customer_id = customer.id, "Customer profile updated");

        Ok(CustomerResponse::from(&customer))
    }

    /// Deactivate a customer account (soft delete)
    #[instrument(skip(self))]
    pub async fn deactivate(&self, customer_id: i64) -> ServiceResult<()> {
        self.ctx.customer_repo().deactivate(customer_id).await?;

        info!(customer_id, "Customer deactivated");
        Ok(())
    }
}
