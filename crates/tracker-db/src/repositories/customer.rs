//! PostgreSQL implementation of CustomerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tracker_core::{Customer, CustomerRepository, DomainError, NewCustomer, RepoResult};

use crate::models::CustomerModel;

use super::error::{customer_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of CustomerRepository
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    /// Create a new PgCustomerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Customer>> {
        let result = sqlx::query_as::<_, CustomerModel>(
            r"
            SELECT id, name, last_name, email, role, active, created_at, updated_at
            FROM customers
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Customer::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
        let result = sqlx::query_as::<_, CustomerModel>(
            r"
            SELECT id, name, last_name, email, role, active, created_at, updated_at
            FROM customers
            WHERE email = $1 AND active
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Customer::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1 AND active)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash), fields(email = %customer.email))]
    async fn create(&self, customer: &NewCustomer, password_hash: &str) -> RepoResult<Customer> {
        let model = sqlx::query_as::<_, CustomerModel>(
            r"
            INSERT INTO customers (name, last_name, email, password_hash, role, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, TRUE, NOW(), NOW())
            RETURNING id, name, last_name, email, role, active, created_at, updated_at
            ",
        )
        .bind(&customer.name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(password_hash)
        .bind(customer.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Customer::try_from(model)
    }

    #[instrument(skip(self), fields(id = customer.id))]
    async fn update(&self, customer: &Customer) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE customers
            SET name = $2, last_name = $3, updated_at = NOW()
            WHERE id = $1 AND active
            ",
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.last_name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(customer_not_found(customer.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE customers
            SET active = FALSE, updated_at = NOW()
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(customer_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn password_hash_by_email(&self, email: &str) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM customers WHERE email = $1 AND active
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE customers
            SET password_hash = $2, updated_at = NOW()
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(customer_not_found(id));
        }

        Ok(())
    }
}
