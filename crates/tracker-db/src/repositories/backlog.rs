//! PostgreSQL implementation of BacklogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tracker_core::{BacklogRepository, DomainError, ProductBacklog, RepoResult};

use crate::models::BacklogModel;

use super::error::{backlog_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of BacklogRepository
#[derive(Clone)]
pub struct PgBacklogRepository {
    pool: PgPool,
}

impl PgBacklogRepository {
    /// Create a new PgBacklogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BacklogRepository for PgBacklogRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ProductBacklog>> {
        let result = sqlx::query_as::<_, BacklogModel>(
            r"
            SELECT id, product_id, active, created_at, updated_at
            FROM product_backlogs
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ProductBacklog::from))
    }

    #[instrument(skip(self))]
    async fn find_by_product(&self, product_id: i64) -> RepoResult<Option<ProductBacklog>> {
        let result = sqlx::query_as::<_, BacklogModel>(
            r"
            SELECT id, product_id, active, created_at, updated_at
            FROM product_backlogs
            WHERE product_id = $1 AND active
            ",
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ProductBacklog::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, product_id: i64) -> RepoResult<ProductBacklog> {
        // product_id carries a UNIQUE constraint: one backlog per product
        let model = sqlx::query_as::<_, BacklogModel>(
            r"
            INSERT INTO product_backlogs (product_id, active, created_at, updated_at)
            VALUES ($1, TRUE, NOW(), NOW())
            RETURNING id, product_id, active, created_at, updated_at
            ",
        )
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::BacklogAlreadyExists(product_id)))?;

        Ok(ProductBacklog::from(model))
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE product_backlogs
            SET active = FALSE, updated_at = NOW()
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(backlog_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgBacklogRepository>();
    }
}
