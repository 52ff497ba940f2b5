//! PostgreSQL implementation of ItemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tracker_core::{ItemBacklog, ItemRepository, NewItemBacklog, RepoResult};

use crate::models::ItemModel;

use super::error::{item_not_found, map_db_error};

/// PostgreSQL implementation of ItemRepository
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    /// Create a new PgItemRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ItemBacklog>> {
        let result = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT id, product_backlog_id, name, description, status, priority,
                   acceptance_criteria, effort_estimation, active, created_at, updated_at
            FROM backlog_items
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ItemBacklog::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_backlog(&self, backlog_id: i64) -> RepoResult<Vec<ItemBacklog>> {
        let rows = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT id, product_backlog_id, name, description, status, priority,
                   acceptance_criteria, effort_estimation, active, created_at, updated_at
            FROM backlog_items
            WHERE product_backlog_id = $1 AND active
            ORDER BY id
            ",
        )
        .bind(backlog_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(ItemBacklog::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_sprint(&self, sprint_id: i64) -> RepoResult<Vec<ItemBacklog>> {
        let rows = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT i.id, i.product_backlog_id, i.name, i.description, i.status, i.priority,
                   i.acceptance_criteria, i.effort_estimation, i.active, i.created_at, i.updated_at
            FROM backlog_items i
            INNER JOIN sprint_items si ON si.item_id = i.id
            WHERE si.sprint_id = $1 AND i.active
            ORDER BY i.id
            ",
        )
        .bind(sprint_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(ItemBacklog::try_from).collect()
    }

    #[instrument(skip(self), fields(name = %item.name))]
    async fn create(&self, backlog_id: i64, item: &NewItemBacklog) -> RepoResult<ItemBacklog> {
        let model = sqlx::query_as::<_, ItemModel>(
            r"
            INSERT INTO backlog_items (product_backlog_id, name, description, status, priority,
                                       acceptance_criteria, effort_estimation, active,
                                       created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, NOW(), NOW())
            RETURNING id, product_backlog_id, name, description, status, priority,
                      acceptance_criteria, effort_estimation, active, created_at, updated_at
            ",
        )
        .bind(backlog_id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.status.as_str())
        .bind(item.priority.as_str())
        .bind(&item.acceptance_criteria)
        .bind(&item.effort_estimation)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        ItemBacklog::try_from(model)
    }

    #[instrument(skip(self), fields(id = item.id))]
    async fn update(&self, item: &ItemBacklog) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE backlog_items
            SET name = $2, description = $3, status = $4, priority = $5,
                acceptance_criteria = $6, effort_estimation = $7, updated_at = NOW()
            WHERE id = $1 AND active
            ",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.status.as_str())
        .bind(item.priority.as_str())
        .bind(&item.acceptance_criteria)
        .bind(&item.effort_estimation)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(item.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE backlog_items
            SET active = FALSE, updated_at = NOW()
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(id));
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
        assert_send_sync::<PgItemRepository>();
    }
}
