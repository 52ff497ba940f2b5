//! PostgreSQL implementation of SprintRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tracker_core::{DomainError, NewSprint, RepoResult, Sprint, SprintRepository};

use crate::models::SprintModel;

use super::error::{item_not_found, map_db_error, map_unique_violation, sprint_not_found};

/// PostgreSQL implementation of SprintRepository
#[derive(Clone)]
pub struct PgSprintRepository {
    pool: PgPool,
}

impl PgSprintRepository {
    /// Create a new PgSprintRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SprintRepository for PgSprintRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Sprint>> {
        let result = sqlx::query_as::<_, SprintModel>(
            r"
            SELECT id, product_backlog_id, goals, start_date, end_date, active,
                   created_at, updated_at
            FROM sprints
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Sprint::from))
    }

    #[instrument(skip(self))]
    async fn find_by_backlog(&self, backlog_id: i64) -> RepoResult<Vec<Sprint>> {
        let rows = sqlx::query_as::<_, SprintModel>(
            r"
            SELECT id, product_backlog_id, goals, start_date, end_date, active,
                   created_at, updated_at
            FROM sprints
            WHERE product_backlog_id = $1 AND active
            ORDER BY start_date, id
            ",
        )
        .bind(backlog_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Sprint::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, backlog_id: i64, sprint: &NewSprint) -> RepoResult<Sprint> {
        let model = sqlx::query_as::<_, SprintModel>(
            r"
            INSERT INTO sprints (product_backlog_id, goals, start_date, end_date, active,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, TRUE, NOW(), NOW())
            RETURNING id, product_backlog_id, goals, start_date, end_date, active,
                      created_at, updated_at
            ",
        )
        .bind(backlog_id)
        .bind(&sprint.goals)
        .bind(sprint.start_date)
        .bind(sprint.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Sprint::from(model))
    }

    #[instrument(skip(self), fields(id = sprint.id))]
    async fn update(&self, sprint: &Sprint) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE sprints
            SET goals = $2, start_date = $3, end_date = $4, updated_at = NOW()
            WHERE id = $1 AND active
            ",
        )
        .bind(sprint.id)
        .bind(&sprint.goals)
        .bind(sprint.start_date)
        .bind(sprint.end_date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(sprint_not_found(sprint.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE sprints
            SET active = FALSE, updated_at = NOW()
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(sprint_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_item_assigned(&self, sprint_id: i64, item_id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM sprint_items WHERE sprint_id = $1 AND item_id = $2)
            ",
        )
        .bind(sprint_id)
        .bind(item_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn assign_item(&self, sprint_id: i64, item_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO sprint_items (sprint_id, item_id, created_at)
            VALUES ($1, $2, NOW())
            ",
        )
        .bind(sprint_id)
        .bind(item_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::ItemAlreadyAssigned { sprint_id, item_id })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn unassign_item(&self, sprint_id: i64, item_id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM sprint_items WHERE sprint_id = $1 AND item_id = $2
            ",
        )
        .bind(sprint_id)
        .bind(item_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(item_id));
        }

        Ok(())
    }
}
