//! Sprint service
//!
//! Sprint CRUD and item assignment over the sprint/item join.

use chrono::NaiveDate;
use tracing::{info, instrument};
use tracker_core::NewSprint;

use crate::dto::{CreateSprintRequest, ItemResponse, SprintResponse, UpdateSprintRequest};

use super::backlog::BacklogService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Sprint service
pub struct SprintService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SprintService<'a> {
    /// Create a new SprintService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a sprint under a backlog
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        backlog_id: i64,
        request: CreateSprintRequest,
    ) -> ServiceResult<SprintResponse> {
        check_window(request.start_date, request.end_date)?;

        BacklogService::new(self.ctx).get_entity(backlog_id).await?;

        let new_sprint = NewSprint {
            goals: request.goals,
            start_date: request.start_date,
            end_date: request.end_date,
        };

        let sprint = self.ctx.sprint_repo().create(backlog_id, &new_sprint).await?;

        info!(sprint_id = sprint.id, backlog_id, "Sprint created");

        Ok(SprintResponse::from(&sprint))
    }

    /// Get sprint by id
    #[instrument(skip(self))]
    pub async fn get(&self, sprint_id: i64) -> ServiceResult<SprintResponse> {
        let sprint = self
            .ctx
            .sprint_repo()
            .find_by_id(sprint_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sprint", sprint_id))?;

        Ok(SprintResponse::from(&sprint))
    }

    /// List active sprints of a backlog
    #[instrument(skip(self))]
    pub async fn list_by_backlog(&self, backlog_id: i64) -> ServiceResult<Vec<SprintResponse>> {
        BacklogService::new(self.ctx).get_entity(backlog_id).await?;

        let sprints = self.ctx.sprint_repo().find_by_backlog(backlog_id).await?;
        Ok(sprints.iter().map(SprintResponse::from).collect())
    }

    /// Update sprint fields
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        sprint_id: i64,
        request: UpdateSprintRequest,
    ) -> ServiceResult<SprintResponse> {
        let mut sprint = self
            .ctx
            .sprint_repo()
            .find_by_id(sprint_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sprint", sprint_id))?;

        let start_date = request.start_date.unwrap_or(sprint.start_date);
        let end_date = request.end_date.unwrap_or(sprint.end_date);
        check_window(start_date, end_date)?;

        sprint.apply(NewSprint {
            goals: request.goals.unwrap_or_else(|| sprint.goals.clone()),
            start_date,
            end_date,
        });

        self.ctx.sprint_repo().update(&sprint).await?;

        info!(sprint_id = sprint.id, "Sprint updated");

        Ok(SprintResponse::from(&sprint))
    }

    /// Deactivate a sprint (soft delete)
    #[instrument(skip(self))]
    pub async fn deactivate(&self, sprint_id: i64) -> ServiceResult<()> {
        self.ctx.sprint_repo().deactivate(sprint_id).await?;

        info!(sprint_id, "Sprint deactivated");
        Ok(())
    }

    /// List the items assigned to a sprint
    #[instrument(skip(self))]
    pub async fn items(&self, sprint_id: i64) -> ServiceResult<Vec<ItemResponse>> {
        self.require_sprint(sprint_id).await?;

        let items = self.ctx.item_repo().find_by_sprint(sprint_id).await?;
        Ok(items.iter().map(ItemResponse::from).collect())
    }

    /// Assign an item to a sprint; assigning twice is a conflict
    #[instrument(skip(self))]
    pub async fn assign_item(&self, sprint_id: i64, item_id: i64) -> ServiceResult<()> {
        self.require_sprint(sprint_id).await?;
        self.ctx
            .item_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Backlog item", item_id))?;

        self.ctx.sprint_repo().assign_item(sprint_id, item_id).await?;

        info!(sprint_id, item_id, "Item assigned to sprint");
        Ok(())
    }

    /// Remove an item from a sprint
    #[instrument(skip(self))]
    pub async fn unassign_item(&self, sprint_id: i64, item_id: i64) -> ServiceResult<()> {
        self.require_sprint(sprint_id).await?;

        self.ctx.sprint_repo().unassign_item(sprint_id, item_id).await?;

        info!(sprint_id, item_id, "Item removed from sprint");
        Ok(())
    }

    async fn require_sprint(&self, sprint_id: i64) -> ServiceResult<()> {
        self.ctx
            .sprint_repo()
            .find_by_id(sprint_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sprint", sprint_id))?;
        Ok(())
    }
}

fn check_window(start_date: NaiveDate, end_date: NaiveDate) -> ServiceResult<()> {
    if end_date < start_date {
        return Err(ServiceError::validation(
            "Sprint end date must not precede its start date",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_check_window() {
        assert!(check_window(date(2023, 10, 2), date(2023, 10, 13)).is_ok());
        assert!(check_window(date(2023, 10, 2), date(2023, 10, 2)).is_ok());
        assert!(check_window(date(2023, 10, 13), date(2023, 10, 2)).is_err());
    }
}
