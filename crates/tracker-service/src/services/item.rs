//! Backlog item service

use tracing::{info, instrument};
use tracker_core::NewItemBacklog;

use crate::dto::{CreateItemRequest, ItemResponse, UpdateItemRequest};

use super::backlog::BacklogService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Backlog item service
pub struct ItemService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ItemService<'a> {
    /// Create a new ItemService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an item under a backlog
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        backlog_id: i64,
        request: CreateItemRequest,
    ) -> ServiceResult<ItemResponse> {
        // The owning backlog must exist
        BacklogService::new(self.ctx).get_entity(backlog_id).await?;

        let new_item = NewItemBacklog {
            name: request.name,
            description: request.description,
            status: request.status,
            priority: request.priority,
            acceptance_criteria: request.acceptance_criteria,
            effort_estimation: request.effort_estimation,
        };

        let item = self.ctx.item_repo().create(backlog_id, &new_item).await?;

        info!(item_id = item.id, backlog_id, "Backlog item created");

        Ok(ItemResponse::from(&item))
    }

    /// Get item by id
    #[instrument(skip(self))]
    pub async fn get(&self, item_id: i64) -> ServiceResult<ItemResponse> {
        let item = self
            .ctx
            .item_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Backlog item", item_id))?;

        Ok(ItemResponse::from(&item))
    }

    /// List active items of a backlog
    #[instrument(skip(self))]
    pub async fn list_by_backlog(&self, backlog_id: i64) -> ServiceResult<Vec<ItemResponse>> {
        BacklogService::new(self.ctx).get_entity(backlog_id).await?;

        let items = self.ctx.item_repo().find_by_backlog(backlog_id).await?;
        Ok(items.iter().map(ItemResponse::from).collect())
    }

    /// Update item fields
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        item_id: i64,
        request: UpdateItemRequest,
    ) -> ServiceResult<ItemResponse> {
        let mut item = self
            .ctx
            .item_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Backlog item", item_id))?;

        item.apply(NewItemBacklog {
            name: request.name.unwrap_or_else(|| item.name.clone()),
            description: request.description.unwrap_or_else(|| item.description.clone()),
            status: request.status.unwrap_or(item.status),
            priority: request.priority.unwrap_or(item.priority),
            acceptance_criteria: request
                .acceptance_criteria
                .unwrap_or_else(|| item.acceptance_criteria.clone()),
            effort_estimation: request
                .effort_estimation
                .unwrap_or_else(|| item.effort_estimation.clone()),
        });

        self.ctx.item_repo().update(&item).await?;

        info!(item_id = item.id, "Backlog item updated");

        Ok(ItemResponse::from(&item))
    }

    /// Deactivate an item (soft delete)
    #[instrument(skip(self))]
    pub async fn deactivate(&self, item_id: i64) -> ServiceResult<()> {
        self.ctx.item_repo().deactivate(item_id).await?;

        info!(item_id, "Backlog item deactivated");
        Ok(())
    }
}
