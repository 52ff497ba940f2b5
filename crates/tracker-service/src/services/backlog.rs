//! Product backlog service
//!
//! Backlog lookups with item resolution through the item repository.

use tracing::instrument;
use tracker_core::ProductBacklog;

use crate::dto::BacklogResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Product backlog service
pub struct BacklogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BacklogService<'a> {
    /// Create a new BacklogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get backlog by id, with its items resolved
    #[instrument(skip(self))]
    pub async fn get(&self, backlog_id: i64) -> ServiceResult<BacklogResponse> {
        let backlog = self.get_entity(backlog_id).await?;
        self.compose(backlog).await
    }

    /// Get the backlog owned by a product, with its items resolved
    #[instrument(skip(self))]
    pub async fn get_by_product(&self, product_id: i64) -> ServiceResult<BacklogResponse> {
        // Distinguish a missing product from a product without a backlog
        self.ctx
            .product_repo()
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", product_id))?;

        let backlog = self
            .ctx
            .backlog_repo()
            .find_by_product(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product backlog", product_id))?;

        self.compose(backlog).await
    }

    /// Get the backlog entity by id, without items
    #[instrument(skip(self))]
    pub async fn get_entity(&self, backlog_id: i64) -> ServiceResult<ProductBacklog> {
        self.ctx
            .backlog_repo()
            .find_by_id(backlog_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product backlog", backlog_id))
    }

    async fn compose(&self, backlog: ProductBacklog) -> ServiceResult<BacklogResponse> {
        let items = self.ctx.item_repo().find_by_backlog(backlog.id).await?;
        Ok(BacklogResponse::compose(&backlog, &items))
    }
}
