//! Product service
//!
//! Product CRUD; creating a product provisions its backlog.

use tracing::{info, instrument};
use tracker_core::NewProduct;

use crate::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Product service
pub struct ProductService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductService<'a> {
    /// Create a new ProductService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new product along with its product backlog
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateProductRequest) -> ServiceResult<ProductResponse> {
        let new_product = NewProduct {
            name: request.name,
            client: request.client,
            objectives: request.objectives,
            vision: request.vision,
            state: request.state,
            definition_of_ready: request.definition_of_ready,
        };

        let product = self.ctx.product_repo().create(&new_product).await?;

        // Every product owns exactly one backlog
        let backlog = self.ctx.backlog_repo().create(product.id).await?;

        info!(
            product_id = product.id,
            backlog_id = backlog.id,
            "Product created with its backlog"
        );

        Ok(ProductResponse::from(&product))
    }

    /// Get product by id
    #[instrument(skip(self))]
    pub async fn get(&self, product_id: i64) -> ServiceResult<ProductResponse> {
        let product = self
            .ctx
            .product_repo()
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", product_id))?;

        Ok(ProductResponse::from(&product))
    }

    /// List all active products
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ProductResponse>> {
        let products = self.ctx.product_repo().list().await?;
        Ok(products.iter().map(ProductResponse::from).collect())
    }

    /// Update product fields
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        product_id: i64,
        request: UpdateProductRequest,
    ) -> ServiceResult<ProductResponse> {
        let mut product = self
            .ctx
            .product_repo()
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", product_id))?;

        product.apply(NewProduct {
            name: request.name.unwrap_or_else(|| product.name.clone()),
            client: request.client.unwrap_or_else(|| product.client.clone()),
            objectives: request.objectives.unwrap_or_else(|| product.objectives.clone()),
            vision: request.vision.unwrap_or_else(|| product.vision.clone()),
            state: request.state.unwrap_or_else(|| product.state.clone()),
            definition_of_ready: request
                .definition_of_ready
                .unwrap_or_else(|| product.definition_of_ready.clone()),
        });

        self.ctx.product_repo().update(&product).await?;

        info!(product_id = product.id, "Product updated");

        Ok(ProductResponse::from(&product))
    }

    /// Deactivate a product and its backlog (soft delete)
    #[instrument(skip(self))]
    pub async fn deactivate(&self, product_id: i64) -> ServiceResult<()> {
        self.ctx.product_repo().deactivate(product_id).await?;

        // The backlog follows its product
        if let Some(backlog) = self.ctx.backlog_repo().find_by_product(product_id).await? {
            self.ctx.backlog_repo().deactivate(backlog.id).await?;
        }

        info!(product_id, "Product deactivated");
        Ok(())
    }
}
