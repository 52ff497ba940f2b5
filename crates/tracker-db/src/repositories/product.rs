//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tracker_core::{NewProduct, Product, ProductRepository, RepoResult};

use crate::models::ProductModel;

use super::error::{map_db_error, product_not_found};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new PgProductRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        let result = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, client, objectives, vision, state, definition_of_ready,
                   active, created_at, updated_at
            FROM products
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, client, objectives, vision, state, definition_of_ready,
                   active, created_at, updated_at
            FROM products
            WHERE active
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self), fields(name = %product.name))]
    async fn create(&self, product: &NewProduct) -> RepoResult<Product> {
        let model = sqlx::query_as::<_, ProductModel>(
            r"
            INSERT INTO products (name, client, objectives, vision, state, definition_of_ready,
                                  active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, NOW(), NOW())
            RETURNING id, name, client, objectives, vision, state, definition_of_ready,
                      active, created_at, updated_at
            ",
        )
        .bind(&product.name)
        .bind(&product.client)
        .bind(&product.objectives)
        .bind(&product.vision)
        .bind(&product.state)
        .bind(&product.definition_of_ready)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Product::from(model))
    }

    #[instrument(skip(self), fields(id = product.id))]
    async fn update(&self, product: &Product) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET name = $2, client = $3, objectives = $4, vision = $5, state = $6,
                definition_of_ready = $7, updated_at = NOW()
            WHERE id = $1 AND active
            ",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.client)
        .bind(&product.objectives)
        .bind(&product.vision)
        .bind(&product.state)
        .bind(&product.definition_of_ready)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(product_not_found(product.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET active = FALSE, updated_at = NOW()
            WHERE id = $1 AND active
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(product_not_found(id));
        }

        Ok(())
    }
}
