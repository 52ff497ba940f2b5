//! Service context - dependency container for services
//!
//! Holds all repositories and shared services the business logic needs.

use std::sync::Arc;

use tracker_common::auth::JwtService;
use tracker_core::{
    BacklogRepository, CustomerRepository, ItemRepository, ProductRepository, SprintRepository,
};
use tracker_db::PgPool;

/// Service context containing all dependencies
///
/// Passed to every service. Provides access to:
/// - Database repositories
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    customer_repo: Arc<dyn CustomerRepository>,
    product_repo: Arc<dyn ProductRepository>,
    backlog_repo: Arc<dyn BacklogRepository>,
    item_repo: Arc<dyn ItemRepository>,
    sprint_repo: Arc<dyn SprintRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        customer_repo: Arc<dyn CustomerRepository>,
        product_repo: Arc<dyn ProductRepository>,
        backlog_repo: Arc<dyn BacklogRepository>,
        item_repo: Arc<dyn ItemRepository>,
        sprint_repo: Arc<dyn SprintRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            customer_repo,
            product_repo,
            backlog_repo,
            item_repo,
            sprint_repo,
            jwt_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the customer repository
    pub fn customer_repo(&self) -> &dyn CustomerRepository {
        self.customer_repo.as_ref()
    }

    /// Get the product repository
    pub fn product_repo(&self) -> &dyn ProductRepository {
        self.product_repo.as_ref()
    }

    /// Get the backlog repository
    pub fn backlog_repo(&self) -> &dyn BacklogRepository {
        self.backlog_repo.as_ref()
    }

    /// Get the item repository
    pub fn item_repo(&self) -> &dyn ItemRepository {
        self.item_repo.as_ref()
    }

    /// Get the sprint repository
    pub fn sprint_repo(&self) -> &dyn SprintRepository {
        self.sprint_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    customer_repo: Option<Arc<dyn CustomerRepository>>,
    product_repo: Option<Arc<dyn ProductRepository>>,
    backlog_repo: Option<Arc<dyn BacklogRepository>>,
    item_repo: Option<Arc<dyn ItemRepository>>,
    sprint_repo: Option<Arc<dyn SprintRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            customer_repo: None,
            product_repo: None,
            backlog_repo: None,
            item_repo: None,
            sprint_repo: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn customer_repo(mut self, repo: Arc<dyn CustomerRepository>) -> Self {
        self.customer_repo = Some(repo);
        self
    }

    pub fn product_repo(mut self, repo: Arc<dyn ProductRepository>) -> Self {
        self.product_repo = Some(repo);
        self
    }

    pub fn backlog_repo(mut self, repo: Arc<dyn BacklogRepository>) -> Self {
        self.backlog_repo = Some(repo);
        self
    }

    pub fn item_repo(mut self, repo: Arc<dyn ItemRepository>) -> Self {
        self.item_repo = Some(repo);
        self
    }

    pub fn sprint_repo(mut self, repo: Arc<dyn SprintRepository>) -> Self {
        self.sprint_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, jwt_service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(jwt_service);
        self
    }

    /// Build the context; errors name the first missing dependency
    pub fn build(self) -> Result<ServiceContext, &'static str> {
        Ok(ServiceContext {
            pool: self.pool.ok_or("missing pool")?,
            customer_repo: self.customer_repo.ok_or("missing customer_repo")?,
            product_repo: self.product_repo.ok_or("missing product_repo")?,
            backlog_repo: self.backlog_repo.ok_or("missing backlog_repo")?,
            item_repo: self.item_repo.ok_or("missing item_repo")?,
            sprint_repo: self.sprint_repo.ok_or("missing sprint_repo")?,
            jwt_service: self.jwt_service.ok_or("missing jwt_service")?,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
