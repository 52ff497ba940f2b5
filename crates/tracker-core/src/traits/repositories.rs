//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from storage; the infrastructure
//! layer provides the implementation. Ids are assigned by storage, so
//! creation methods take `New*` payloads and return the stored entity.

use async_trait::async_trait;

use crate::entities::{
    Customer, ItemBacklog, NewCustomer, NewItemBacklog, NewProduct, NewSprint, Product,
    ProductBacklog, Sprint,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Customer Repository
// ============================================================================

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find customer by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Customer>>;

    /// Find customer by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>>;

    /// Check if an email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new customer, returning the stored entity
    async fn create(&self, customer: &NewCustomer, password_hash: &str) -> RepoResult<Customer>;

    /// Update profile fields of an existing customer
    async fn update(&self, customer: &Customer) -> RepoResult<()>;

    /// Soft delete a customer
    async fn deactivate(&self, id: i64) -> RepoResult<()>;

    /// Get the password hash for authentication, by email
    async fn password_hash_by_email(&self, email: &str) -> RepoResult<Option<String>>;

    /// Replace the stored password hash
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Product Repository
// ============================================================================

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find product by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>>;

    /// List all active products
    async fn list(&self) -> RepoResult<Vec<Product>>;

    /// Create a new product, returning the stored entity
    async fn create(&self, product: &NewProduct) -> RepoResult<Product>;

    /// Update an existing product
    async fn update(&self, product: &Product) -> RepoResult<()>;

    /// Soft delete a product
    async fn deactivate(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Backlog Repository
// ============================================================================

#[async_trait]
pub trait BacklogRepository: Send + Sync {
    /// Find backlog by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ProductBacklog>>;

    /// Find the backlog owned by a product
    async fn find_by_product(&self, product_id: i64) -> RepoResult<Option<ProductBacklog>>;

    /// Create the backlog for a product, returning the stored entity
    async fn create(&self, product_id: i64) -> RepoResult<ProductBacklog>;

    /// Soft delete a backlog
    async fn deactivate(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Item Repository
// ============================================================================

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find item by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ItemBacklog>>;

    /// List active items of a backlog
    async fn find_by_backlog(&self, backlog_id: i64) -> RepoResult<Vec<ItemBacklog>>;

    /// List active items assigned to a sprint
    async fn find_by_sprint(&self, sprint_id: i64) -> RepoResult<Vec<ItemBacklog>>;

    /// Create an item under a backlog, returning the stored entity
    async fn create(&self, backlog_id: i64, item: &NewItemBacklog) -> RepoResult<ItemBacklog>;

    /// Update an existing item
    async fn update(&self, item: &ItemBacklog) -> RepoResult<()>;

    /// Soft delete an item
    async fn deactivate(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Sprint Repository
// ============================================================================

#[async_trait]
pub trait SprintRepository: Send + Sync {
    /// Find sprint by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Sprint>>;

    /// List active sprints of a backlog
    async fn find_by_backlog(&self, backlog_id: i64) -> RepoResult<Vec<Sprint>>;

    /// Create a sprint under a backlog, returning the stored entity
    async fn create(&self, backlog_id: i64, sprint: &NewSprint) -> RepoResult<Sprint>;

    /// Update an existing sprint
    async fn update(&self, sprint: &Sprint) -> RepoResult<()>;

    /// Soft delete a sprint
    async fn deactivate(&self, id: i64) -> RepoResult<()>;

    /// Check whether an item is assigned to a sprint
    async fn is_item_assigned(&self, sprint_id: i64, item_id: i64) -> RepoResult<bool>;

    /// Assign an item to a sprint
    async fn assign_item(&self, sprint_id: i64, item_id: i64) -> RepoResult<()>;

    /// Remove an item from a sprint
    async fn unassign_item(&self, sprint_id: i64, item_id: i64) -> RepoResult<()>;
}
