//! Product backlog entity

use chrono::{DateTime, Utc};

/// Product backlog - the single backlog attached to a product.
///
/// Items are not held here as live pointers; they carry a
/// `product_backlog_id` back-reference and are resolved through
/// `ItemRepository::find_by_backlog`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductBacklog {
    pub id: i64,
    pub product_id: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
