//! Product backlog database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the product_backlogs table
#[derive(Debug, Clone, FromRow)]
pub struct BacklogModel {
    pub id: i64,
    pub product_id: i64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
