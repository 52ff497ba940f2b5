//! Backlog item database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the backlog_items table.
/// Acceptance criteria ride a Postgres TEXT[] column.
#[derive(Debug, Clone, FromRow)]
pub struct ItemModel {
    pub id: i64,
    pub product_backlog_id: i64,
    pub name: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub acceptance_criteria: Vec<String>,
    pub effort_estimation: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
