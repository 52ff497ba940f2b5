//! Sprint database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for the sprints table
#[derive(Debug, Clone, FromRow)]
pub struct SprintModel {
    pub id: i64,
    pub product_backlog_id: i64,
    pub goals: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
