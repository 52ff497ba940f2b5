//! Customer database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the customers table
#[derive(Debug, Clone, FromRow)]
pub struct CustomerModel {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
