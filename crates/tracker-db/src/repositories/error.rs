//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use tracker_core::DomainError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "customer not found" error
pub fn customer_not_found(id: i64) -> DomainError {
    DomainError::CustomerNotFound(id)
}

/// Create a "product not found" error
pub fn product_not_found(id: i64) -> DomainError {
    DomainError::ProductNotFound(id)
}

/// Create a "backlog not found" error
pub fn backlog_not_found(id: i64) -> DomainError {
    DomainError::BacklogNotFound(id)
}

/// Create an "item not found" error
pub fn item_not_found(id: i64) -> DomainError {
    DomainError::ItemNotFound(id)
}

/// Create a "sprint not found" error
pub fn sprint_not_found(id: i64) -> DomainError {
    DomainError::SprintNotFound(id)
}
