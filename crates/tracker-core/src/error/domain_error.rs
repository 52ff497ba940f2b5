//! Domain errors and their classification
//!
//! Every failure the domain can signal classifies into exactly one
//! [`ErrorKind`]; the kind owns the stable status code and message the
//! HTTP boundary renders. The granular error text travels alongside as
//! detail and is never mutated on the way out.

use thiserror::Error;

/// Boundary error taxonomy.
///
/// The (status, message) pairs are part of the public API contract and
/// must not change; existing consumers match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input failed a validation rule
    ValidationFailed,
    /// Credential or token rejected
    Unauthorized,
    /// Token past its expiry (distinct from a generally bad token)
    TokenExpired,
    /// Authenticated but lacking the required role
    Forbidden,
    /// Entity lookup came up empty
    NotFound,
    /// Login attempted with an email no account has
    UnknownEmail,
    /// Entity with the same identity already exists
    Conflict,
    /// Anything unclassified
    Internal,
}

impl ErrorKind {
    /// HTTP status code analog for this kind
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::ValidationFailed => 400,
            Self::Unauthorized | Self::TokenExpired => 401,
            Self::Forbidden => 403,
            Self::NotFound | Self::UnknownEmail => 404,
            Self::Conflict => 409,
            Self::Internal => 500,
        }
    }

    /// Stable boundary message for this kind
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed.",
            Self::Unauthorized => "Authentication failed.",
            Self::TokenExpired => "This token has expired.",
            Self::Forbidden => "Insufficient permissions.",
            Self::NotFound => "Entity not found.",
            Self::UnknownEmail => "Email wasn't registered.",
            Self::Conflict => "Entity already exists.",
            Self::Internal => "Internal Server Error.",
        }
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Customer not found: {0}")]
    CustomerNotFound(i64),

    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    #[error("Product backlog not found: {0}")]
    BacklogNotFound(i64),

    #[error("Backlog item not found: {0}")]
    ItemNotFound(i64),

    #[error("Sprint not found: {0}")]
    SprintNotFound(i64),

    #[error("No account registered for email")]
    EmailNotRegistered,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Authentication / Authorization
    // =========================================================================
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing required role: {0}")]
    MissingRole(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Product {0} already has a backlog")]
    BacklogAlreadyExists(i64),

    #[error("Item {item_id} already assigned to sprint {sprint_id}")]
    ItemAlreadyAssigned { sprint_id: i64, item_id: i64 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Classify this error into its taxonomy kind.
    ///
    /// Total by construction: every variant maps to exactly one kind, and
    /// anything unclassifiable is already `Internal`.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CustomerNotFound(_)
            | Self::ProductNotFound(_)
            | Self::BacklogNotFound(_)
            | Self::ItemNotFound(_)
            | Self::SprintNotFound(_) => ErrorKind::NotFound,

            Self::EmailNotRegistered => ErrorKind::UnknownEmail,

            Self::ValidationError(_) | Self::InvalidEmail | Self::WeakPassword(_) => {
                ErrorKind::ValidationFailed
            }

            Self::InvalidCredentials => ErrorKind::Unauthorized,
            Self::MissingRole(_) => ErrorKind::Forbidden,

            Self::EmailAlreadyExists
            | Self::BacklogAlreadyExists(_)
            | Self::ItemAlreadyAssigned { .. } => ErrorKind::Conflict,

            Self::DatabaseError(_) | Self::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Check if this is a "not found" error
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound | ErrorKind::UnknownEmail)
    }

    /// Check if this is a conflict error
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self.kind(), ErrorKind::Conflict)
    }
}
