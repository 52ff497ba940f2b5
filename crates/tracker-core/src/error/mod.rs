//! Domain error types and the boundary error taxonomy

mod domain_error;

pub use domain_error::{DomainError, ErrorKind};
