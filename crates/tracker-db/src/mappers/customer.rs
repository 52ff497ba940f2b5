//! Customer entity <-> model mapper

use tracker_core::{Customer, DomainError, Role};

use crate::models::CustomerModel;

/// Convert CustomerModel to Customer entity.
/// Fallible: the stored role string must parse to a known variant.
impl TryFrom<CustomerModel> for Customer {
    type Error = DomainError;

    fn try_from(model: CustomerModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse::<Role>()
            .map_err(|_| DomainError::InternalError(format!("invalid stored role: {}", model.role)))?;

        Ok(Customer {
            id: model.id,
            name: model.name,
            last_name: model.last_name,
            email: model.email,
            role,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
