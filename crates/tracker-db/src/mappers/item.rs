//! Backlog item entity <-> model mapper

use tracker_core::{DomainError, ItemBacklog, ItemStatus, Priority};

use crate::models::ItemModel;

/// Convert ItemModel to ItemBacklog entity.
/// Fallible: the stored status and priority strings must parse.
impl TryFrom<ItemModel> for ItemBacklog {
    type Error = DomainError;

    fn try_from(model: ItemModel) -> Result<Self, Self::Error> {
        let status = model.status.parse::<ItemStatus>().map_err(|_| {
            DomainError::InternalError(format!("invalid stored status: {}", model.status))
        })?;
        let priority = model.priority.parse::<Priority>().map_err(|_| {
            DomainError::InternalError(format!("invalid stored priority: {}", model.priority))
        })?;

        Ok(ItemBacklog {
            id: model.id,
            product_backlog_id: model.product_backlog_id,
            name: model.name,
            description: model.description,
            status,
            priority,
            acceptance_criteria: model.acceptance_criteria,
            effort_estimation: model.effort_estimation,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(status: &str, priority: &str) -> ItemModel {
        let now = Utc::now();
        ItemModel {
            id: 7,
            product_backlog_id: 2,
            name: "Login page".to_string(),
            description: "Build the login page".to_string(),
            status: status.to_string(),
            priority: priority.to_string(),
            acceptance_criteria: vec!["renders".to_string()],
            effort_estimation: "3".to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_maps_known_variants() {
        let item = ItemBacklog::try_from(model("IN_PROGRESS", "HIGH")).unwrap();
        assert_eq!(item.status, ItemStatus::InProgress);
        assert_eq!(item.priority, Priority::High);
    }

    #[test]
    fn test_rejects_unknown_variants() {
        assert!(ItemBacklog::try_from(model("BLOCKED", "HIGH")).is_err());
        assert!(ItemBacklog::try_from(model("TODO", "URGENT")).is_err());
    }
}
