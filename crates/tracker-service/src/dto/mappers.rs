//! Entity → response DTO mappers

use tracker_core::{Customer, ItemBacklog, Product, ProductBacklog, Sprint};

use super::responses::{
    BacklogResponse, CustomerResponse, ItemResponse, ProductResponse, SprintResponse,
};

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            last_name: customer.last_name.clone(),
            email: customer.email.clone(),
            role: customer.role,
            created_at: customer.created_at,
        }
    }
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            client: product.client.clone(),
            objectives: product.objectives.clone(),
            vision: product.vision.clone(),
            state: product.state.clone(),
            definition_of_ready: product.definition_of_ready.clone(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<&ItemBacklog> for ItemResponse {
    fn from(item: &ItemBacklog) -> Self {
        Self {
            id: item.id,
            product_backlog_id: item.product_backlog_id,
            name: item.name.clone(),
            description: item.description.clone(),
            status: item.status,
            priority: item.priority,
            acceptance_criteria: item.acceptance_criteria.clone(),
            effort_estimation: item.effort_estimation.clone(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl BacklogResponse {
    /// Compose a backlog response from the backlog and its resolved items
    pub fn compose(backlog: &ProductBacklog, items: &[ItemBacklog]) -> Self {
        Self {
            id: backlog.id,
            product_id: backlog.product_id,
            items: items.iter().map(ItemResponse::from).collect(),
            created_at: backlog.created_at,
        }
    }
}

impl From<&Sprint> for SprintResponse {
    fn from(sprint: &Sprint) -> Self {
        Self {
            id: sprint.id,
            product_backlog_id: sprint.product_backlog_id,
            goals: sprint.goals.clone(),
            start_date: sprint.start_date,
            end_date: sprint.end_date,
            created_at: sprint.created_at,
            updated_at: sprint.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tracker_core::{ItemStatus, Priority, Role};

    #[test]
    fn test_customer_response_carries_no_credential() {
        let now = Utc::now();
        let customer = Customer {
            id: 1,
            name: "Joao".to_string(),
            last_name: "Ninguem".to_string(),
            email: "joao@email.com".to_string(),
            role: Role::Admin,
            active: true,
            created_at: now,
            updated_at: now,
        };

        let response = CustomerResponse::from(&customer);
        assert_eq!(response.id, 1);
        assert_eq!(response.role, Role::Admin);

        // Serialized form exposes exactly the public fields
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "ADMIN");
    }

    #[test]
    fn test_backlog_response_composes_items() {
        let now = Utc::now();
        let backlog = ProductBacklog {
            id: 2,
            product_id: 1,
            active: true,
            created_at: now,
            updated_at: now,
        };
        let items = vec![ItemBacklog {
            id: 7,
            product_backlog_id: 2,
            name: "Login page".to_string(),
            description: "Build the login page".to_string(),
            status: ItemStatus::Todo,
            priority: Priority::High,
            acceptance_criteria: vec![],
            effort_estimation: "3".to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        }];

        let response = BacklogResponse::compose(&backlog, &items);
        assert_eq!(response.product_id, 1);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id, 7);
    }
}
