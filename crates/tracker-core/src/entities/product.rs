//! Product entity - a tracked product under development

use chrono::{DateTime, Utc};

/// Product entity
///
/// Each product owns exactly one product backlog, created together with the
/// product and resolved through `BacklogRepository::find_by_product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub client: String,
    pub objectives: String,
    pub vision: String,
    pub state: String,
    pub definition_of_ready: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Apply the fields of an update in place
    pub fn apply(&mut self, update: NewProduct) {
        self.name = update.name;
        self.client = update.client;
        self.objectives = update.objectives;
        self.vision = update.vision;
        self.state = update.state;
        self.definition_of_ready = update.definition_of_ready;
        self.updated_at = Utc::now();
    }

    /// Mark the product inactive (soft delete)
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }
}

/// Data for creating or replacing a product; the id is assigned by storage
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub client: String,
    pub objectives: String,
    pub vision: String,
    pub state: String,
    pub definition_of_ready: String,
}
