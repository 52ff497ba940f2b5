//! Product entity <-> model mapper

use tracker_core::Product;

use crate::models::ProductModel;

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name,
            client: model.client,
            objectives: model.objectives,
            vision: model.vision,
            state: model.state,
            definition_of_ready: model.definition_of_ready,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
