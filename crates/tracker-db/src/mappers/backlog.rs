//! Product backlog entity <-> model mapper

use tracker_core::ProductBacklog;

use crate::models::BacklogModel;

impl From<BacklogModel> for ProductBacklog {
    fn from(model: BacklogModel) -> Self {
        ProductBacklog {
            id: model.id,
            product_id: model.product_id,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
