//! Sprint entity <-> model mapper

use tracker_core::Sprint;

use crate::models::SprintModel;

impl From<SprintModel> for Sprint {
    fn from(model: SprintModel) -> Self {
        Sprint {
            id: model.id,
            product_backlog_id: model.product_backlog_id,
            goals: model.goals,
            start_date: model.start_date,
            end_date: model.end_date,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
