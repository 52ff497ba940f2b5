//! Database models mapped with SQLx `FromRow`

mod backlog;
mod customer;
mod item;
mod product;
mod sprint;

pub use backlog::BacklogModel;
pub use customer::CustomerModel;
pub use item::ItemModel;
pub use product::ProductModel;
pub use sprint::SprintModel;
