//! Repository traits (ports) for the storage layer

mod repositories;

pub use repositories::{
    BacklogRepository, CustomerRepository, ItemRepository, ProductRepository, RepoResult,
    SprintRepository,
};
