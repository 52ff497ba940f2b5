//! Data transfer objects for the HTTP boundary

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateItemRequest, CreateProductRequest, CreateSprintRequest, LoginRequest, RegisterRequest,
    UpdateCustomerRequest, UpdateItemRequest, UpdateProductRequest, UpdateSprintRequest,
};
pub use responses::{
    AuthResponse, BacklogResponse, CustomerResponse, HealthResponse, ItemResponse,
    ProductResponse, ReadinessResponse, SprintResponse,
};
