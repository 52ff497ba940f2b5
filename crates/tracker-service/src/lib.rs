//! # tracker-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthResponse, BacklogResponse, CreateItemRequest, CreateProductRequest, CreateSprintRequest,
    CustomerResponse, HealthResponse, ItemResponse, LoginRequest, ProductResponse,
    ReadinessResponse, RegisterRequest, SprintResponse, UpdateCustomerRequest, UpdateItemRequest,
    UpdateProductRequest, UpdateSprintRequest,
};
pub use services::{
    AuthService, BacklogService, CustomerService, ItemService, ProductService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SprintService,
};
