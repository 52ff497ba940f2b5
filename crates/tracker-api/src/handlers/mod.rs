//! HTTP request handlers, one module per resource

pub mod auth;
pub mod backlogs;
pub mod customers;
pub mod health;
pub mod items;
pub mod products;
pub mod sprints;
