//! Data Transfer Objects (DTOs).

mod customer_dto;

pub use customer_dto::*;
