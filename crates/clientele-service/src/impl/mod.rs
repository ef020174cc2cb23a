//! Customer service implementations.
//!
//! Trait definitions live in the parent module (`customer_service.rs`).

pub mod customer_service_impl;

pub use customer_service_impl::{CustomerServiceComponent, CustomerServiceComponentParameters};
