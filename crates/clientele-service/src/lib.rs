//! # Clientele Service
//!
//! The customer service and the cache layer it keeps in step with the
//! record store.

pub mod cache;
pub mod customer_service;
pub mod dto;
pub mod r#impl;

pub use cache::*;
pub use customer_service::*;
pub use dto::*;
pub use r#impl::{CustomerServiceComponent, CustomerServiceComponentParameters};
