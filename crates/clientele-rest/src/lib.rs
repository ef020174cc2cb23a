//! # Clientele REST
//!
//! HTTP transport for the customer service using Axum.
//! Maps service outcomes onto status codes inside a `{content, statusCode}`
//! envelope and guards every service call with the `customer-service`
//! circuit breaker.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
