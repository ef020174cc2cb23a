//! # Clientele Resilience
//!
//! Resilience patterns for the Clientele customer service.
//! Provides a circuit breaker, call timeouts, the guard the transport layer
//! wraps around every service invocation, and the startup retry policy.

pub mod circuit_breaker;
pub mod guard;
pub mod retry;
pub mod timeout;

pub use circuit_breaker::*;
pub use guard::*;
pub use retry::*;
pub use timeout::*;
