//! # Clientele Server Library
//!
//! Dependency wiring and startup for the Clientele customer service.

pub mod di;
pub mod startup;
