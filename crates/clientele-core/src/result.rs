//! Result type aliases for the customer service.

use crate::ClienteleError;

/// A specialized `Result` type for Clientele operations.
pub type ClienteleResult<T> = Result<T, ClienteleError>;
