//! Timeout wrapper for async operations.

use clientele_core::{ClienteleError, ClienteleResult};
use std::future::Future;
use std::time::Duration;

/// Runs `f`, failing with [`ClienteleError::Timeout`] when it does not
/// finish within `duration`. `operation` names the call in the error.
pub async fn with_timeout<F, Fut, T>(operation: &str, duration: Duration, f: F) -> ClienteleResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ClienteleResult<T>>,
{
    tokio::time::timeout(duration, f())
        .await
        .map_err(|_| ClienteleError::Timeout(format!("{operation} did not complete within {duration:?}")))?
}
