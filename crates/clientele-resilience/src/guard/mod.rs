//! Breaker plus timeout around a single dependency.

use crate::circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
use crate::timeout::with_timeout;
use clientele_config::ResilienceConfig;
use clientele_core::ClienteleResult;
use std::future::Future;
use std::time::Duration;

/// Guards calls into one dependency with a named circuit breaker and a per
/// call timeout.
///
/// Only errors that [`ClienteleError::should_trip_circuit_breaker`] accepts
/// count against the breaker; a timeout always does.
///
/// [`ClienteleError::should_trip_circuit_breaker`]: clientele_core::ClienteleError::should_trip_circuit_breaker
#[derive(Debug)]
pub struct ServiceGuard {
    breaker: CircuitBreaker,
    call_timeout: Duration,
}

impl ServiceGuard {
    /// Creates a guard with an explicit breaker configuration.
    pub fn new(name: impl Into<String>, breaker: CircuitBreakerConfig, call_timeout: Duration) -> Self {
        Self {
            breaker: CircuitBreaker::new(name, breaker),
            call_timeout,
        }
    }

    /// Creates a guard from the resilience section of the configuration.
    pub fn from_config(name: impl Into<String>, config: &ResilienceConfig) -> Self {
        Self::new(name, CircuitBreakerConfig::from(config), config.call_timeout())
    }

    /// Name of the guarded dependency.
    pub fn name(&self) -> &str {
        self.breaker.name()
    }

    /// Current breaker state.
    pub fn state(&self) -> CircuitState {
        self.breaker.state()
    }

    /// Runs `f` under the breaker and the call timeout.
    pub async fn run<F, Fut, T>(&self, f: F) -> ClienteleResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClienteleResult<T>>,
    {
        let name = self.breaker.name();
        let timeout = self.call_timeout;
        self.breaker
            .call_classified(
                || with_timeout(name, timeout, f),
                clientele_core::ClienteleError::should_trip_circuit_breaker,
            )
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientele_core::ClienteleError;

    fn guard() -> ServiceGuard {
        ServiceGuard::new(
            "customer-service",
            CircuitBreakerConfig {
                failure_threshold: 2,
                success_threshold: 1,
                open_timeout: Duration::from_secs(60),
                half_open_requests: 1,
            },
            Duration::from_millis(20),
        )
    }

    #[tokio::test]
    async fn test_passes_value_through() {
        let guard = guard();
        assert_eq!(guard.run(|| async { Ok(7) }).await.unwrap(), 7);
        assert_eq!(guard.name(), "customer-service");
    }

    #[tokio::test]
    async fn test_domain_errors_do_not_open() {
        let guard = guard();
        for _ in 0..5 {
            let result: ClienteleResult<()> =
                guard.run(|| async { Err(ClienteleError::validation("bad")) }).await;
            assert!(matches!(result, Err(ClienteleError::Validation(_))));
        }
        assert_eq!(guard.state(), CircuitState::Closed);
    }

    #[tokio::test]
    async fn test_timeouts_open_the_breaker() {
        let guard = guard();
        for _ in 0..2 {
            let result: ClienteleResult<()> = guard
                .run(|| async {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    Ok(())
                })
                .await;
            assert!(matches!(result, Err(ClienteleError::Timeout(_))));
        }

        assert_eq!(guard.state(), CircuitState::Open);
        let rejected: ClienteleResult<()> = guard.run(|| async { Ok(()) }).await;
        assert!(matches!(rejected, Err(ClienteleError::CircuitBreakerOpen(_))));
    }

    #[tokio::test]
    async fn test_unexpected_errors_open_the_breaker() {
        let guard = guard();
        for _ in 0..2 {
            let _: ClienteleResult<()> = guard
                .run(|| async { Err(ClienteleError::Database("gone".to_string())) })
                .await;
        }
        assert_eq!(guard.state(), CircuitState::Open);
    }
}
