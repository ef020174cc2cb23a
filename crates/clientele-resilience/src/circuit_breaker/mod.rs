//! Circuit breaker implementation.

use clientele_config::ResilienceConfig;
use clientele_core::ClienteleError;
use std::future::Future;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Circuit breaker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CircuitState {
    /// Requests are allowed.
    Closed = 0,
    /// Requests are rejected.
    Open = 1,
    /// A limited number of trial requests are allowed.
    HalfOpen = 2,
}

impl From<u8> for CircuitState {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Open,
            2 => Self::HalfOpen,
            _ => Self::Closed,
        }
    }
}

/// Circuit breaker configuration.
#[derive(Debug, Clone)]
pub struct CircuitBreakerConfig {
    /// Consecutive failures before opening the circuit.
    pub failure_threshold: u64,
    /// Successes needed to close the circuit from half-open.
    pub success_threshold: u64,
    /// Time spent open before probing.
    pub open_timeout: Duration,
    /// Requests allowed in half-open state.
    pub half_open_requests: u64,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self::from(&ResilienceConfig::default())
    }
}

impl From<&ResilienceConfig> for CircuitBreakerConfig {
    fn from(config: &ResilienceConfig) -> Self {
        Self {
            failure_threshold: config.failure_threshold,
            success_threshold: config.success_threshold,
            open_timeout: config.open_timeout(),
            half_open_requests: config.half_open_requests,
        }
    }
}

/// Circuit breaker for protecting against cascading failures.
pub struct CircuitBreaker {
    name: String,
    state: AtomicU8,
    failure_count: AtomicU64,
    success_count: AtomicU64,
    half_open_requests: AtomicU64,
    opened_at: RwLock<Option<Instant>>,
    config: CircuitBreakerConfig,
}

impl CircuitBreaker {
    /// Creates a new circuit breaker.
    pub fn new(name: impl Into<String>, config: CircuitBreakerConfig) -> Self {
        Self {
            name: name.into(),
            state: AtomicU8::new(CircuitState::Closed as u8),
            failure_count: AtomicU64::new(0),
            success_count: AtomicU64::new(0),
            half_open_requests: AtomicU64::new(0),
            opened_at: RwLock::new(None),
            config,
        }
    }

    /// Creates a new circuit breaker with default configuration.
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self::new(name, CircuitBreakerConfig::default())
    }

    /// Returns the current state of the circuit breaker.
    pub fn state(&self) -> CircuitState {
        CircuitState::from(self.state.load(Ordering::SeqCst))
    }

    /// Returns the name of the circuit breaker.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Executes `f` under breaker protection. Every error counts as a
    /// failure.
    pub async fn call<F, Fut, T, E>(&self, f: F) -> Result<T, CircuitBreakerError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.call_classified(f, |_| true).await
    }

    /// Executes `f` under breaker protection. Errors for which `counts`
    /// returns false are passed through and recorded as successes, since
    /// the protected dependency did answer.
    pub async fn call_classified<F, Fut, T, E, C>(
        &self,
        f: F,
        counts: C,
    ) -> Result<T, CircuitBreakerError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        C: FnOnce(&E) -> bool,
    {
        if !self.allow_request().await {
            return Err(CircuitBreakerError::Open(self.name.clone()));
        }

        match f().await {
            Ok(result) => {
                self.record_success();
                Ok(result)
            }
            Err(e) if counts(&e) => {
                self.record_failure().await;
                Err(CircuitBreakerError::Failure(e))
            }
            Err(e) => {
                self.record_success();
                Err(CircuitBreakerError::Failure(e))
            }
        }
    }

    async fn allow_request(&self) -> bool {
        match self.state() {
            CircuitState::Closed => true,
            CircuitState::Open => {
                let opened_at = *self.opened_at.read().await;
                match opened_at {
                    Some(at) if at.elapsed() >= self.config.open_timeout => {
                        self.half_open();
                        self.half_open_requests.fetch_add(1, Ordering::SeqCst);
                        true
                    }
                    _ => false,
                }
            }
            CircuitState::HalfOpen => {
                let requests = self.half_open_requests.fetch_add(1, Ordering::SeqCst);
                requests < self.config.half_open_requests
            }
        }
    }

    fn half_open(&self) {
        self.state.store(CircuitState::HalfOpen as u8, Ordering::SeqCst);
        self.success_count.store(0, Ordering::SeqCst);
        self.half_open_requests.store(0, Ordering::SeqCst);
        debug!("Circuit breaker '{}' transitioning to half-open", self.name);
    }

    fn record_success(&self) {
        match self.state() {
            CircuitState::Closed => {
                self.failure_count.store(0, Ordering::SeqCst);
            }
            CircuitState::HalfOpen => {
                let successes = self.success_count.fetch_add(1, Ordering::SeqCst) + 1;
                if successes >= self.config.success_threshold {
                    self.state.store(CircuitState::Closed as u8, Ordering::SeqCst);
                    self.failure_count.store(0, Ordering::SeqCst);
                    info!("Circuit breaker '{}' closed after successful recovery", self.name);
                }
            }
            CircuitState::Open => {}
        }
    }

    async fn record_failure(&self) {
        match self.state() {
            CircuitState::Closed => {
                let failures = self.failure_count.fetch_add(1, Ordering::SeqCst) + 1;
                if failures >= self.config.failure_threshold {
                    self.open().await;
                    warn!(
                        "Circuit breaker '{}' opened after {} consecutive failures",
                        self.name, failures
                    );
                }
            }
            CircuitState::HalfOpen => {
                self.open().await;
                warn!(
                    "Circuit breaker '{}' reopened after failure in half-open state",
                    self.name
                );
            }
            CircuitState::Open => {}
        }
    }

    async fn open(&self) {
        *self.opened_at.write().await = Some(Instant::now());
        self.state.store(CircuitState::Open as u8, Ordering::SeqCst);
    }

    /// Manually resets the circuit breaker to closed state.
    pub async fn reset(&self) {
        self.state.store(CircuitState::Closed as u8, Ordering::SeqCst);
        self.failure_count.store(0, Ordering::SeqCst);
        self.success_count.store(0, Ordering::SeqCst);
        *self.opened_at.write().await = None;
        debug!("Circuit breaker '{}' manually reset", self.name);
    }
}

impl std::fmt::Debug for CircuitBreaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircuitBreaker")
            .field("name", &self.name)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// Error type for circuit breaker operations.
#[derive(Debug)]
pub enum CircuitBreakerError<E> {
    /// Circuit is open, request was rejected.
    Open(String),
    /// The underlying operation failed.
    Failure(E),
}

impl<E: std::fmt::Display> std::fmt::Display for CircuitBreakerError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(name) => write!(f, "Circuit breaker '{name}' is open"),
            Self::Failure(e) => write!(f, "Operation failed: {e}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for CircuitBreakerError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open(_) => None,
            Self::Failure(e) => Some(e),
        }
    }
}

impl From<CircuitBreakerError<ClienteleError>> for ClienteleError {
    fn from(err: CircuitBreakerError<ClienteleError>) -> Self {
        match err {
            CircuitBreakerError::Open(name) => Self::CircuitBreakerOpen(name),
            CircuitBreakerError::Failure(e) => e,
        }
    }
}
