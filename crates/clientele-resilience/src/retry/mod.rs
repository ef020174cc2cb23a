//! Retry policy implementation.

use clientele_config::ResilienceConfig;
use std::future::Future;
use std::time::{Duration, SystemTime};
use tracing::warn;

/// Retry policy configuration.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero behaves as one.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
    /// Multiplier for exponential backoff.
    pub multiplier: f64,
    /// Whether to add up to 25% jitter to delays.
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryPolicy {
    /// Creates a new retry policy with the specified max attempts.
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Default::default()
        }
    }

    /// Policy used while waiting for backing services at startup.
    #[must_use]
    pub fn startup(config: &ResilienceConfig) -> Self {
        Self {
            max_attempts: config.startup_retry_attempts,
            initial_delay: config.startup_retry_delay(),
            ..Default::default()
        }
    }

    /// Delay slept before `attempt` (1-based retry number).
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }

        let exponent = i32::try_from(attempt - 1).unwrap_or(i32::MAX);
        let base = self.initial_delay.as_secs_f64() * self.multiplier.powi(exponent);
        let delay = base.min(self.max_delay.as_secs_f64());

        if self.jitter {
            let factor = 1.0 + (jitter_sample() * 0.5 - 0.25);
            Duration::from_secs_f64(delay * factor)
        } else {
            Duration::from_secs_f64(delay)
        }
    }

    /// Runs `f` until it succeeds or the attempts are used up, returning
    /// the last error in that case.
    pub async fn execute<F, Fut, T, E>(&self, operation: &str, mut f: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match f().await {
                Ok(result) => return Ok(result),
                Err(e) if attempt >= attempts => return Err(e),
                Err(e) => {
                    let delay = self.delay_for_attempt(attempt);
                    warn!(
                        "{} failed (attempt {}/{}): {}; retrying in {:?}",
                        operation, attempt, attempts, e, delay
                    );
                    tokio::time::sleep(delay).await;
                }
            }
            attempt += 1;
        }
    }
}

/// Cheap value in `[0, 1)` derived from the clock.
fn jitter_sample() -> f64 {
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.subsec_nanos());
    f64::from(nanos % 1000) / 1000.0
}
