//! Configuration validation module.
//!
//! Checks every section of [`AppConfig`] and reports all violations at once,
//! so a bad deployment fails at startup rather than on the first request.

use crate::{AppConfig, CacheConfig, DatabaseConfig, ObservabilityConfig, RedisConfig, ResilienceConfig, ServerConfig};
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout, TTL or threshold must be positive.
    NonPositive { name: String },
    /// Cache key prefix is empty or contains the key separator.
    InvalidKeyPrefix { value: String },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {name}: {value} (must be 1-65535)")
            }
            Self::InvalidPoolSize { min, max } => {
                write!(f, "Invalid pool size: min ({min}) cannot be greater than max ({max})")
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Pool size {value} exceeds maximum allowed ({maximum})")
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {url_type} URL: {message}")
            }
            Self::NonPositive { name } => {
                write!(f, "'{name}' must be positive, got 0")
            }
            Self::InvalidKeyPrefix { value } => {
                write!(f, "Invalid cache key prefix: '{value}' (must be non-empty without ':')")
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{value}' (valid: trace, debug, info, warn, error)"
                )
            }
            Self::InvalidLogFormat { value } => {
                write!(f, "Invalid log format: '{value}' (valid: pretty, json)")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 1000;
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    /// Valid log formats.
    const VALID_LOG_FORMATS: &'static [&'static str] = &["pretty", "json"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&config.server, &mut errors);
        Self::validate_database(&config.database, &mut errors);
        Self::validate_redis(&config.redis, &mut errors);
        Self::validate_cache(&config.cache, &mut errors);
        Self::validate_resilience(&config.resilience, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn require_positive(name: &str, value: u64, errors: &mut Vec<ConfigValidationError>) {
        if value == 0 {
            errors.push(ConfigValidationError::NonPositive {
                name: name.to_string(),
            });
        }
    }

    fn validate_server(config: &ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: config.port,
            });
        }
        Self::require_positive("server.request_timeout_secs", config.request_timeout_secs, errors);
    }

    fn validate_database(config: &DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        match Url::parse(&config.url) {
            Ok(url) if url.scheme() == "mysql" => {}
            Ok(url) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: format!("unsupported scheme '{}', expected mysql://", url.scheme()),
            }),
            Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: e.to_string(),
            }),
        }

        if config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.max_connections > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: config.max_connections,
                maximum: Self::MAX_POOL_SIZE,
            });
        }
        Self::require_positive("database.max_connections", u64::from(config.max_connections), errors);
        Self::require_positive("database.connect_timeout_secs", config.connect_timeout_secs, errors);
        Self::require_positive("database.idle_timeout_secs", config.idle_timeout_secs, errors);
    }

    fn validate_redis(config: &RedisConfig, errors: &mut Vec<ConfigValidationError>) {
        if !config.enabled {
            return;
        }

        match Url::parse(&config.url) {
            Ok(url) if matches!(url.scheme(), "redis" | "rediss") => {}
            _ => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: "URL must start with redis:// or rediss://".to_string(),
            }),
        }

        if config.pool_size > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: config.pool_size,
                maximum: Self::MAX_POOL_SIZE,
            });
        }
        Self::require_positive("redis.pool_size", u64::from(config.pool_size), errors);
    }

    fn validate_cache(config: &CacheConfig, errors: &mut Vec<ConfigValidationError>) {
        Self::require_positive("cache.customer_ttl_secs", config.customer_ttl_secs, errors);
        Self::require_positive("cache.default_ttl_secs", config.default_ttl_secs, errors);

        if config.key_prefix.trim().is_empty() || config.key_prefix.contains(':') {
            errors.push(ConfigValidationError::InvalidKeyPrefix {
                value: config.key_prefix.clone(),
            });
        }
    }

    fn validate_resilience(config: &ResilienceConfig, errors: &mut Vec<ConfigValidationError>) {
        Self::require_positive("resilience.failure_threshold", config.failure_threshold, errors);
        Self::require_positive("resilience.success_threshold", config.success_threshold, errors);
        Self::require_positive("resilience.half_open_requests", config.half_open_requests, errors);
        Self::require_positive("resilience.call_timeout_ms", config.call_timeout_ms, errors);
        Self::require_positive(
            "resilience.startup_retry_attempts",
            u64::from(config.startup_retry_attempts),
            errors,
        );
    }

    fn validate_observability(config: &ObservabilityConfig, errors: &mut Vec<ConfigValidationError>) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }

        let format = config.log_format.to_lowercase();
        if !Self::VALID_LOG_FORMATS.contains(&format.as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.log_format.clone(),
            });
        }
    }
}

/// Formats validation errors for display.
#[must_use]
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_error(config: &AppConfig, predicate: impl Fn(&ConfigValidationError) -> bool) -> bool {
        ConfigValidator::validate(config)
            .unwrap_err()
            .iter()
            .any(predicate)
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(has_error(&config, |e| matches!(
            e,
            ConfigValidationError::InvalidPort { name, .. } if name == "server.port"
        )));
    }

    #[test]
    fn test_invalid_pool_size() {
        let mut config = AppConfig::default();
        config.database.min_connections = 100;
        config.database.max_connections = 10;
        assert!(has_error(&config, |e| matches!(
            e,
            ConfigValidationError::InvalidPoolSize { .. }
        )));
    }

    #[test]
    fn test_pool_size_too_large() {
        let mut config = AppConfig::default();
        config.database.max_connections = 2000;
        assert!(has_error(&config, |e| matches!(
            e,
            ConfigValidationError::PoolSizeTooLarge { .. }
        )));
    }

    #[test]
    fn test_invalid_database_url() {
        let mut config = AppConfig::default();
        config.database.url = "postgres://localhost/db".to_string();
        assert!(has_error(&config, |e| matches!(
            e,
            ConfigValidationError::InvalidUrl { url_type, .. } if url_type == "database"
        )));

        config.database.url = "not a url".to_string();
        assert!(has_error(&config, |e| matches!(
            e,
            ConfigValidationError::InvalidUrl { url_type, .. } if url_type == "database"
        )));
    }

    #[test]
    fn test_invalid_redis_url_only_when_enabled() {
        let mut config = AppConfig::default();
        config.redis.url = "http://localhost:6379".to_string();
        assert!(has_error(&config, |e| matches!(
            e,
            ConfigValidationError::InvalidUrl { url_type, .. } if url_type == "redis"
        )));

        config.redis.enabled = false;
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let mut config = AppConfig::default();
        config.cache.default_ttl_secs = 0;
        assert!(has_error(&config, |e| matches!(
            e,
            ConfigValidationError::NonPositive { name } if name == "cache.default_ttl_secs"
        )));
    }

    #[test]
    fn test_key_prefix_rejected() {
        let mut config = AppConfig::default();
        config.cache.key_prefix = "a:b".to_string();
        assert!(has_error(&config, |e| matches!(
            e,
            ConfigValidationError::InvalidKeyPrefix { .. }
        )));
    }

    #[test]
    fn test_invalid_log_settings() {
        let mut config = AppConfig::default();
        config.observability.log_level = "loud".to_string();
        config.observability.log_format = "xml".to_string();
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_multiple_errors() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config.resilience.call_timeout_ms = 0;
        config.database.min_connections = 100;
        config.database.max_connections = 10;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_format_validation_errors() {
        let errors = vec![
            ConfigValidationError::NonPositive {
                name: "cache.customer_ttl_secs".to_string(),
            },
            ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: 0,
            },
        ];

        let output = format_validation_errors(&errors);
        assert!(output.contains("1. 'cache.customer_ttl_secs' must be positive"));
        assert!(output.contains("2. Invalid port"));
    }
}
