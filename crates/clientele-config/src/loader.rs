//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use clientele_core::ClienteleError;
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of every environment variable the loader reads.
pub const ENV_PREFIX: &str = "CLIENTELE";

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `CLIENTELE_` prefix, `__` between sections
    ///
    /// The environment name comes from `CLIENTELE_ENVIRONMENT`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        let environment =
            std::env::var("CLIENTELE_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self::with_environment(config_dir, environment)
    }

    /// Creates a loader for an explicit environment name.
    pub fn with_environment(config_dir: impl Into<PathBuf>, environment: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
            environment: environment.into(),
        }
    }

    /// Loader for the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Returns the environment this loader resolves.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Loads and validates the configuration.
    pub fn load(&self) -> Result<AppConfig, ClienteleError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        info!("Loading configuration for environment: {}", self.environment);

        let mut builder = Config::builder();

        for name in ["default", self.environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{name}.toml"));
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_clientele_error)?;

        ConfigValidator::validate(&app_config)
            .map_err(|errors| ClienteleError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }
}

fn config_error_to_clientele_error(err: ConfigError) -> ClienteleError {
    ClienteleError::Configuration(err.to_string())
}
