//! Server startup utilities.

use crate::di::{build_module, ServiceResolver};
use clientele_config::{AppConfig, ObservabilityConfig, ServerConfig};
use clientele_core::{ClienteleError, ClienteleResult, HealthCheck};
use clientele_repository::{DatabaseHealthCheck, DatabasePool, DatabasePoolInterface};
use clientele_resilience::RetryPolicy;
use clientele_rest::{create_router, AppState};
use clientele_service::{create_redis_pool, CacheHealthCheck};
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
#[must_use]
pub fn default_filter(level: &str) -> String {
    format!("{level},clientele=debug,tower_http=debug")
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r"
   _____ _ _            _       _
  / ____| (_)          | |     | |
 | |    | |_  ___ _ __ | |_ ___| | ___
 | |    | | |/ _ \ '_ \| __/ _ \ |/ _ \
 | |____| | |  __/ | | | ||  __/ |  __/
  \_____|_|_|\___|_| |_|\__\___|_|\___|
"
    );
}

/// Prints server startup information.
pub fn print_startup_info(server: &ServerConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/customer", server.addr());
    info!("Health:    http://{}/health", server.addr());
    info!("Readiness: http://{}/ready", server.addr());
    info!("{}", separator);
}

/// Connects the backends, wires the module and serves HTTP until shutdown.
pub async fn run(config: AppConfig) -> ClienteleResult<()> {
    let retry = RetryPolicy::startup(&config.resilience);
    let db_pool = retry
        .execute("database connect", || DatabasePool::connect(&config.database))
        .await?;

    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    }

    let cache_pool = if config.redis.enabled {
        Some(create_redis_pool(&config.redis)?)
    } else {
        None
    };

    let module = build_module(&db_pool, cache_pool, &config.cache);

    let health_checks: Vec<Arc<dyn HealthCheck>> = vec![
        Arc::new(DatabaseHealthCheck::new(module.database_pool())),
        Arc::new(CacheHealthCheck::new(module.cache())),
    ];
    let state = AppState::from_module(&module, &config.resilience, health_checks);
    let router = create_router(state, &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ClienteleError::internal(format!("Failed to bind {addr}: {e}")))?;

    print_startup_info(&config.server);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClienteleError::internal(format!("HTTP server error: {e}")))?;

    module.database_pool().close().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
