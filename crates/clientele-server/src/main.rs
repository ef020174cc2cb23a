//! # Clientele Server
//!
//! Entry point: load configuration, initialise logging, serve HTTP until a
//! shutdown signal arrives.

use clientele_config::ConfigLoader;
use clientele_server::startup::{init_logging, print_banner, run};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location().load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    print_banner();

    info!("Starting {} v{}", config.app.name, env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}
