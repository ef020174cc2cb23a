//! Application state for Axum handlers.

use clientele_config::ResilienceConfig;
use clientele_core::HealthCheck;
use clientele_resilience::ServiceGuard;
use clientele_service::CustomerService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Name of the breaker guarding the customer service.
pub const CUSTOMER_SERVICE: &str = "customer-service";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<dyn CustomerService>,
    pub guard: Arc<ServiceGuard>,
    pub health_checks: Arc<Vec<Arc<dyn HealthCheck>>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        customer_service: Arc<dyn CustomerService>,
        guard: ServiceGuard,
        health_checks: Vec<Arc<dyn HealthCheck>>,
    ) -> Self {
        Self {
            customer_service,
            guard: Arc::new(guard),
            health_checks: Arc::new(health_checks),
        }
    }

    /// Resolves the customer service from a Shaku module and guards it with
    /// a breaker built from `resilience`.
    pub fn from_module<M>(
        module: &M,
        resilience: &ResilienceConfig,
        health_checks: Vec<Arc<dyn HealthCheck>>,
    ) -> Self
    where
        M: Module + HasComponent<dyn CustomerService>,
    {
        Self::new(
            module.resolve(),
            ServiceGuard::from_config(CUSTOMER_SERVICE, resilience),
            health_checks,
        )
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("guard", &self.guard)
            .field("health_checks", &self.health_checks.len())
            .finish_non_exhaustive()
    }
}
