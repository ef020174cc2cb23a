//! Dependency injection module using Shaku.
//!
//! `ClienteleModule` holds the whole stack of a single process: the MySQL
//! pool and record store, the cache backend and the customer service.

use clientele_config::CacheConfig;
use clientele_core::{module, HasComponent};
use clientele_repository::{
    CustomerRepository, DatabasePool, DatabasePoolInterface, DatabasePoolParameters,
    MySqlCustomerRepository,
};
use clientele_service::{
    CacheInterface, CacheSettings, CustomerService, CustomerServiceComponent,
    CustomerServiceComponentParameters, InMemoryCacheService, RedisCacheService,
    RedisCacheServiceParameters,
};
use deadpool_redis::Pool;
use std::sync::Arc;
use tracing::info;

module! {
    pub ClienteleModule {
        components = [
            DatabasePool,
            MySqlCustomerRepository,
            RedisCacheService,
            CustomerServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the module over an established database pool.
///
/// Without a Redis pool the cache component is replaced by the in-memory
/// backend so the service keeps its cache semantics within the process.
pub fn build_module(
    db_pool: &DatabasePool,
    cache_pool: Option<Pool>,
    cache_config: &CacheConfig,
) -> ClienteleModule {
    let builder = ClienteleModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<CustomerServiceComponent>(
            CustomerServiceComponentParameters {
                settings: CacheSettings::from(cache_config),
            },
        );

    match cache_pool {
        Some(pool) => builder
            .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
                pool: Some(pool),
            })
            .build(),
        None => {
            info!("Redis disabled, using in-memory cache");
            builder
                .with_component_override::<dyn CacheInterface>(Box::new(InMemoryCacheService::new()))
                .build()
        }
    }
}

/// Typed accessors over the module.
pub trait ServiceResolver {
    /// Resolves the customer service.
    fn customer_service(&self) -> Arc<dyn CustomerService>;

    /// Resolves the record store.
    fn customer_repository(&self) -> Arc<dyn CustomerRepository>;

    /// Resolves the cache backend.
    fn cache(&self) -> Arc<dyn CacheInterface>;

    /// Resolves the database pool.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl ServiceResolver for ClienteleModule {
    fn customer_service(&self) -> Arc<dyn CustomerService> {
        self.resolve()
    }

    fn customer_repository(&self) -> Arc<dyn CustomerRepository> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }

    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
