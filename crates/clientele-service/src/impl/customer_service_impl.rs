//! Customer service implementation.

use crate::cache::{CacheInterface, CacheRegion, CacheSettings, RegionCache};
use crate::customer_service::CustomerService;
use crate::dto::{CustomerListResponse, CustomerRequest, CustomerResponse};
use async_trait::async_trait;
use clientele_core::{ClienteleError, ClienteleResult, Customer, CustomerId, PageRequest, ValidateExt};
use clientele_repository::CustomerRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Concrete customer service component for Shaku DI.
///
/// Cache TTLs and key prefix arrive as the `settings` component parameter.
#[derive(Component)]
#[shaku(interface = CustomerService)]
pub struct CustomerServiceComponent {
    #[shaku(inject)]
    repository: Arc<dyn CustomerRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    settings: CacheSettings,
}

impl CustomerServiceComponent {
    /// Creates a service outside of a Shaku module.
    #[must_use]
    pub fn new(
        repository: Arc<dyn CustomerRepository>,
        cache: Arc<dyn CacheInterface>,
        settings: CacheSettings,
    ) -> Self {
        Self {
            repository,
            cache,
            settings,
        }
    }

    fn customers(&self) -> RegionCache<'_> {
        RegionCache::new(self.cache.as_ref(), &self.settings, CacheRegion::Customer)
    }

    async fn find_existing(&self, id: &CustomerId) -> ClienteleResult<Customer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClienteleError::not_found("Customer", id))
    }
}

impl std::fmt::Debug for CustomerServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerServiceComponent")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CustomerService for CustomerServiceComponent {
    async fn add(&self, request: CustomerRequest) -> ClienteleResult<CustomerResponse> {
        debug!("Adding customer: {}", request.email);

        request.validate_request()?;

        if let Some(existing) = self.repository.find_by_email(&request.email).await? {
            info!("Customer already registered for {}", request.email);
            return CustomerResponse::try_from(existing);
        }

        let saved = self.repository.save(request.into_customer(None)).await?;
        let response = CustomerResponse::try_from(saved)?;

        info!("Customer created: {}", response.id);
        Ok(response)
    }

    async fn update(&self, id: &CustomerId, request: CustomerRequest) -> ClienteleResult<CustomerResponse> {
        debug!("Updating customer: {}", id);

        request.validate_request()?;
        self.find_existing(id).await?;

        if let Some(requested) = request.explicit_id() {
            if !id.matches(requested) {
                return Err(ClienteleError::conflict(format!(
                    "request id '{requested}' does not match customer '{id}'"
                )));
            }
        }

        let saved = self.repository.save(request.into_customer(Some(id.clone()))).await?;
        self.customers().put(id.as_str(), &saved).await?;

        info!("Customer updated: {}", id);
        CustomerResponse::try_from(saved)
    }

    async fn get(&self, id: &CustomerId) -> ClienteleResult<CustomerResponse> {
        debug!("Getting customer: {}", id);

        let customer = self.find_existing(id).await?;
        self.customers().put(id.as_str(), &customer).await?;

        CustomerResponse::try_from(customer)
    }

    async fn delete(&self, id: &CustomerId) -> ClienteleResult<()> {
        debug!("Deleting customer: {}", id);

        self.find_existing(id).await?;
        self.repository.delete_by_id(id).await?;
        self.customers().clear().await?;

        info!("Customer deleted: {}", id);
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> ClienteleResult<CustomerListResponse> {
        debug!("Listing customers, page: {}, size: {}", page.page, page.size);

        page.validate()?;
        let customers = self.repository.find_all(page).await?;
        CustomerListResponse::try_from(customers)
    }
}
