//! Customer service trait definition.

use crate::dto::{CustomerListResponse, CustomerRequest, CustomerResponse};
use async_trait::async_trait;
use clientele_core::{ClienteleResult, CustomerId, Interface, PageRequest};

/// Customer service trait.
///
/// Orchestrates the record store and the customer cache region. Only
/// `update` and `get` write the cache and only `delete` invalidates it;
/// nothing reads it.
#[async_trait]
pub trait CustomerService: Interface + Send + Sync {
    /// Creates a customer, or returns the one already registered under the
    /// same email unchanged.
    async fn add(&self, request: CustomerRequest) -> ClienteleResult<CustomerResponse>;

    /// Replaces the fields of the customer at `id` and refreshes its cache
    /// entry.
    async fn update(&self, id: &CustomerId, request: CustomerRequest) -> ClienteleResult<CustomerResponse>;

    /// Gets a customer from the store and republishes it to the cache.
    async fn get(&self, id: &CustomerId) -> ClienteleResult<CustomerResponse>;

    /// Deletes a customer and clears the customer cache region.
    async fn delete(&self, id: &CustomerId) -> ClienteleResult<()>;

    /// Lists customers with pagination, straight from the store.
    async fn list(&self, page: PageRequest) -> ClienteleResult<CustomerListResponse>;
}
