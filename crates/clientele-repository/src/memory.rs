//! In-memory record store.

use crate::traits::CustomerRepository;
use async_trait::async_trait;
use clientele_core::{ClienteleResult, Customer, CustomerId, Page, PageRequest};
use parking_lot::RwLock;
use shaku::Component;
use std::collections::BTreeMap;
use tracing::debug;

/// Customer store held in process memory, ordered by id.
#[derive(Component, Default)]
#[shaku(interface = CustomerRepository)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<BTreeMap<CustomerId, Customer>>,
}

impl InMemoryCustomerRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with persisted customers. Customers without an
    /// id are skipped.
    #[must_use]
    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let map = customers
            .into_iter()
            .filter_map(|c| c.id.clone().map(|id| (id, c)))
            .collect();
        Self {
            customers: RwLock::new(map),
        }
    }

    /// Number of stored customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.read().len()
    }

    /// Returns true when no customers are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.read().is_empty()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_email(&self, email: &str) -> ClienteleResult<Option<Customer>> {
        Ok(self
            .customers
            .read()
            .values()
            .find(|c| c.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &CustomerId) -> ClienteleResult<Option<Customer>> {
        Ok(self.customers.read().get(id).cloned())
    }

    async fn save(&self, customer: Customer) -> ClienteleResult<Customer> {
        let id = match &customer.id {
            Some(id) if !id.is_blank() => id.clone(),
            _ => CustomerId::generate(),
        };
        debug!("Saving customer: {}", id);

        let saved = customer.with_id(id.clone());
        self.customers.write().insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &CustomerId) -> ClienteleResult<()> {
        self.customers.write().remove(id);
        Ok(())
    }

    async fn find_all(&self, page: PageRequest) -> ClienteleResult<Page<Customer>> {
        let customers = self.customers.read();
        let total = customers.len() as u64;
        let items = customers
            .values()
            .skip(page.offset())
            .take(page.limit())
            .cloned()
            .collect();
        Ok(Page::new(items, page.page, page.size, total))
    }

    async fn count(&self) -> ClienteleResult<u64> {
        Ok(self.customers.read().len() as u64)
    }
}
