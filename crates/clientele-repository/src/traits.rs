//! Repository trait definitions.

use async_trait::async_trait;
use clientele_core::{ClienteleResult, Customer, CustomerId, Interface, Page, PageRequest};

/// Customer record store.
///
/// The store is the sole owner of durable customer state. Implementations are
/// responsible for their own concurrency control.
#[async_trait]
pub trait CustomerRepository: Interface + Send + Sync {
    /// Finds a customer by exact email.
    async fn find_by_email(&self, email: &str) -> ClienteleResult<Option<Customer>>;

    /// Finds a customer by ID.
    async fn find_by_id(&self, id: &CustomerId) -> ClienteleResult<Option<Customer>>;

    /// Inserts the customer when its id is absent or blank, assigning a new
    /// id. Otherwise overwrites the record stored at that id.
    async fn save(&self, customer: Customer) -> ClienteleResult<Customer>;

    /// Deletes a customer by ID. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: &CustomerId) -> ClienteleResult<()>;

    /// Finds a page of customers ordered by id ascending.
    async fn find_all(&self, page: PageRequest) -> ClienteleResult<Page<Customer>>;

    /// Counts all customers.
    async fn count(&self) -> ClienteleResult<u64>;
}
