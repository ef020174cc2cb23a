//! MySQL customer repository implementation.

use crate::{traits::CustomerRepository, DatabasePoolInterface};
use async_trait::async_trait;
use clientele_core::{ClienteleError, ClienteleResult, Customer, CustomerId, Page, PageRequest};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_COLUMNS: &str =
    "SELECT id, first_name, last_name, email, date_of_birth, phone_number, itin_or_ssn FROM customers";

/// MySQL customer repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = CustomerRepository)]
pub struct MySqlCustomerRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlCustomerRepository {
    /// Creates a new MySQL customer repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn insert(&self, customer: Customer) -> ClienteleResult<Customer> {
        let id = CustomerId::generate();
        debug!("Inserting customer {} with email: {}", id, customer.email);

        sqlx::query(
            r"
            INSERT INTO customers (id, first_name, last_name, email, date_of_birth,
                                   phone_number, itin_or_ssn)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(id.as_str())
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(&customer.date_of_birth)
        .bind(&customer.phone_number)
        .bind(&customer.itin_or_ssn)
        .execute(self.pool.inner())
        .await?;

        Ok(customer.with_id(id))
    }

    async fn upsert(&self, id: CustomerId, customer: Customer) -> ClienteleResult<Customer> {
        debug!("Overwriting customer: {}", id);

        sqlx::query(
            r"
            INSERT INTO customers (id, first_name, last_name, email, date_of_birth,
                                   phone_number, itin_or_ssn)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                first_name = VALUES(first_name),
                last_name = VALUES(last_name),
                email = VALUES(email),
                date_of_birth = VALUES(date_of_birth),
                phone_number = VALUES(phone_number),
                itin_or_ssn = VALUES(itin_or_ssn)
            ",
        )
        .bind(id.as_str())
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(&customer.date_of_birth)
        .bind(&customer.phone_number)
        .bind(&customer.itin_or_ssn)
        .execute(self.pool.inner())
        .await?;

        // MySQL has no RETURNING, read back what is now stored
        self.find_by_id(&id)
            .await?
            .ok_or_else(|| ClienteleError::internal(format!("customer {id} vanished after save")))
    }
}

/// Database row representation of a customer.
#[derive(Debug, FromRow)]
struct CustomerRow {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    date_of_birth: String,
    phone_number: String,
    itin_or_ssn: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: Some(CustomerId::new(row.id)),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            date_of_birth: row.date_of_birth,
            phone_number: row.phone_number,
            itin_or_ssn: row.itin_or_ssn,
        }
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_by_email(&self, email: &str) -> ClienteleResult<Option<Customer>> {
        debug!("Finding customer by email: {}", email);

        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "{SELECT_COLUMNS} WHERE email = ? ORDER BY id ASC LIMIT 1"
        ))
        .bind(email)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn find_by_id(&self, id: &CustomerId) -> ClienteleResult<Option<Customer>> {
        debug!("Finding customer by id: {}", id);

        let row = sqlx::query_as::<_, CustomerRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.as_str())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(Customer::from))
    }

    async fn save(&self, customer: Customer) -> ClienteleResult<Customer> {
        match customer.id.clone() {
            Some(id) if !id.is_blank() => self.upsert(id, customer).await,
            _ => self.insert(customer).await,
        }
    }

    async fn delete_by_id(&self, id: &CustomerId) -> ClienteleResult<()> {
        debug!("Deleting customer: {}", id);

        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id.as_str())
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }

    async fn find_all(&self, page: PageRequest) -> ClienteleResult<Page<Customer>> {
        debug!("Finding all customers, page: {}, size: {}", page.page, page.size);

        let total = self.count().await?;

        let rows = sqlx::query_as::<_, CustomerRow>(&format!(
            "{SELECT_COLUMNS} ORDER BY id ASC LIMIT ? OFFSET ?"
        ))
        .bind(page.limit() as u64)
        .bind(page.offset() as u64)
        .fetch_all(self.pool.inner())
        .await?;

        let customers = rows.into_iter().map(Customer::from).collect();
        Ok(Page::new(customers, page.page, page.size, total))
    }

    async fn count(&self) -> ClienteleResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}
