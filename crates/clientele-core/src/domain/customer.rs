//! Customer entity.

use crate::CustomerId;
use serde::{Deserialize, Serialize};

/// A customer record.
///
/// `id` is `None` until the store assigns one on first insert and is never
/// reassigned afterwards. All other fields are replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Store-assigned identifier.
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    /// Natural key used to deduplicate creation requests.
    pub email: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub itin_or_ssn: String,
}

impl Customer {
    /// Returns a builder for a customer without an id.
    #[must_use]
    pub fn builder() -> CustomerBuilder {
        CustomerBuilder::default()
    }

    /// Returns a copy of this record pinned to `id`.
    #[must_use]
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns true once the store has assigned an id.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.as_ref().is_some_and(|id| !id.is_blank())
    }

    /// Returns the full name of the customer.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Builder for creating `Customer` instances.
#[derive(Debug, Default)]
pub struct CustomerBuilder {
    id: Option<CustomerId>,
    first_name: String,
    last_name: String,
    email: String,
    date_of_birth: String,
    phone_number: String,
    itin_or_ssn: String,
}

impl CustomerBuilder {
    /// Sets the id.
    #[must_use]
    pub fn id(mut self, id: impl Into<CustomerId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the first name.
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the date of birth.
    #[must_use]
    pub fn date_of_birth(mut self, date_of_birth: impl Into<String>) -> Self {
        self.date_of_birth = date_of_birth.into();
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Sets the ITIN or SSN.
    #[must_use]
    pub fn itin_or_ssn(mut self, itin_or_ssn: impl Into<String>) -> Self {
        self.itin_or_ssn = itin_or_ssn.into();
        self
    }

    /// Builds the customer.
    #[must_use]
    pub fn build(self) -> Customer {
        Customer {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number,
            itin_or_ssn: self.itin_or_ssn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        Customer::builder()
            .first_name("Ada")
            .last_name("Lovelace")
            .email("ada@example.com")
            .date_of_birth("1815-12-10")
            .phone_number("555-0100")
            .itin_or_ssn("123-45-6789")
            .build()
    }

    #[test]
    fn test_new_customer_is_not_persisted() {
        let customer = sample();
        assert!(customer.id.is_none());
        assert!(!customer.is_persisted());
        assert_eq!(customer.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_with_id() {
        let id = CustomerId::generate();
        let customer = sample().with_id(id.clone());
        assert_eq!(customer.id, Some(id));
        assert!(customer.is_persisted());
    }

    #[test]
    fn test_blank_id_is_not_persisted() {
        let customer = sample().with_id(CustomerId::new("  "));
        assert!(!customer.is_persisted());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample().with_id(CustomerId::new("c-1"))).unwrap();
        assert_eq!(json["id"], "c-1");
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["itinOrSsn"], "123-45-6789");

        let back: Customer = serde_json::from_value(json).unwrap();
        assert_eq!(back.email, "ada@example.com");
    }
}
