//! Customer DTOs.

use clientele_core::rules::{email_if_present, not_blank};
use clientele_core::{ClienteleError, ClienteleResult, Customer, CustomerId, Page};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create or update payload.
///
/// `id` is optional: ignored on create, checked against the path id on
/// update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[validate(custom(function = "not_blank", message = "firstName is required"))]
    pub first_name: String,

    #[validate(custom(function = "not_blank", message = "lastName is required"))]
    pub last_name: String,

    #[validate(
        custom(function = "not_blank", message = "email is required"),
        custom(function = "email_if_present", message = "required correct email")
    )]
    pub email: String,

    #[validate(custom(function = "not_blank", message = "birth date is required"))]
    pub date_of_birth: String,

    #[validate(custom(function = "not_blank", message = "phoneNumber is required"))]
    pub phone_number: String,

    #[validate(custom(function = "not_blank", message = "itin/ssn is required"))]
    pub itin_or_ssn: String,
}

impl CustomerRequest {
    /// The request id when it carries a value.
    #[must_use]
    pub fn explicit_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Converts the payload into an entity stored at `id`, or a new entity
    /// when `id` is `None`.
    #[must_use]
    pub fn into_customer(self, id: Option<CustomerId>) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number,
            itin_or_ssn: self.itin_or_ssn,
        }
    }
}

/// Customer as returned to callers. Always carries an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub itin_or_ssn: String,
}

impl TryFrom<Customer> for CustomerResponse {
    type Error = ClienteleError;

    fn try_from(customer: Customer) -> ClienteleResult<Self> {
        let id = customer
            .id
            .ok_or_else(|| ClienteleError::internal("stored customer has no id"))?;
        Ok(Self {
            id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            date_of_birth: customer.date_of_birth,
            phone_number: customer.phone_number,
            itin_or_ssn: customer.itin_or_ssn,
        })
    }
}

/// Customer list response with pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListResponse {
    pub customers: Vec<CustomerResponse>,
    pub page: usize,
    pub size: usize,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl TryFrom<Page<Customer>> for CustomerListResponse {
    type Error = ClienteleError;

    fn try_from(page: Page<Customer>) -> ClienteleResult<Self> {
        let page = page.try_map(CustomerResponse::try_from)?;
        Ok(Self {
            page: page.info.page,
            size: page.info.size,
            total_elements: page.info.total_elements,
            total_pages: page.info.total_pages,
            customers: page.content,
        })
    }
}
