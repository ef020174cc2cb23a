//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clientele_core::ClienteleError;
use clientele_service::{CustomerListResponse, CustomerResponse};
use serde::{Deserialize, Serialize};

/// Body of a missing-customer response.
pub const NOT_FOUND: &str = "customer not found";
/// Body of an identity-conflict response.
pub const RESOURCE_ALREADY_EXISTS: &str = "customer with same details already exists";
/// Body of a successful delete.
pub const SUCCESS_DELETE: &str = "Customer is deleted";
/// Body of the availability fallback.
pub const SERVICE_UNAVAILABLE: &str = "customer service is unavailable, please try again later";

/// Standard response envelope: a payload or message plus the status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub content: T,
    pub status_code: u16,
}

impl<T> Envelope<T> {
    /// Wraps `content` for `status`.
    pub fn new(content: T, status: StatusCode) -> Self {
        Self {
            content,
            status_code: status.as_u16(),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Envelope of a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedEnvelope<T> {
    pub content: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<CustomerListResponse> for PagedEnvelope<CustomerResponse> {
    fn from(list: CustomerListResponse) -> Self {
        Self {
            content: list.customers,
            page: list.page,
            size: list.size,
            total_elements: list.total_elements,
            total_pages: list.total_pages,
        }
    }
}

impl<T: Serialize> IntoResponse for PagedEnvelope<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Application error type for Axum.
///
/// Domain errors keep their own status; every other error collapses into
/// the availability fallback.
#[derive(Debug)]
pub struct AppError(pub ClienteleError);

impl AppError {
    /// Status and client-facing message for this error.
    #[must_use]
    pub fn status_and_message(&self) -> (StatusCode, String) {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::SERVICE_UNAVAILABLE);
        let message = match &self.0 {
            ClienteleError::NotFound { .. } => NOT_FOUND.to_string(),
            ClienteleError::Validation(msg) => msg.clone(),
            ClienteleError::Conflict(_) => RESOURCE_ALREADY_EXISTS.to_string(),
            _ => SERVICE_UNAVAILABLE.to_string(),
        };
        (status, message)
    }
}

impl From<ClienteleError> for AppError {
    fn from(err: ClienteleError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        Envelope::new(message, status).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Envelope<T>, AppError>;

/// 200 envelope.
pub fn ok<T: Serialize>(content: T) -> ApiResult<T> {
    Ok(Envelope::new(content, StatusCode::OK))
}

/// 201 envelope.
pub fn created<T: Serialize>(content: T) -> ApiResult<T> {
    Ok(Envelope::new(content, StatusCode::CREATED))
}
