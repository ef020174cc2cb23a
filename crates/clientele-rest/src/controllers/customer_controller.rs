//! Customer controller.

use crate::{
    extractors::{PaginationQuery, ValidatedJson},
    responses::{created, ok, ApiResult, AppError, PagedEnvelope, SUCCESS_DELETE},
    state::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{get, post},
    Router,
};
use clientele_core::{ClienteleError, CustomerId, PageRequest};
use clientele_service::{CustomerRequest, CustomerResponse};
use tracing::{error, info};

/// Creates the customer router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_customer))
        .route("/all", get(list_customers))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

/// Logs unexpected failures before they are turned into the availability
/// fallback.
fn reject(err: ClienteleError, subject: &str) -> AppError {
    if err.is_unexpected() {
        error!(code = err.error_code(), "Could not process customer, {}, error: {}", subject, err);
    } else {
        info!("Customer request rejected, {}: {}", subject, err);
    }
    AppError(err)
}

/// Add a customer. Repeating an email returns the existing record.
async fn add_customer(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CustomerRequest>,
) -> ApiResult<CustomerResponse> {
    info!("Add customer api initiated");

    let subject = format!("email: {}", request.email);
    let response = state
        .guard
        .run(|| state.customer_service.add(request))
        .await
        .map_err(|e| reject(e, &subject))?;

    info!("Add customer api completed: {}", response.id);
    created(response)
}

/// Replace a customer's details.
async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<CustomerRequest>,
) -> ApiResult<CustomerResponse> {
    info!("Update customer api initiated: {}", id);

    let subject = format!("id: {id}");
    let id = CustomerId::new(id);
    let response = state
        .guard
        .run(|| state.customer_service.update(&id, request))
        .await
        .map_err(|e| reject(e, &subject))?;

    info!("Update customer api completed: {}", id);
    ok(response)
}

/// Get a customer by id.
async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<CustomerResponse> {
    info!("Get customer initiated: {}", id);

    let subject = format!("id: {id}");
    let id = CustomerId::new(id);
    let response = state
        .guard
        .run(|| state.customer_service.get(&id))
        .await
        .map_err(|e| reject(e, &subject))?;

    info!("Get customer completed: {}", id);
    ok(response)
}

/// Delete a customer.
async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<&'static str> {
    info!("Delete customer initiated: {}", id);

    let subject = format!("id: {id}");
    let id = CustomerId::new(id);
    state
        .guard
        .run(|| state.customer_service.delete(&id))
        .await
        .map_err(|e| reject(e, &subject))?;

    info!("Delete customer completed: {}", id);
    ok(SUCCESS_DELETE)
}

/// List customers page by page.
async fn list_customers(
    State(state): State<AppState>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<PagedEnvelope<CustomerResponse>, AppError> {
    let Query(pagination) =
        query.map_err(|rejection| AppError(ClienteleError::validation(rejection.body_text())))?;
    let page = PageRequest::from(pagination);
    info!("Search customer with pagination initiated: page {}, size {}", page.page, page.size);

    let subject = format!("page: {}, size: {}", page.page, page.size);
    let list = state
        .guard
        .run(|| state.customer_service.list(page))
        .await
        .map_err(|e| reject(e, &subject))?;

    info!("Search customer with pagination completed");
    Ok(PagedEnvelope::from(list))
}
