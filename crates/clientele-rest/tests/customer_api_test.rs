//! End-to-end tests of the HTTP surface over in-memory backends.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use clientele_config::ServerConfig;
use clientele_core::{
    ClienteleError, ClienteleResult, CustomerId, HealthCheck, HealthStatus, PageRequest,
};
use clientele_repository::InMemoryCustomerRepository;
use clientele_resilience::{CircuitBreakerConfig, ServiceGuard};
use clientele_rest::{create_router, AppState, CUSTOMER_SERVICE};
use clientele_service::{
    CacheHealthCheck, CacheSettings, CustomerListResponse, CustomerRequest, CustomerResponse,
    CustomerService, CustomerServiceComponent, InMemoryCacheService,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn guard() -> ServiceGuard {
    ServiceGuard::new(
        CUSTOMER_SERVICE,
        CircuitBreakerConfig {
            failure_threshold: 2,
            success_threshold: 1,
            open_timeout: Duration::from_secs(60),
            half_open_requests: 1,
        },
        Duration::from_secs(5),
    )
}

fn app_with(service: Arc<dyn CustomerService>, health_checks: Vec<Arc<dyn HealthCheck>>) -> Router {
    create_router(
        AppState::new(service, guard(), health_checks),
        &ServerConfig::default(),
    )
}

fn app() -> Router {
    let cache = Arc::new(InMemoryCacheService::new());
    let service = CustomerServiceComponent::new(
        Arc::new(InMemoryCustomerRepository::new()),
        cache.clone(),
        CacheSettings::default(),
    );
    app_with(Arc::new(service), vec![Arc::new(CacheHealthCheck::new(cache))])
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn customer(email: &str) -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": email,
        "dateOfBirth": "1815-12-10",
        "phoneNumber": "555-0100",
        "itinOrSsn": "123-45-6789"
    })
}

async fn create(app: &Router, email: &str) -> String {
    let (status, body) = send(app, Method::POST, "/customer", Some(customer(email))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["content"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn add_returns_created_envelope() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/customer", Some(customer("ada@example.com"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["content"]["email"], "ada@example.com");
    assert_eq!(body["content"]["itinOrSsn"], "123-45-6789");
    assert!(body["content"]["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn add_same_email_is_idempotent() {
    let app = app();
    let first = create(&app, "ada@example.com").await;

    let mut again = customer("ada@example.com");
    again["firstName"] = json!("Augusta");
    let (status, body) = send(&app, Method::POST, "/customer", Some(again)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["content"]["id"], first.as_str());
    assert_eq!(body["content"]["firstName"], "Ada");
}

#[tokio::test]
async fn add_missing_email_is_bad_request() {
    let app = app();
    let mut body = customer("x");
    body.as_object_mut().unwrap().remove("email");

    let (status, body) = send(&app, Method::POST, "/customer", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "content": "email is required", "statusCode": 400 }));
}

#[tokio::test]
async fn add_malformed_email_is_bad_request() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/customer", Some(customer("nope"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["content"], "required correct email");
}

#[tokio::test]
async fn add_malformed_json_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/customer")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["statusCode"], 400);
}

#[tokio::test]
async fn get_existing_and_missing() {
    let app = app();
    let id = create(&app, "ada@example.com").await;

    let (status, body) = send(&app, Method::GET, &format!("/customer/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["content"]["id"], id.as_str());

    let (status, body) = send(&app, Method::GET, "/customer/does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "content": "customer not found", "statusCode": 404 }));
}

#[tokio::test]
async fn update_replaces_fields() {
    let app = app();
    let id = create(&app, "ada@example.com").await;

    let mut change = customer("ada@analytical.org");
    change["id"] = json!(id.to_uppercase());
    let (status, body) = send(&app, Method::PUT, &format!("/customer/{id}"), Some(change)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"]["id"], id.as_str());
    assert_eq!(body["content"]["email"], "ada@analytical.org");
}

#[tokio::test]
async fn update_with_other_id_conflicts() {
    let app = app();
    let id = create(&app, "ada@example.com").await;

    let mut change = customer("ada@analytical.org");
    change["id"] = json!("somebody-else");
    change["firstName"] = json!("Augusta");
    let (status, body) = send(&app, Method::PUT, &format!("/customer/{id}"), Some(change)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({ "content": "customer with same details already exists", "statusCode": 409 })
    );

    let (status, body) = send(&app, Method::GET, &format!("/customer/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"]["firstName"], "Ada");
    assert_eq!(body["content"]["email"], "ada@example.com");
}

#[tokio::test]
async fn add_then_get_returns_submitted_fields() {
    let app = app();
    let input = customer("ada@example.com");
    let id = create(&app, "ada@example.com").await;

    let (status, body) = send(&app, Method::GET, &format!("/customer/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    for field in ["firstName", "lastName", "email", "dateOfBirth", "phoneNumber", "itinOrSsn"] {
        assert_eq!(body["content"][field], input[field], "field {field}");
    }
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/customer/missing",
        Some(customer("ada@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_invalid_body_is_bad_request() {
    let app = app();
    let id = create(&app, "ada@example.com").await;

    let mut change = customer("ada@example.com");
    change["phoneNumber"] = json!("");
    let (status, body) = send(&app, Method::PUT, &format!("/customer/{id}"), Some(change)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["content"], "phoneNumber is required");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = app();
    let id = create(&app, "ada@example.com").await;

    let (status, body) = send(&app, Method::DELETE, &format!("/customer/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "content": "Customer is deleted", "statusCode": 200 }));

    let (status, _) = send(&app, Method::GET, &format!("/customer/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &format!("/customer/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_paged_envelope() {
    let app = app();
    for i in 0..3 {
        create(&app, &format!("c{i}@example.com")).await;
    }

    let (status, body) = send(&app, Method::GET, "/customer/all?page=0&size=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["page"], 0);
    assert_eq!(body["size"], 2);
    assert_eq!(body["totalElements"], 3);
    assert_eq!(body["totalPages"], 2);

    let (_, body) = send(&app, Method::GET, "/customer/all?page=1&size=2", None).await;
    assert_eq!(body["content"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn list_uses_default_page() {
    let app = app();
    create(&app, "a@example.com").await;

    let (status, body) = send(&app, Method::GET, "/customer/all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["size"], PageRequest::DEFAULT_SIZE);
    assert_eq!(body["totalElements"], 1);
}

#[tokio::test]
async fn list_rejects_bad_paging() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/customer/all?size=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);

    let (status, _) = send(&app, Method::GET, "/customer/all?page=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Service whose every call fails with an infrastructure error.
struct BrokenService;

#[async_trait]
impl CustomerService for BrokenService {
    async fn add(&self, _request: CustomerRequest) -> ClienteleResult<CustomerResponse> {
        Err(ClienteleError::Database("connection refused".to_string()))
    }

    async fn update(&self, _id: &CustomerId, _request: CustomerRequest) -> ClienteleResult<CustomerResponse> {
        Err(ClienteleError::Database("connection refused".to_string()))
    }

    async fn get(&self, _id: &CustomerId) -> ClienteleResult<CustomerResponse> {
        Err(ClienteleError::cache("redis unavailable"))
    }

    async fn delete(&self, _id: &CustomerId) -> ClienteleResult<()> {
        Err(ClienteleError::Database("connection refused".to_string()))
    }

    async fn list(&self, _page: PageRequest) -> ClienteleResult<CustomerListResponse> {
        Err(ClienteleError::Database("connection refused".to_string()))
    }
}

#[tokio::test]
async fn unexpected_failures_fall_back_to_unavailable() {
    let app = app_with(Arc::new(BrokenService), Vec::new());
    let expected = json!({
        "content": "customer service is unavailable, please try again later",
        "statusCode": 503
    });

    let (status, body) = send(&app, Method::GET, "/customer/c-1", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, expected);

    let (status, _) = send(&app, Method::POST, "/customer", Some(customer("a@example.com"))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // breaker is open now; requests are rejected without reaching the service
    let (status, body) = send(&app, Method::DELETE, "/customer/c-1", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn domain_errors_do_not_open_the_breaker() {
    let app = app();
    for _ in 0..5 {
        let (status, _) = send(&app, Method::GET, "/customer/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    create(&app, "still-works@example.com").await;
}

struct DownCheck;

#[async_trait]
impl HealthCheck for DownCheck {
    fn name(&self) -> &str {
        "database"
    }

    async fn check(&self) -> HealthStatus {
        HealthStatus::Unhealthy("connection refused".to_string())
    }
}

#[tokio::test]
async fn health_endpoints() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _) = send(&app, Method::GET, "/live", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["cache"]["status"], "healthy");
}

#[tokio::test]
async fn readiness_fails_when_a_dependency_is_down() {
    let app = app_with(Arc::new(BrokenService), vec![Arc::new(DownCheck)]);

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["database"]["detail"], "connection refused");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/customer")
        .header(header::ORIGIN, "http://localhost:4200")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = app();
    let request = Request::builder()
        .uri("/live")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
