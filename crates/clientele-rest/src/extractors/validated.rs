//! Validated JSON extractor for automatic request validation.
//!
//! `ValidatedJson<T>` deserializes the body and runs the `validator` rules
//! of `T`. Both failures are answered with a 400 envelope whose content is
//! the problem description, so the service is never invoked with a body it
//! would reject anyway.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use clientele_core::{ClienteleError, ValidateExt};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that validates the deserialized value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn json_rejection(rejection: &JsonRejection) -> AppError {
    AppError(ClienteleError::validation(rejection.body_text()))
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| json_rejection(&rejection))?;

        value.validate_request()?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
    }

    fn request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let ValidatedJson(payload) = ValidatedJson::<Payload>::from_request(request(r#"{"name":"a"}"#), &())
            .await
            .unwrap();
        assert_eq!(payload.name, "a");
    }

    #[tokio::test]
    async fn test_rule_violation_is_bad_request() {
        let err = ValidatedJson::<Payload>::from_request(request(r#"{"name":""}"#), &())
            .await
            .unwrap_err();
        assert_eq!(
            err.status_and_message(),
            (StatusCode::BAD_REQUEST, "name is required".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let err = ValidatedJson::<Payload>::from_request(request("{"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_and_message().0, StatusCode::BAD_REQUEST);
    }
}
