use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

use crate::storage::error::ErrorBody;

/// `axum::Json` with the rejection rewritten to `422` plus a
/// `{"detail": ...}` body, matching the validation contract of the API.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(validation_failure(rejection.body_text())),
        }
    }
}

/// `axum::extract::Query` with the same `422` rejection contract.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(validation_failure(rejection.body_text())),
        }
    }
}

fn validation_failure(detail: String) -> Response {
    tracing::debug!("Validation failed: {}", detail);
    (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorBody { detail })).into_response()
}
