//! Extractors that deserialize and then validate with `validator`.
//!
//! Bodies that are not JSON at all are rejected with 400. JSON of the wrong
//! shape and values failing a `#[validate]` rule are rejected with 422.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use fleet_core::error::AppError;

use crate::error::ApiError;

/// Validated JSON request body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Validated query string.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(query_rejection)?;
        value.validate()?;
        Ok(Self(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    let err = match rejection {
        JsonRejection::JsonDataError(e) => AppError::validation(e.body_text()),
        other => AppError::bad_request(other.body_text()),
    };
    ApiError(err)
}

fn query_rejection(rejection: QueryRejection) -> ApiError {
    ApiError(AppError::bad_request(rejection.body_text()))
}
