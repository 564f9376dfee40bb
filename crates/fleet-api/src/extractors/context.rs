//! `CurrentRequest` extractor: the request id assigned by the middleware
//! stack, wrapped in a service [`RequestContext`].

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_http::request_id::RequestId;

use fleet_service::RequestContext;

use crate::middleware::request_id::REQUEST_ID_HEADER;

/// Context of the request being handled.
#[derive(Debug, Clone)]
pub struct CurrentRequest(pub RequestContext);

impl std::ops::Deref for CurrentRequest {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .extensions
            .get::<RequestId>()
            .and_then(|id| id.header_value().to_str().ok())
            .or_else(|| {
                parts
                    .headers
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
            })
            .unwrap_or("n/a")
            .to_string();

        Ok(Self(RequestContext::new(request_id)))
    }
}
