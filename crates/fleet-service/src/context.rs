//! Per-request context handed to service methods.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies the request an operation runs on behalf of.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Value of the `x-request-id` header.
    pub request_id: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            request_time: Utc::now(),
        }
    }
}
