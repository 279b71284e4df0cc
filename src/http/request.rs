//! Request correlation.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) per client call
//! - Share the header name between the client and the backend
//!
//! # Design Decisions
//! - The client sets the ID; the backend keeps an incoming ID and only
//!   generates one when it is missing, then echoes it on the response

use std::fmt;

use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// A per-request correlation ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
