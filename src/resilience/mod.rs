//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Client call to backend:
//!     → reqwest timeouts (connect/request, from ApiConfig)
//!     → On failure: retries.rs (check if retryable, retry with backoff.rs delay)
//! ```
//!
//! # Design Decisions
//! - Every call has a deadline
//! - Retries only for idempotent requests (GET, HEAD, etc.)

pub mod backoff;
pub mod retries;

pub use backoff::Backoff;
pub use retries::{is_retryable, RetryPolicy};
