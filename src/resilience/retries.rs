//! Retry logic.
//!
//! # Responsibilities
//! - Determine if a request is retryable (idempotent methods only)
//! - Hand out the backoff delay for the next attempt
//!
//! # Design Decisions
//! - Never retry POST/PUT/DELETE/PATCH from the dashboard: a replayed
//!   create would duplicate a plate
//! - Connection errors always retryable; 502/503/504 retryable

use reqwest::{Method, StatusCode};

use crate::config::RetryConfig;
use crate::resilience::backoff::{backoff_for, Backoff};

/// Whether a failed attempt may be repeated.
pub fn is_retryable(method: &Method, status: Option<StatusCode>, connection_error: bool) -> bool {
    if !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS) {
        return false;
    }
    if connection_error {
        return true;
    }
    matches!(
        status,
        Some(StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT)
    )
}

/// Retry settings resolved for a single request.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryPolicy {
    /// Policy for `method`: non-idempotent methods get a single attempt.
    pub fn for_method(config: &RetryConfig, method: &Method) -> Self {
        let max_attempts = if config.enabled && is_retryable(method, None, true) {
            config.max_attempts.max(1)
        } else {
            1
        };
        Self {
            max_attempts,
            base_delay_ms: config.base_delay_ms,
            max_delay_ms: config.max_delay_ms,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_delay_ms(&self) -> u64 {
        self.base_delay_ms
    }

    pub fn max_delay_ms(&self) -> u64 {
        self.max_delay_ms
    }

    /// Backoff before the next attempt, or `None` when attempts are exhausted.
    pub fn next_delay(&self, attempts_made: u32) -> Option<Backoff> {
        if attempts_made >= self.max_attempts {
            return None;
        }
        Some(backoff_for(self, attempts_made))
    }
}
