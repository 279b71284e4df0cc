//! Metrics collection.
//!
//! # Metrics
//! - `food_api_requests_total` (counter): REST calls by method, status
//! - `food_api_request_duration_seconds` (histogram): REST call latency
//! - `food_store_size` (gauge): plates held by the in-memory backend
//!
//! # Design Decisions
//! - Status `0` stands for a transport failure (no response)
//! - No exporter is installed here; without a recorder these are no-ops

use std::time::Instant;

/// Record one REST call made by the client.
pub fn record_api_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "food_api_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("food_api_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record the current backend store size.
pub fn record_store_size(size: usize) {
    metrics::gauge!("food_store_size").set(size as f64);
}
