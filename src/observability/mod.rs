//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Client, dashboard and backend produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//! ```
//!
//! # Design Decisions
//! - Structured fields (method, path, request_id, food_id) on every event
//! - Request ID generated by the client and echoed by the backend
//! - Metrics go through the `metrics` facade; installing a recorder is up to the host

pub mod logging;
pub mod metrics;
