//! Lifecycle management for the in-memory backend.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Trigger → serve loop stops accepting → in-flight requests drain → exit
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) → trigger graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_signal;
