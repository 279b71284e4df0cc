//! HTTP layer of the in-memory backend, plus request correlation shared
//! with the client.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → handlers.rs (/foods resource over FoodStore)
//!     → response.rs (store errors → status + JSON body)
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestId, X_REQUEST_ID};
pub use server::HttpServer;
