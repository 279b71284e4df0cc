//! Food plate dashboard: a REST client, the dashboard state kept in sync
//! with the backend, and a small in-memory backend to run it against.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod food;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod store;

pub use api::{FoodBackend, HttpFoodApi};
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use food::{FoodPlate, NewFoodPlate};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
