//! REST access to the `/foods` resource.
//!
//! # Data Flow
//! ```text
//! Dashboard operation
//!     → FoodBackend (trait seam; HttpFoodApi in production)
//!     → request ID + retry policy (GET only)
//!     → reqwest call to {base_url}/foods[/{id}]
//!     → JSON decode into FoodPlate
//! ```

pub mod client;
pub mod error;

use std::future::Future;

use crate::food::{CreateFoodPlate, FoodId, FoodPlate};

pub use client::HttpFoodApi;
pub use error::{ApiError, ApiResult};

/// The four REST calls the dashboard makes.
pub trait FoodBackend {
    /// `GET /foods`
    fn list(&self) -> impl Future<Output = ApiResult<Vec<FoodPlate>>> + Send;

    /// `POST /foods`
    fn create(&self, food: &CreateFoodPlate) -> impl Future<Output = ApiResult<FoodPlate>> + Send;

    /// `PUT /foods/{id}` with the full record.
    fn update(&self, food: &FoodPlate) -> impl Future<Output = ApiResult<FoodPlate>> + Send;

    /// `DELETE /foods/{id}`
    fn delete(&self, id: FoodId) -> impl Future<Output = ApiResult<()>> + Send;
}
