//! `/foods` resource handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::food::{FoodId, FoodPlate, NewFoodPlate};
use crate::store::{FoodStore, StoreError};

/// `POST /foods` body. A missing `available` means available.
#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    #[serde(flatten)]
    pub form: NewFoodPlate,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// `PUT /foods/{id}` body. Any `id` in the body is ignored in favour of the path.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    #[serde(flatten)]
    pub form: NewFoodPlate,
    pub available: Option<bool>,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub foods: usize,
}

pub async fn get_health(State(store): State<FoodStore>) -> Json<HealthStatus> {
    Json(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        foods: store.len(),
    })
}

pub async fn list_foods(State(store): State<FoodStore>) -> Json<Vec<FoodPlate>> {
    Json(store.list())
}

pub async fn get_food(
    State(store): State<FoodStore>,
    Path(id): Path<FoodId>,
) -> Result<Json<FoodPlate>, StoreError> {
    store.get(id).map(Json)
}

pub async fn create_food(
    State(store): State<FoodStore>,
    Json(request): Json<CreateRequest>,
) -> Result<(StatusCode, Json<FoodPlate>), StoreError> {
    let food = store.create(request.form, request.available).inspect_err(|e| {
        tracing::error!(error = %e, "Food plate not created");
    })?;
    tracing::info!(food_id = food.id, name = %food.name, "Food plate created");
    Ok((StatusCode::CREATED, Json(food)))
}

pub async fn update_food(
    State(store): State<FoodStore>,
    Path(id): Path<FoodId>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<FoodPlate>, StoreError> {
    let food = store.replace(id, request.form, request.available)?;
    tracing::info!(food_id = id, available = food.available, "Food plate replaced");
    Ok(Json(food))
}

pub async fn delete_food(
    State(store): State<FoodStore>,
    Path(id): Path<FoodId>,
) -> Result<StatusCode, StoreError> {
    store.delete(id)?;
    tracing::info!(food_id = id, "Food plate deleted");
    Ok(StatusCode::NO_CONTENT)
}
