//! Dashboard state and the operations behind its buttons.
//!
//! # Data Flow
//! ```text
//! user action
//!     → Dashboard operation (add / update / delete / availability)
//!     → FoodBackend call
//!     → on success: reconcile `foods` with the server's answer
//!     → on failure: state untouched, error returned to the caller
//! ```
//!
//! # Design Decisions
//! - The server's response body is authoritative for a plate
//! - Reconciliation is by `id`; list order is server order, new plates appended

pub mod view;

use thiserror::Error;

use crate::api::{ApiError, FoodBackend};
use crate::food::{CreateFoodPlate, FoodId, FoodPlate, NewFoodPlate};

/// Errors surfaced by dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// `update_food` was called before any plate was picked for editing.
    #[error("no food plate selected for editing")]
    NoFoodSelected,
}

pub type DashboardResult<T> = Result<T, DashboardError>;

/// Local view of the food plate list plus modal state.
pub struct Dashboard<B> {
    backend: B,
    foods: Vec<FoodPlate>,
    editing: Option<FoodPlate>,
    add_modal_open: bool,
    edit_modal_open: bool,
}

impl<B: FoodBackend> Dashboard<B> {
    /// Empty dashboard; call [`load`](Self::load) to fetch the list.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            foods: Vec::new(),
            editing: None,
            add_modal_open: false,
            edit_modal_open: false,
        }
    }

    /// Fetch the list and replace local state with it.
    pub async fn load(&mut self) -> DashboardResult<&[FoodPlate]> {
        let foods = self.backend.list().await?;
        tracing::debug!(count = foods.len(), "Food plates loaded");
        self.foods = foods;
        Ok(&self.foods)
    }

    /// Create a plate (always available) and append the server's record.
    pub async fn add_food(&mut self, food: NewFoodPlate) -> DashboardResult<&FoodPlate> {
        let body = CreateFoodPlate {
            form: food,
            available: true,
        };
        let created = self.backend.create(&body).await?;
        tracing::info!(food_id = created.id, name = %created.name, "Food plate added");

        self.foods.push(created);
        let index = self.foods.len() - 1;
        Ok(&self.foods[index])
    }

    /// Save the edit form over the plate picked with [`edit_food`](Self::edit_food).
    ///
    /// `id` and `available` come from the editing target, everything else
    /// from the form.
    pub async fn update_food(&mut self, food: NewFoodPlate) -> DashboardResult<FoodPlate> {
        let target = self.editing.as_ref().ok_or(DashboardError::NoFoodSelected)?;
        let merged = target.with_form(food);

        let updated = self.backend.update(&merged).await?;
        tracing::info!(food_id = merged.id, "Food plate updated");

        self.reconcile(merged.id, updated.clone());
        Ok(updated)
    }

    /// Delete a plate and drop it from the list.
    pub async fn delete_food(&mut self, id: FoodId) -> DashboardResult<()> {
        self.backend.delete(id).await?;
        self.foods.retain(|item| item.id != id);
        tracing::info!(food_id = id, "Food plate deleted");
        Ok(())
    }

    /// Persist a new availability flag for `food`.
    pub async fn set_availability(
        &mut self,
        food: &FoodPlate,
        available: bool,
    ) -> DashboardResult<FoodPlate> {
        let changed = FoodPlate {
            available,
            ..food.clone()
        };

        let updated = self.backend.update(&changed).await?;
        tracing::info!(food_id = food.id, available, "Food plate availability changed");

        self.reconcile(food.id, updated.clone());
        Ok(updated)
    }

    /// The availability switch on a food card. Unknown ids are ignored.
    pub async fn toggle_availability(&mut self, id: FoodId) -> DashboardResult<Option<FoodPlate>> {
        let Some(food) = self.find(id).cloned() else {
            tracing::debug!(food_id = id, "Availability toggle for unlisted plate ignored");
            return Ok(None);
        };
        let updated = self.set_availability(&food, !food.available).await?;
        Ok(Some(updated))
    }

    /// Pick the plate to edit and open the edit modal.
    pub fn edit_food(&mut self, food: FoodPlate) {
        self.editing = Some(food);
        self.toggle_edit_modal();
    }

    pub fn toggle_modal(&mut self) {
        self.add_modal_open = !self.add_modal_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    pub fn foods(&self) -> &[FoodPlate] {
        &self.foods
    }

    pub fn find(&self, id: FoodId) -> Option<&FoodPlate> {
        self.foods.iter().find(|item| item.id == id)
    }

    pub fn editing(&self) -> Option<&FoodPlate> {
        self.editing.as_ref()
    }

    pub fn is_add_modal_open(&self) -> bool {
        self.add_modal_open
    }

    pub fn is_edit_modal_open(&self) -> bool {
        self.edit_modal_open
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replace the listed plate with `id`; a plate no longer listed stays out.
    fn reconcile(&mut self, id: FoodId, updated: FoodPlate) {
        match self.foods.iter().position(|item| item.id == id) {
            Some(index) => self.foods[index] = updated,
            None => tracing::debug!(food_id = id, "Updated plate is not listed, list unchanged"),
        }
    }
}
