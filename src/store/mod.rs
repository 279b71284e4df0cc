//! In-memory food plate storage for the `food-api` backend.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::food::{FoodId, FoodPlate, NewFoodPlate};
use crate::observability::metrics;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Food plate {0} not found")]
    NotFound(FoodId),

    /// The id counter reached `u64::MAX`.
    #[error("No food plate ids left")]
    IdsExhausted,
}

/// Accepted seed layouts: a JSON-server style `{ "foods": [...] }` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeedFile {
    Database { foods: Vec<FoodPlate> },
    List(Vec<FoodPlate>),
}

/// A thread-safe map of id -> plate with a monotonic id counter.
///
/// Clones share the same data.
#[derive(Clone)]
pub struct FoodStore {
    inner: Arc<DashMap<FoodId, FoodPlate>>,
    last_id: Arc<AtomicU64>,
}

impl Default for FoodStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            last_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Store pre-populated with `foods`. New ids continue after the highest one.
    pub fn with_foods(foods: impl IntoIterator<Item = FoodPlate>) -> Self {
        let store = Self::new();
        for food in foods {
            store.last_id.fetch_max(food.id, Ordering::SeqCst);
            store.inner.insert(food.id, food);
        }
        metrics::record_store_size(store.inner.len());
        store
    }

    /// Load a seed file.
    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let seed: SeedFile = serde_json::from_reader(BufReader::new(file))?;
        let foods = match seed {
            SeedFile::Database { foods } | SeedFile::List(foods) => foods,
        };
        let store = Self::with_foods(foods);
        tracing::info!(path = %path.display(), count = store.len(), "Loaded food plates from seed file");
        Ok(store)
    }

    /// All plates ordered by id.
    pub fn list(&self) -> Vec<FoodPlate> {
        let mut foods: Vec<FoodPlate> = self.inner.iter().map(|r| r.value().clone()).collect();
        foods.sort_by_key(|food| food.id);
        foods
    }

    pub fn get(&self, id: FoodId) -> Result<FoodPlate, StoreError> {
        self.inner
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or(StoreError::NotFound(id))
    }

    /// Insert a new plate under the next id.
    ///
    /// Ids never wrap: once the counter holds `u64::MAX` every create fails.
    pub fn create(&self, form: NewFoodPlate, available: bool) -> Result<FoodPlate, StoreError> {
        let last = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map_err(|_| StoreError::IdsExhausted)?;
        let id = last + 1;
        let food = form.into_plate(id, available);
        self.inner.insert(id, food.clone());
        metrics::record_store_size(self.inner.len());
        Ok(food)
    }

    /// Overwrite an existing plate. `available: None` keeps the stored flag.
    pub fn replace(
        &self,
        id: FoodId,
        form: NewFoodPlate,
        available: Option<bool>,
    ) -> Result<FoodPlate, StoreError> {
        let mut entry = self.inner.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        let available = available.unwrap_or(entry.available);
        *entry = form.into_plate(id, available);
        Ok(entry.clone())
    }

    pub fn delete(&self, id: FoodId) -> Result<FoodPlate, StoreError> {
        let (_, food) = self.inner.remove(&id).ok_or(StoreError::NotFound(id))?;
        metrics::record_store_size(self.inner.len());
        Ok(food)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
