//! Food list persistence
//!
//! The whole list lives under one key as a JSON array and is rewritten on
//! every change.

use super::error::StoreResult;
use super::kv::KeyValueStore;
use crate::tracker::FoodEntry;

/// Key the food list is stored under
pub const FOODS_KEY: &str = "foods";

/// Loads, saves and clears the food list in a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct FoodRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> FoodRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, FOODS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored list. Absent, unreadable or malformed data all come
    /// back as an empty list.
    pub fn load(&self) -> Vec<FoodEntry> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No stored list under '{}'", self.key);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<FoodEntry>>>(&raw) {
            Ok(foods) => {
                let foods = foods.unwrap_or_default();
                tracing::info!("Loaded {} entries from '{}'", foods.len(), self.key);
                foods
            }
            Err(e) => {
                tracing::warn!("Ignoring corrupt list under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list
    pub fn save(&self, foods: &[FoodEntry]) -> StoreResult<()> {
        let json = serde_json::to_string(foods)?;
        self.store.set(&self.key, &json)?;
        tracing::debug!("Saved {} entries to '{}'", foods.len(), self.key);
        Ok(())
    }

    /// Remove the stored list
    pub fn clear(&self) -> StoreResult<()> {
        self.store.delete(&self.key)?;
        tracing::info!("Cleared stored list '{}'", self.key);
        Ok(())
    }
}
