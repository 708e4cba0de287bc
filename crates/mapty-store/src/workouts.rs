//! Ordered workout collection mirrored to a key-value slot.
//!
//! Saving writes every field, derived metrics included. Loading rebuilds each
//! record's variant from its stored `type` tag and keeps the stored metrics
//! as they are; the constructors are never re-run on stored data.

use mapty_core::config::DEFAULT_STORAGE_KEY;
use mapty_core::error::{MaptyError, Result};
use mapty_core::models::Workout;
use mapty_core::ports::KeyValueSlot;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct WorkoutStore {
    key: String,
    workouts: Vec<Workout>,
}

impl Default for WorkoutStore {
    fn default() -> Self {
        Self::with_key(DEFAULT_STORAGE_KEY)
    }
}

impl WorkoutStore {
    /// Create an empty store using the default slot key
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that persists under `key`
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            workouts: Vec::new(),
        }
    }

    /// Create a store under `key` and load whatever the slot holds
    pub fn restore(slot: &dyn KeyValueSlot, key: impl Into<String>) -> Self {
        let mut store = Self::with_key(key);
        store.load(slot);
        store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append a workout. Ids must be unique within the store.
    pub fn add(&mut self, workout: Workout) -> Result<()> {
        if self.find_by_id(workout.id().as_str()).is_some() {
            return Err(MaptyError::DuplicateWorkout {
                id: workout.id().to_string(),
            });
        }
        self.workouts.push(workout);
        Ok(())
    }

    /// All workouts in creation order
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id().as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Write the whole collection to the slot, replacing what was there
    pub fn save(&self, slot: &dyn KeyValueSlot) -> Result<()> {
        let payload = serde_json::to_string(&self.workouts)?;
        slot.set(&self.key, &payload)?;
        tracing::debug!(key = %self.key, count = self.workouts.len(), "Saved workouts");
        Ok(())
    }

    /// Replace the in-memory collection with the slot's contents.
    ///
    /// A missing, unreadable or malformed payload leaves the store empty.
    pub fn load(&mut self, slot: &dyn KeyValueSlot) -> &[Workout] {
        self.workouts = read_workouts(slot, &self.key);
        tracing::debug!(key = %self.key, count = self.workouts.len(), "Loaded workouts");
        &self.workouts
    }

    /// Delete the stored collection and empty the store
    pub fn reset(&mut self, slot: &dyn KeyValueSlot) -> Result<()> {
        slot.remove(&self.key)?;
        self.workouts.clear();
        tracing::debug!(key = %self.key, "Reset workouts");
        Ok(())
    }
}

fn read_workouts(slot: &dyn KeyValueSlot, key: &str) -> Vec<Workout> {
    let payload = match slot.get(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Could not read stored workouts, starting empty");
            return Vec::new();
        }
    };

    let workouts: Vec<Workout> = match serde_json::from_str(&payload) {
        Ok(workouts) => workouts,
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding malformed stored workouts");
            return Vec::new();
        }
    };

    if let Some(dup) = first_duplicate_id(&workouts) {
        tracing::warn!(key, id = %dup, "Discarding stored workouts with duplicate ids");
        return Vec::new();
    }

    workouts
}

fn first_duplicate_id(workouts: &[Workout]) -> Option<String> {
    let mut seen = HashSet::new();
    workouts
        .iter()
        .find(|w| !seen.insert(w.id().as_str()))
        .map(|w| w.id().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemorySlot;
    use mapty_core::models::{Coordinates, WorkoutKind};

    fn sample_run() -> Workout {
        Workout::running(Coordinates::new(30.0, 78.0), 5.2, 24.0, 178.0)
    }

    fn sample_ride() -> Workout {
        Workout::cycling(Coordinates::new(30.0, 78.0), 20.0, 60.0, 300.0)
    }

    #[test]
    fn test_add_preserves_order() {
        let mut store = WorkoutStore::new();
        let run = sample_run();
        let ride = sample_ride();
        let (run_id, ride_id) = (run.id().clone(), ride.id().clone());

        store.add(run).unwrap();
        store.add(ride).unwrap();

        let ids: Vec<_> = store.all().iter().map(|w| w.id().clone()).collect();
        assert_eq!(ids, vec![run_id, ride_id]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = WorkoutStore::new();
        let run = sample_run();

        store.add(run.clone()).unwrap();
        let err = store.add(run).unwrap_err();

        assert!(matches!(err, MaptyError::DuplicateWorkout { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_find_by_id() {
        let mut store = WorkoutStore::new();
        let ride = sample_ride();
        let id = ride.id().to_string();
        store.add(ride).unwrap();

        assert_eq!(store.find_by_id(&id).map(|w| w.kind()), Some(WorkoutKind::Cycling));
        assert!(store.find_by_id("never-added").is_none());
    }

    #[test]
    fn test_load_absent_key_is_empty() {
        let slot = MemorySlot::new();
        let mut store = WorkoutStore::new();
        store.add(sample_run()).unwrap();

        assert!(store.load(&slot).is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let slot = MemorySlot::new();
        let mut store = WorkoutStore::new();
        store.add(sample_run()).unwrap();
        store.add(sample_ride()).unwrap();
        store.save(&slot).unwrap();

        let mut smaller = WorkoutStore::new();
        smaller.add(sample_ride()).unwrap();
        smaller.save(&slot).unwrap();

        let reloaded = WorkoutStore::restore(&slot, DEFAULT_STORAGE_KEY);
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_custom_key() {
        let slot = MemorySlot::new();
        let mut store = WorkoutStore::with_key("season");
        store.add(sample_run()).unwrap();
        store.save(&slot).unwrap();

        assert!(slot.get("season").unwrap().is_some());
        assert!(slot.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
        assert_eq!(WorkoutStore::restore(&slot, "season").len(), 1);
    }

    #[test]
    fn test_reset_clears_slot_and_memory() {
        let slot = MemorySlot::new();
        let mut store = WorkoutStore::new();
        store.add(sample_run()).unwrap();
        store.save(&slot).unwrap();

        store.reset(&slot).unwrap();

        assert!(store.is_empty());
        assert!(slot.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
        assert!(store.load(&slot).is_empty());
    }

    #[test]
    fn test_duplicate_ids_in_payload_are_discarded() {
        let slot = MemorySlot::new();
        let run = sample_run();
        let payload = serde_json::to_string(&vec![run.clone(), run]).unwrap();
        slot.set(DEFAULT_STORAGE_KEY, &payload).unwrap();

        assert!(WorkoutStore::restore(&slot, DEFAULT_STORAGE_KEY).is_empty());
    }
}
