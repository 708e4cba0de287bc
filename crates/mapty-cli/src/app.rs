//! Session context shared by every command.

use anyhow::{Context, Result};
use mapty_core::config::LayeredConfig;
use mapty_core::models::Workout;
use mapty_core::ports::KeyValueSlot;
use mapty_store::{FileSlot, WorkoutStore};

use crate::output::OutputWriter;

/// One session: the loaded store, the slot it mirrors to, and where output goes
pub struct App {
    pub output: OutputWriter,
    store: WorkoutStore,
    slot: Box<dyn KeyValueSlot>,
}

impl App {
    /// Open the file-backed slot from the configuration and load the store
    pub fn open(config: LayeredConfig, output: OutputWriter) -> Self {
        let slot = FileSlot::new(&config.data_dir.value);
        tracing::debug!(data_dir = %slot.dir().display(), "Opening workout slot");
        Self::with_slot(config, Box::new(slot), output)
    }

    pub fn with_slot(
        config: LayeredConfig,
        slot: Box<dyn KeyValueSlot>,
        output: OutputWriter,
    ) -> Self {
        let store = WorkoutStore::restore(slot.as_ref(), config.storage_key.value);
        Self {
            output,
            store,
            slot,
        }
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    /// Append a workout and persist the whole collection
    pub fn record(&mut self, workout: Workout) -> Result<&Workout> {
        self.store.add(workout)?;
        self.store
            .save(self.slot.as_ref())
            .context("Failed to save workouts")?;

        // add succeeded, so the store is non-empty
        self.store
            .all()
            .last()
            .context("Store is empty after adding a workout")
    }

    /// Remove stored workouts; returns how many were dropped
    pub fn reset(&mut self) -> Result<usize> {
        let removed = self.store.len();
        self.store
            .reset(self.slot.as_ref())
            .context("Failed to reset stored workouts")?;
        Ok(removed)
    }
}
