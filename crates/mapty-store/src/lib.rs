//! Mapty Store - Workout collection and slot adapters
//!
//! This crate holds the ordered workout store with its save/load lifecycle,
//! and the in-memory and file-backed implementations of the key-value slot.

pub mod file;
pub mod memory;
pub mod workouts;

pub use file::FileSlot;
pub use memory::MemorySlot;
pub use workouts::WorkoutStore;
