//! Mapty Core - Workout model, storage port, and configuration
//!
//! This crate contains the workout domain model and the port definition for
//! the durable key-value slot the store persists into.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod validation;

pub use error::{MaptyError, Result};
