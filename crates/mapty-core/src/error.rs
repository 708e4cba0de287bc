//! Error types for Mapty

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaptyError {
    // Store errors
    #[error("Workout {id} is already in the store")]
    DuplicateWorkout { id: String },

    // Input errors
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    // Slot errors
    #[error("Invalid storage key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MaptyError {
    fn from(err: serde_json::Error) -> Self {
        MaptyError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MaptyError>;
