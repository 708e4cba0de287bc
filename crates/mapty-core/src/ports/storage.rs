use crate::error::{MaptyError, Result};

/// Port for a durable key-value slot holding text values
///
/// The workout store is assumed to be the only writer of its key. Adapters
/// give no protection against concurrent writers; the last `set` wins.
pub trait KeyValueSlot {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// Reject keys that are empty or could escape a slot directory
pub fn check_key(key: &str) -> Result<()> {
    let reason = if key.trim().is_empty() {
        Some("key must not be empty")
    } else if key.contains(['/', '\\']) {
        Some("key must not contain path separators")
    } else if key.starts_with('.') {
        Some("key must not start with '.'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(MaptyError::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key() {
        assert!(check_key("workouts").is_ok());
        assert!(check_key("workouts-2024").is_ok());
        assert!(check_key("").is_err());
        assert!(check_key("   ").is_err());
        assert!(check_key("../etc").is_err());
        assert!(check_key("a/b").is_err());
        assert!(check_key("a\\b").is_err());
        assert!(check_key(".hidden").is_err());
    }
}
