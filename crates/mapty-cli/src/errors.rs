use console::style;
use mapty_core::MaptyError;
use std::fmt;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for an id that is not in the store
pub fn workout_not_found(id: &str) -> CliError {
    CliError::new("Workout not found")
        .with_context(format!("No stored workout has this id.\n\nId: {}", id))
        .with_suggestion("List recorded workouts and their ids: mapty list")
        .with_suggestion("Check --data-dir and --key point at the right slot")
        .with_help("Run: mapty show --help")
}

/// Create error for rejected workout input
pub fn invalid_input(field: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid {}", field))
        .with_context(format!("Inputs have to be positive numbers.\n\nReason: {}", reason))
        .with_suggestion("Distance, duration and cadence must be greater than zero")
        .with_suggestion("Elevation gain may be negative for a net descent")
        .with_help("Run: mapty add --help")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check mapty.toml for syntax errors")
        .with_suggestion("Check the MAPTY_DATA_DIR and MAPTY_STORAGE_KEY environment variables")
        .with_help("Run: mapty config")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    if let Some(err) = error.downcast_ref::<MaptyError>() {
        match err {
            MaptyError::InvalidInput { field, reason } => return invalid_input(field, reason),
            MaptyError::ConfigInvalid { key, reason } => return invalid_config(key, reason),
            MaptyError::InvalidKey { key, reason } => return invalid_config(key, reason),
            _ => {}
        }
    }

    let message = format!("{:#}", error);

    if message.contains("Permission denied") {
        CliError::new("Permission denied")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check permissions on the data directory")
            .with_suggestion("Or point --data-dir somewhere writable")
    } else {
        CliError::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_anyhow_maps_invalid_input() {
        let err = anyhow::Error::new(MaptyError::InvalidInput {
            field: "distance".to_string(),
            reason: "must be a positive number, got 0".to_string(),
        });

        let cli_err = from_anyhow(err);
        assert_eq!(cli_err.message, "Invalid distance");
        assert_eq!(cli_err.suggestions.len(), 2);
    }

    #[test]
    fn test_from_anyhow_keeps_context_chain() {
        let err = anyhow::anyhow!("disk full").context("Failed to save workouts");
        let cli_err = from_anyhow(err);
        assert_eq!(cli_err.message, "Failed to save workouts: disk full");
    }
}
