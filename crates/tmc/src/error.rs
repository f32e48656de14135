//! Error types for the command line driver.

use thiserror::Error;

/// Errors raised before compilation starts.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_error_displays_message() {
        let error = CliError::InvalidConfig("unknown log level".to_string());
        assert_eq!(
            error.to_string(),
            "invalid configuration: unknown log level"
        );
    }
}
