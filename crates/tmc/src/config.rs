//! Compiler configuration parsed from environment variables.
//!
//! Every setting can be overridden via environment variables prefixed with
//! `TMC_`, and command line flags take precedence over both.

use std::env;

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

use crate::error::CliError;

/// How much the compiler reports on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Everything below plus per-symbol detail.
    Trace,
    /// One line per expanded directive.
    Debug,
    /// Input and output summaries.
    #[default]
    Info,
    /// Directives that reference undeclared states.
    #[value(alias = "warning")]
    Warn,
    /// Only the diagnostic of a failed compilation.
    Error,
}

impl LogLevel {
    /// Parse a level name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` naming the accepted levels.
    pub fn parse(name: &str) -> Result<Self, CliError> {
        <Self as ValueEnum>::from_str(name, true).map_err(|_| {
            CliError::InvalidConfig(format!(
                "unknown log level '{name}', expected one of: trace, debug, info, warn, error"
            ))
        })
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Extension appended to the input path when no output path is given.
const DEFAULT_OUTPUT_EXTENSION: &str = "out";

const LOG_LEVEL_VAR: &str = "TMC_LOG_LEVEL";
const OUTPUT_EXTENSION_VAR: &str = "TMC_OUTPUT_EXTENSION";

/// Configuration for one compiler run.
///
/// # Environment Variables
///
/// - `TMC_LOG_LEVEL`: Sets the log level (trace, debug, info, warn, error)
/// - `TMC_OUTPUT_EXTENSION`: Extension for the default output path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Extension appended to the input path for the default output path.
    pub output_extension: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
        }
    }
}

impl CompilerConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `TMC_LOG_LEVEL` and `TMC_OUTPUT_EXTENSION`, falling back to
    /// defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable contains an invalid
    /// value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable contains an invalid
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => LogLevel::parse(&val)?,
            None => LogLevel::default(),
        };

        let output_extension = match lookup(OUTPUT_EXTENSION_VAR) {
            Some(val) => validate_extension(val)?,
            None => DEFAULT_OUTPUT_EXTENSION.to_string(),
        };

        Ok(Self {
            log_level,
            output_extension,
        })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// Intended for command line flags that take precedence over
    /// environment-based values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if the extension override is invalid.
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        output_extension: Option<String>,
    ) -> Result<Self, CliError> {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(extension) = output_extension {
            self.output_extension = validate_extension(extension)?;
        }

        Ok(self)
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

fn validate_extension(extension: String) -> Result<String, CliError> {
    if extension.is_empty() || extension.contains(['/', '\\']) {
        return Err(CliError::InvalidConfig(format!(
            "invalid output extension '{extension}', expected a non-empty file extension"
        )));
    }
    Ok(extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("info", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("ERROR", LogLevel::Error)]
    #[case("Debug", LogLevel::Debug)]
    fn log_level_parses_case_insensitively(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(LogLevel::parse(input).ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let Err(err) = LogLevel::parse("loud") else {
            panic!("expected invalid log level");
        };
        assert!(err.to_string().contains("unknown log level 'loud'"));
    }

    #[rstest]
    #[case(LogLevel::Trace, LevelFilter::TRACE)]
    #[case(LogLevel::Warn, LevelFilter::WARN)]
    #[case(LogLevel::Error, LevelFilter::ERROR)]
    fn log_level_maps_to_level_filter(#[case] level: LogLevel, #[case] expected: LevelFilter) {
        assert_eq!(LevelFilter::from(level), expected);
    }

    #[test]
    fn defaults_apply_without_variables() {
        let Ok(config) = CompilerConfig::from_lookup(lookup_from(&[])) else {
            panic!("empty environment should be valid");
        };
        assert_eq!(config, CompilerConfig::default());
        assert_eq!(config.output_extension, "out");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn reads_variables_from_lookup() {
        let Ok(config) = CompilerConfig::from_lookup(lookup_from(&[
            ("TMC_LOG_LEVEL", "debug"),
            ("TMC_OUTPUT_EXTENSION", "tm"),
        ])) else {
            panic!("environment should be valid");
        };
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output_extension, "tm");
    }

    #[rstest]
    #[case("TMC_LOG_LEVEL", "chatty")]
    #[case("TMC_OUTPUT_EXTENSION", "")]
    #[case("TMC_OUTPUT_EXTENSION", "a/b")]
    fn rejects_invalid_variables(#[case] key: &str, #[case] value: &str) {
        let result = CompilerConfig::from_lookup(lookup_from(&[(key, value)]));
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn overrides_take_precedence() {
        let Ok(config) = CompilerConfig::default()
            .apply_overrides(Some(LogLevel::Error), Some("expanded".to_string()))
        else {
            panic!("overrides should be valid");
        };
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.output_extension, "expanded");

        let Ok(config) = CompilerConfig::default().apply_overrides(None, None) else {
            panic!("empty overrides should be valid");
        };
        assert_eq!(config, CompilerConfig::default());
    }

    #[test]
    fn with_log_level_builder_sets_level() {
        let config = CompilerConfig::default().with_log_level(LogLevel::Trace);
        assert_eq!(config.log_level, LogLevel::Trace);
    }
}
