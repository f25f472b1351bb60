//! Layered configuration.
//!
//! Values resolve with the following priority (highest first):
//! 1. `TASKZEN_*` environment variables
//! 2. TOML config file
//! 3. Compiled defaults
//!
//! ```toml
//! [ordering]
//! renumber_epsilon = 1e-6
//! renumber_spacing = 1.0
//!
//! [mirror]
//! debounce_ms = 20
//!
//! [suggestion]
//! endpoint = "https://api.openai.com/v1/chat/completions"
//! model = "gpt-4o-mini"
//! timeout_secs = 30
//!
//! [logging]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mirror::MirrorSettings;
use crate::suggestion::adapters::SuggestionSettings;
use crate::task::domain::OrderingPolicy;
use crate::telemetry::LoggingSettings;

/// Log filter directive.
pub const ENV_LOG: &str = "TASKZEN_LOG";
/// Renumbering threshold.
pub const ENV_RENUMBER_EPSILON: &str = "TASKZEN_RENUMBER_EPSILON";
/// Gap written by renumbering.
pub const ENV_RENUMBER_SPACING: &str = "TASKZEN_RENUMBER_SPACING";
/// Mirror debounce in milliseconds.
pub const ENV_MIRROR_DEBOUNCE_MS: &str = "TASKZEN_MIRROR_DEBOUNCE_MS";
/// Chat-completions URL.
pub const ENV_SUGGESTION_ENDPOINT: &str = "TASKZEN_SUGGESTION_ENDPOINT";
/// Model identifier.
pub const ENV_SUGGESTION_MODEL: &str = "TASKZEN_SUGGESTION_MODEL";
/// Bearer token for the suggestion endpoint.
pub const ENV_SUGGESTION_API_KEY: &str = "TASKZEN_SUGGESTION_API_KEY";
/// Request timeout in seconds.
pub const ENV_SUGGESTION_TIMEOUT_SECS: &str = "TASKZEN_SUGGESTION_TIMEOUT_SECS";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// An environment override could not be parsed.
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// The resolved values are out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskZenConfig {
    /// Partition renumbering.
    pub ordering: OrderingPolicy,
    /// Live snapshot producers.
    pub mirror: MirrorSettings,
    /// Priority suggestion endpoint.
    pub suggestion: SuggestionSettings,
    /// Subscriber settings.
    pub logging: LoggingSettings,
}

impl TaskZenConfig {
    /// Loads the file at `path` (if any) and applies process environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, an
    /// override does not parse, or the result fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(file) => Self::from_file(file)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses one TOML file. Missing sections keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] or [`ConfigError::ParseToml`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parses TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] on malformed input.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Overlays values found through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] when a numeric override does not
    /// parse.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(level) = lookup(ENV_LOG) {
            self.logging.level = level;
        }
        if let Some(epsilon) = parse_env(&lookup, ENV_RENUMBER_EPSILON)? {
            self.ordering.renumber_epsilon = epsilon;
        }
        if let Some(spacing) = parse_env(&lookup, ENV_RENUMBER_SPACING)? {
            self.ordering.renumber_spacing = spacing;
        }
        if let Some(debounce) = parse_env(&lookup, ENV_MIRROR_DEBOUNCE_MS)? {
            self.mirror.debounce_ms = debounce;
        }
        if let Some(endpoint) = lookup(ENV_SUGGESTION_ENDPOINT) {
            self.suggestion.endpoint = endpoint;
        }
        if let Some(model) = lookup(ENV_SUGGESTION_MODEL) {
            self.suggestion.model = model;
        }
        if let Some(key) = lookup(ENV_SUGGESTION_API_KEY).filter(|key| !key.trim().is_empty()) {
            self.suggestion.api_key = Some(key);
        }
        if let Some(timeout) = parse_env(&lookup, ENV_SUGGESTION_TIMEOUT_SECS)? {
            self.suggestion.timeout_secs = timeout;
        }
        Ok(())
    }

    /// Checks ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordering = &self.ordering;
        if !(ordering.renumber_epsilon.is_finite() && ordering.renumber_epsilon > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ordering.renumber_epsilon must be positive, got {}",
                ordering.renumber_epsilon
            )));
        }
        if !(ordering.renumber_spacing.is_finite() && ordering.renumber_spacing > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ordering.renumber_spacing must be positive, got {}",
                ordering.renumber_spacing
            )));
        }
        if ordering.renumber_epsilon >= ordering.renumber_spacing {
            return Err(ConfigError::Invalid(format!(
                "ordering.renumber_epsilon must be smaller than ordering.renumber_spacing, \
                 got {} and {}",
                ordering.renumber_epsilon, ordering.renumber_spacing
            )));
        }
        if self.suggestion.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "suggestion.timeout_secs must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

fn parse_env<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|err: T::Err| ConfigError::InvalidEnv {
            name,
            value: raw.clone(),
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[rstest]
    fn defaults_are_valid() {
        let config = TaskZenConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.mirror.debounce_ms, 20);
        assert_eq!(config.logging.level, "info");
        assert!(config.suggestion.api_key.is_none());
    }

    #[rstest]
    fn toml_parsing_full() {
        let config = TaskZenConfig::from_toml(
            r#"
[ordering]
renumber_epsilon = 0.01
renumber_spacing = 10.0

[mirror]
debounce_ms = 0

[suggestion]
endpoint = "http://localhost:8080/v1/chat/completions"
model = "local"
api_key = "sk-test"
timeout_secs = 5

[logging]
level = "taskzen=debug"
ansi = false
"#,
        )
        .expect("valid toml");

        assert_eq!(config.ordering.renumber_epsilon, 0.01);
        assert_eq!(config.ordering.renumber_spacing, 10.0);
        assert_eq!(config.mirror.debounce_ms, 0);
        assert_eq!(config.suggestion.model, "local");
        assert_eq!(config.suggestion.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.suggestion.timeout_secs, 5);
        assert_eq!(config.logging.level, "taskzen=debug");
        assert!(!config.logging.ansi);
    }

    #[rstest]
    fn toml_parsing_partial_keeps_defaults() {
        let config = TaskZenConfig::from_toml("[mirror]\ndebounce_ms = 50\n").expect("valid toml");

        assert_eq!(config.mirror.debounce_ms, 50);
        assert_eq!(config.ordering, OrderingPolicy::default());
        assert_eq!(config.suggestion, SuggestionSettings::default());
    }

    #[rstest]
    fn toml_parsing_empty() {
        let config = TaskZenConfig::from_toml("").expect("empty toml");
        assert_eq!(config, TaskZenConfig::default());
    }

    #[rstest]
    fn malformed_toml_is_reported() {
        let result = TaskZenConfig::from_toml("[mirror\ndebounce_ms = 1");
        assert!(matches!(result, Err(ConfigError::ParseToml(_))));
    }

    #[rstest]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("missing.toml");

        let result = TaskZenConfig::load(Some(&path));

        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[rstest]
    fn file_values_are_loaded() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("taskzen.toml");
        std::fs::write(&path, "[suggestion]\nmodel = \"from-file\"\n").expect("write config");

        let config = TaskZenConfig::from_file(&path).expect("load config");

        assert_eq!(config.suggestion.model, "from-file");
    }

    #[rstest]
    fn environment_overrides_file_values() {
        let mut config =
            TaskZenConfig::from_toml("[suggestion]\nmodel = \"from-file\"\n").expect("valid toml");

        config
            .apply_env(env(&[
                (ENV_SUGGESTION_MODEL, "from-env"),
                (ENV_RENUMBER_EPSILON, "0.5"),
                (ENV_MIRROR_DEBOUNCE_MS, " 7 "),
                (ENV_LOG, "warn"),
                (ENV_SUGGESTION_API_KEY, "sk-env"),
            ]))
            .expect("overrides parse");

        assert_eq!(config.suggestion.model, "from-env");
        assert_eq!(config.ordering.renumber_epsilon, 0.5);
        assert_eq!(config.mirror.debounce_ms, 7);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.suggestion.api_key.as_deref(), Some("sk-env"));
    }

    #[rstest]
    fn blank_api_key_override_is_ignored() {
        let mut config = TaskZenConfig::default();

        config
            .apply_env(env(&[(ENV_SUGGESTION_API_KEY, "  ")]))
            .expect("overrides parse");

        assert!(config.suggestion.api_key.is_none());
    }

    #[rstest]
    #[case(ENV_MIRROR_DEBOUNCE_MS, "soon")]
    #[case(ENV_RENUMBER_SPACING, "wide")]
    #[case(ENV_SUGGESTION_TIMEOUT_SECS, "-1")]
    fn unparsable_overrides_are_rejected(#[case] name: &'static str, #[case] value: &str) {
        let mut config = TaskZenConfig::default();

        let result = config.apply_env(env(&[(name, value)]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnv { name: reported, .. }) if reported == name
        ));
    }

    #[rstest]
    #[case("[ordering]\nrenumber_epsilon = 0.0\n")]
    #[case("[ordering]\nrenumber_spacing = -1.0\n")]
    #[case("[ordering]\nrenumber_epsilon = 2.0\nrenumber_spacing = 1.0\n")]
    #[case("[ordering]\nrenumber_epsilon = 0.5\nrenumber_spacing = 0.5\n")]
    #[case("[suggestion]\ntimeout_secs = 0\n")]
    fn out_of_range_values_fail_validation(#[case] contents: &str) {
        let config = TaskZenConfig::from_toml(contents).expect("valid toml");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
