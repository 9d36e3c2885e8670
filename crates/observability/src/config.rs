//! Environment-driven logging configuration.
//!
//! - `PUFFSTORE_LOG`: filter directive (falls back to `RUST_LOG`, then `info`)
//! - `PUFFSTORE_LOG_FORMAT`: `json` (default), `pretty` or `compact`

use core::str::FromStr;

use thiserror::Error;

pub const LOG_FILTER_VAR: &str = "PUFFSTORE_LOG";
pub const LOG_FORMAT_VAR: &str = "PUFFSTORE_LOG_FORMAT";
const FALLBACK_FILTER_VAR: &str = "RUST_LOG";
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format `{0}` (expected json, pretty or compact)")]
    UnknownFormat(String),
}

/// Output format of the fmt subscriber.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Set when the requested format was rejected and the default used instead.
    /// Reported once the subscriber is installed.
    pub format_error: Option<ConfigError>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            format_error: None,
        }
    }
}

impl LogConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// An unknown format is replaced by the default and kept in `format_error`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::try_from_lookup(&lookup).unwrap_or_else(|err| Self {
            filter: filter_from(&lookup),
            format: LogFormat::default(),
            format_error: Some(err),
        })
    }

    /// Strict variant of [`LogConfig::from_lookup`].
    pub fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let format = match non_empty(lookup(LOG_FORMAT_VAR)) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            filter: filter_from(&lookup),
            format,
            format_error: None,
        })
    }
}

fn filter_from(lookup: &impl Fn(&str) -> Option<String>) -> String {
    non_empty(lookup(LOG_FILTER_VAR))
        .or_else(|| non_empty(lookup(FALLBACK_FILTER_VAR)))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = LogConfig::from_lookup(lookup(&[]));
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn own_filter_wins_over_rust_log() {
        let config = LogConfig::from_lookup(lookup(&[
            (LOG_FILTER_VAR, "puffstore_inventory=debug"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.filter, "puffstore_inventory=debug");
    }

    #[test]
    fn rust_log_is_the_fallback() {
        let config = LogConfig::from_lookup(lookup(&[("RUST_LOG", "warn"), (LOG_FILTER_VAR, "  ")]));
        assert_eq!(config.filter, "warn");
    }

    #[test]
    fn format_is_case_insensitive() {
        let config = LogConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, " Pretty ")]));
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn unknown_format_is_rejected_by_strict_parser() {
        let err = LogConfig::try_from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownFormat("xml".to_string()));
    }

    #[test]
    fn unknown_format_falls_back_to_json_but_keeps_filter() {
        let config = LogConfig::from_lookup(lookup(&[
            (LOG_FORMAT_VAR, "xml"),
            (LOG_FILTER_VAR, "debug"),
        ]));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.filter, "debug");
        assert_eq!(
            config.format_error,
            Some(ConfigError::UnknownFormat("xml".to_string()))
        );
    }
}
