//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::str::FromStr;

use crate::constants::render::DEFAULT_SEPARATOR;
use crate::error::{Error, Result};

/// How parsed songs are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<div class="...">` fragments.
    #[default]
    Html,
    /// JSON array of line records.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(Error::config(
                format!("unknown output format {other:?}"),
                "Set CHORDFLOW_FORMAT to html or json",
            )),
        }
    }
}

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Default transposition in half steps
    pub half_steps: i32,
    /// Output format
    pub format: OutputFormat,
    /// Separator between rendered HTML lines
    pub separator: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            half_steps: 0,
            format: OutputFormat::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(steps) = lookup("CHORDFLOW_HALF_STEPS") {
            config.half_steps = steps.trim().parse().map_err(|_| {
                Error::config(
                    format!("CHORDFLOW_HALF_STEPS is not an integer: {steps:?}"),
                    "Use a whole number of half steps, e.g. -2 or 3",
                )
            })?;
        }

        if let Some(format) = lookup("CHORDFLOW_FORMAT") {
            config.format = format.parse()?;
        }

        if let Some(separator) = lookup("CHORDFLOW_SEPARATOR") {
            config.separator = unescape_separator(&separator);
        }

        Ok(config)
    }
}

/// Allow `\n` and `\t` to be written literally in .env files.
fn unescape_separator(raw: &str) -> String {
    raw.replace("\\n", "\n").replace("\\t", "\t")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.half_steps, 0);
        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.separator, " ");
        assert_eq!(config.app_name(), "chordflow");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CHORDFLOW_HALF_STEPS", "-3"),
            ("CHORDFLOW_FORMAT", "JSON"),
            ("CHORDFLOW_SEPARATOR", "\\n"),
        ]))
        .unwrap();
        assert_eq!(config.half_steps, -3);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.separator, "\n");
    }

    #[test]
    fn test_bad_half_steps() {
        let err = Config::from_lookup(lookup_from(&[("CHORDFLOW_HALF_STEPS", "two")])).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_bad_format() {
        let err = Config::from_lookup(lookup_from(&[("CHORDFLOW_FORMAT", "pdf")])).unwrap_err();
        assert!(err.to_string().contains("html or json"));
    }
}
