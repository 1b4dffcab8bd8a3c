//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHNAME_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Overrides [`Config::max_path_len`].
pub const MAX_PATH_LEN_ENV: &str = "PATHNAME_MAX_PATH_LEN";
/// Overrides [`Config::output_format`].
pub const OUTPUT_FORMAT_ENV: &str = "PATHNAME_OUTPUT_FORMAT";
/// Overrides [`Config::normalize_concat`].
pub const NORMALIZE_CONCAT_ENV: &str = "PATHNAME_NORMALIZE_CONCAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathname::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a non-numeric length or an invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(len) = env::var(MAX_PATH_LEN_ENV) {
            config.max_path_len = Some(len.trim().parse().map_err(|_| Error::Validation {
                field: MAX_PATH_LEN_ENV.into(),
                message: format!("Must be a positive integer, got '{len}'"),
            })?);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(format.parse().map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message,
            })?);
        }

        if let Ok(val) = env::var(NORMALIZE_CONCAT_ENV) {
            config.normalize_concat = Some(Self::parse_bool(NORMALIZE_CONCAT_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
