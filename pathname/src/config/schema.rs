//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the pathname tools:
//! the length limit applied to every constructed path and the preferences
//! of the command-line front end.

use serde::{Deserialize, Serialize};

use crate::path::{PathnameBuilder, DEFAULT_MAX_PATH_LEN};

/// Complete configuration structure.
///
/// Every field is optional so that partial files and environment overrides
/// can be layered; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use pathname::config::{Config, OutputFormat};
///
/// let config = Config {
///     max_path_len: Some(1024),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.max_path_len(), 1024);
/// assert!(!config.normalize_concat());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum pathname length in bytes.
    pub max_path_len: Option<usize>,

    /// Output format for command results.
    pub output_format: Option<OutputFormat>,

    /// Normalize the result of concatenation.
    pub normalize_concat: Option<bool>,
}

impl Config {
    /// Returns the effective maximum pathname length.
    #[must_use]
    pub fn max_path_len(&self) -> usize {
        self.max_path_len.unwrap_or(DEFAULT_MAX_PATH_LEN)
    }

    /// Returns the effective output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Returns whether concatenation results are normalized.
    #[must_use]
    pub fn normalize_concat(&self) -> bool {
        self.normalize_concat.unwrap_or(false)
    }

    /// Returns a pathname builder limited to [`max_path_len`](Self::max_path_len).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::config::Config;
    ///
    /// let config = Config { max_path_len: Some(4), ..Default::default() };
    /// assert!(config.builder().build(b"/abc").is_ok());
    /// assert!(config.builder().build(b"/abcd").is_err());
    /// ```
    #[must_use]
    pub fn builder(&self) -> PathnameBuilder {
        PathnameBuilder::new().max_len(self.max_path_len())
    }
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use pathname::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line.
    #[default]
    Plain,
    /// JSON output format.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected plain or json)")),
        }
    }
}
