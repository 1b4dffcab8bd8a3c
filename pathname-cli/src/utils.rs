//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, argument conversion and output
//! formatting.

use crate::error::CliError;
use pathname::config::OutputFormat;
use pathname::{Config, ConfigBuilder, Logger, Pathname, PathnameBuilder};
use serde::Serialize;
use std::borrow::Cow;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Extra configuration file.
    pub config: Option<PathBuf>,

    /// Override the maximum pathname length.
    pub max_path_len: Option<usize>,

    /// Override the output format.
    pub format: Option<OutputFormat>,
}

impl GlobalOptions {
    /// Logger for the requested verbosity; `--verbose` wins over `--quiet`.
    pub fn logger(&self) -> Logger {
        pathname::init_logger(self.verbose, self.quiet)
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file, then the user configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    let config = builder
        .with_config(Config {
            max_path_len: global.max_path_len,
            output_format: global.format,
            normalize_concat: None,
        })
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    log::debug!("effective configuration: {config:?}");
    Ok(config)
}

/// Raw bytes of a command-line argument.
#[cfg(unix)]
pub fn arg_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(arg.as_bytes())
}

/// Raw bytes of a command-line argument.
#[cfg(not(unix))]
pub fn arg_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    match arg.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// Build a pathname from an argument, normalizing it unless `raw` is set.
///
/// A raw argument is trusted to be in normal form already.
pub fn parse_path<'a>(
    config: &Config,
    bytes: &'a [u8],
    raw: bool,
) -> Result<Pathname<'a>, CliError> {
    let builder: PathnameBuilder = config.builder();
    let builder = if raw {
        builder.assume_normalised(true)
    } else {
        builder.normalize(true)
    };
    Ok(builder.build(bytes)?)
}

/// Write raw bytes followed by a newline to stdout.
pub fn write_line(bytes: &[u8]) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    out.write_all(bytes)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write a value as pretty JSON to stdout.
pub fn write_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Emit a single path: its bytes in plain mode, `{"<key>": <path>}` in JSON.
pub fn emit_path(format: OutputFormat, key: &str, path: &Pathname<'_>) -> Result<(), CliError> {
    match format {
        OutputFormat::Plain => write_line(path.as_bytes()),
        OutputFormat::Json => {
            let mut map = serde_json::Map::new();
            map.insert(key.to_string(), serde_json::to_value(path)?);
            write_json(&map)
        }
    }
}
