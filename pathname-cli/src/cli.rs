//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, ComponentCommand, ConcatCommand, InspectCommand, NormalizeCommand,
    RealpathCommand, SegmentsCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use pathname::config::OutputFormat;
use std::path::PathBuf;

/// Lexical pathname normalization and decomposition.
#[derive(Parser)]
#[command(name = "pathname")]
#[command(version, about = "Normalize and decompose filesystem pathnames", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file on top of the user configuration
    #[arg(long, value_name = "PATH", global = true, env = "PATHNAME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum pathname length in bytes
    #[arg(long, value_name = "N", global = true, env = "PATHNAME_MAX_PATH_LEN")]
    pub max_path_len: Option<usize>,

    /// Output format
    #[arg(long, value_name = "FORMAT", global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize a path lexically
    Normalize(NormalizeCommand),

    /// Print the extension of the last segment
    Extension(ComponentCommand),

    /// Print the path with its extension removed
    Rootname(ComponentCommand),

    /// Print the directory part of a path
    Dirname(ComponentCommand),

    /// Print the last segment of a path
    Tailname(ComponentCommand),

    /// Print the file name of a path
    Filename(ComponentCommand),

    /// Join two paths
    Concat(ConcatCommand),

    /// List the segments of a path
    Segments(SegmentsCommand),

    /// Report a path's flags and components
    Inspect(InspectCommand),

    /// Resolve a path against the filesystem
    Realpath(RealpathCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
