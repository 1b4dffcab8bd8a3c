//! Command to normalize a path.

use crate::error::CliError;
use crate::utils::{arg_bytes, emit_path, load_configuration, parse_path, GlobalOptions};
use clap::Args;
use std::ffi::OsString;

/// Normalize a path lexically.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let bytes = arg_bytes(&self.path);
        let path = parse_path(&config, &bytes, false)?;
        emit_path(config.output_format(), "path", &path)
    }
}
