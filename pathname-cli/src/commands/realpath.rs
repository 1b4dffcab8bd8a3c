//! Command to resolve a path against the filesystem.

use crate::error::CliError;
use crate::utils::{arg_bytes, load_configuration, GlobalOptions};
use clap::Args;
use std::ffi::OsString;

/// Resolve symbolic links and relative segments against the filesystem.
#[derive(Args)]
pub struct RealpathCommand {
    /// Existing path to resolve
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

impl RealpathCommand {
    /// Execute the realpath command.
    #[cfg(unix)]
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        use crate::utils::emit_path;
        use pathname::path::realpath::realpath;

        let config = load_configuration(global)?;
        let bytes = arg_bytes(&self.path);
        let path = config.builder().build(&bytes)?;
        let resolved = realpath(&path, config.max_path_len())?;
        emit_path(config.output_format(), "path", &resolved)
    }

    /// Execute the realpath command.
    #[cfg(not(unix))]
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let _ = (load_configuration(global)?, arg_bytes(&self.path));
        Err(CliError::InvalidArguments(
            "realpath is only supported on Unix platforms".to_string(),
        ))
    }
}
