//! Command to join two paths.

use crate::error::CliError;
use crate::utils::{arg_bytes, emit_path, load_configuration, GlobalOptions};
use clap::Args;
use std::ffi::OsString;

/// Join two paths, inserting a separator when SUFFIX is relative.
#[derive(Args)]
pub struct ConcatCommand {
    /// Leading path
    #[arg(value_name = "PREFIX")]
    pub prefix: OsString,

    /// Trailing path
    #[arg(value_name = "SUFFIX")]
    pub suffix: OsString,

    /// Normalize the joined path
    #[arg(long)]
    pub normalize: bool,
}

impl ConcatCommand {
    /// Execute the concat command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let builder = config.builder();

        let prefix_bytes = arg_bytes(&self.prefix);
        let suffix_bytes = arg_bytes(&self.suffix);
        let prefix = builder.build(&prefix_bytes)?;
        let suffix = builder.build(&suffix_bytes)?;

        let normalize = self.normalize || config.normalize_concat();
        let joined = builder.normalize(normalize).concat(&prefix, &suffix)?;
        emit_path(config.output_format(), "path", &joined)
    }
}
