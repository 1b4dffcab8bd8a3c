//! Commands that derive one component of a path.
//!
//! `extension`, `rootname`, `dirname`, `tailname` and `filename` share the
//! same arguments and differ only in the component they print.

use crate::error::CliError;
use crate::utils::{
    arg_bytes, emit_path, load_configuration, parse_path, write_json, write_line, GlobalOptions,
};
use clap::Args;
use pathname::config::OutputFormat;
use std::ffi::OsString;

/// A derivable path component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// The extension of the last segment.
    Extension,
    /// The path without its extension.
    Rootname,
    /// Everything up to and including the last separator.
    Dirname,
    /// The last segment, with any trailing separator.
    Tailname,
    /// The last segment of a path that names a file.
    Filename,
}

impl Component {
    /// JSON key for this component.
    pub const fn key(self) -> &'static str {
        match self {
            Component::Extension => "extension",
            Component::Rootname => "rootname",
            Component::Dirname => "dirname",
            Component::Tailname => "tailname",
            Component::Filename => "filename",
        }
    }
}

/// Arguments shared by the component commands.
#[derive(Args)]
pub struct ComponentCommand {
    /// Path to decompose
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// Treat PATH as already normalized instead of normalizing it first
    #[arg(long)]
    pub raw: bool,
}

impl ComponentCommand {
    /// Execute the command for `component`.
    pub fn execute(self, component: Component, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let bytes = arg_bytes(&self.path);
        let path = parse_path(&config, &bytes, self.raw)?;
        let format = config.output_format();

        let derived = match component {
            Component::Extension => {
                let extension = path.extension()?;
                return match format {
                    OutputFormat::Plain => write_line(extension.as_bytes()),
                    OutputFormat::Json => write_json(&serde_json::json!({
                        "extension": String::from_utf8_lossy(extension.as_bytes()),
                        "offset": extension.offset(),
                    })),
                };
            }
            Component::Rootname => path.rootname()?,
            Component::Dirname => path.dirname()?,
            Component::Tailname => path.tailname()?,
            Component::Filename => path.filename()?,
        };
        emit_path(format, component.key(), &derived)
    }
}
