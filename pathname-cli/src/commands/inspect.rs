//! Command to report a path's flags and components.

use crate::error::CliError;
use crate::utils::{arg_bytes, load_configuration, write_json, GlobalOptions};
use clap::Args;
use pathname::config::OutputFormat;
use pathname::Pathname;
use serde::Serialize;
use std::ffi::OsString;

/// Normalize a path and report every component that can be derived from it.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

/// Everything `inspect` reports. Components that do not exist are `None`.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The argument as given.
    pub input: String,
    /// Normal form of the argument.
    pub normalized: String,
    /// Length of the normal form in bytes.
    pub length: usize,
    /// Whether the path starts at the root.
    pub absolute: bool,
    /// Whether the input was already in normal form.
    pub was_normalised: bool,
    /// Number of segments in the normal form.
    pub segments: usize,
    /// Extension of the last segment, possibly empty.
    pub extension: String,
    /// Path without its extension.
    pub rootname: Option<String>,
    /// Directory part.
    pub dirname: Option<String>,
    /// Last segment.
    pub tailname: Option<String>,
    /// File name.
    pub filename: Option<String>,
}

fn component(result: pathname::Result<Pathname<'static>>) -> Option<String> {
    result.ok().map(|path| path.to_string_lossy().into_owned())
}

impl Report {
    /// Build the report for `input` and its normal form.
    pub fn new(input: &Pathname<'_>, normalized: &Pathname<'_>) -> Result<Self, CliError> {
        Ok(Self {
            input: input.to_string_lossy().into_owned(),
            normalized: normalized.to_string_lossy().into_owned(),
            length: normalized.len(),
            absolute: normalized.is_absolute(),
            was_normalised: input.as_bytes() == normalized.as_bytes(),
            segments: normalized.segments().count(),
            extension: String::from_utf8_lossy(normalized.extension()?.as_bytes()).into_owned(),
            rootname: component(normalized.rootname()),
            dirname: component(normalized.dirname()),
            tailname: component(normalized.tailname()),
            filename: component(normalized.filename()),
        })
    }

    fn print_plain(&self) {
        let missing = "-".to_string();
        println!("input:      {}", self.input);
        println!("normalized: {}", self.normalized);
        println!("length:     {}", self.length);
        println!("absolute:   {}", self.absolute);
        println!("normalised: {}", self.was_normalised);
        println!("segments:   {}", self.segments);
        println!("extension:  {}", self.extension);
        println!("rootname:   {}", self.rootname.as_ref().unwrap_or(&missing));
        println!("dirname:    {}", self.dirname.as_ref().unwrap_or(&missing));
        println!("tailname:   {}", self.tailname.as_ref().unwrap_or(&missing));
        println!("filename:   {}", self.filename.as_ref().unwrap_or(&missing));
    }
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let bytes = arg_bytes(&self.path);
        let input = config.builder().build(&bytes)?;
        let normalized = input.normalize()?;
        let report = Report::new(&input, &normalized)?;

        match config.output_format() {
            OutputFormat::Plain => {
                report.print_plain();
                Ok(())
            }
            OutputFormat::Json => write_json(&report),
        }
    }
}
