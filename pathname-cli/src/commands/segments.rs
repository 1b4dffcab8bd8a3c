//! Command to list the segments of a path.

use crate::error::CliError;
use crate::utils::{arg_bytes, load_configuration, write_json, write_line, GlobalOptions};
use clap::Args;
use pathname::config::OutputFormat;
use pathname::path::SegmentKind;
use serde::Serialize;
use std::ffi::OsString;

/// List the segments of a path as written, without normalizing it.
#[derive(Args)]
pub struct SegmentsCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

#[derive(Serialize)]
struct SegmentEntry {
    offset: usize,
    segment: String,
    kind: &'static str,
}

fn kind_name(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Empty => "empty",
        SegmentKind::Dot => "dot",
        SegmentKind::DotDot => "dotdot",
        SegmentKind::Normal => "normal",
    }
}

impl SegmentsCommand {
    /// Execute the segments command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let bytes = arg_bytes(&self.path);
        let path = config.builder().build(&bytes)?;

        match config.output_format() {
            OutputFormat::Plain => {
                for segment in path.segments() {
                    write_line(segment.as_bytes())?;
                }
                Ok(())
            }
            OutputFormat::Json => {
                let entries: Vec<SegmentEntry> = path
                    .segments()
                    .map(|segment| SegmentEntry {
                        offset: segment.offset(),
                        segment: String::from_utf8_lossy(segment.as_bytes()).into_owned(),
                        kind: kind_name(segment.kind()),
                    })
                    .collect();
                write_json(&entries)
            }
        }
    }
}
