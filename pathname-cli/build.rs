//! Build script for pathname-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

fn path_arg() -> Arg {
    Arg::new("path").value_name("PATH").required(true)
}

fn component_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name).about(about).arg(path_arg()).arg(
        Arg::new("raw")
            .long("raw")
            .help("Treat PATH as already normalized instead of normalizing it first")
            .action(ArgAction::SetTrue),
    )
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("pathname")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize and decompose filesystem pathnames")
        .long_about(
            "Lexical pathname normalization: collapse separators, drop `.` segments, \
             resolve `..` segments and derive extension, rootname, dirname, tailname \
             and filename without touching the filesystem",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load this configuration file on top of the user configuration")
                .value_name("PATH")
                .global(true)
                .env("PATHNAME_CONFIG"),
        )
        .arg(
            Arg::new("max-path-len")
                .long("max-path-len")
                .help("Maximum pathname length in bytes")
                .value_name("N")
                .global(true)
                .env("PATHNAME_MAX_PATH_LEN"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_name("FORMAT")
                .value_parser(["plain", "json"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Normalize a path lexically")
                .arg(path_arg()),
            component_command("extension", "Print the extension of the last segment"),
            component_command("rootname", "Print the path with its extension removed"),
            component_command("dirname", "Print the directory part of a path"),
            component_command("tailname", "Print the last segment of a path"),
            component_command("filename", "Print the file name of a path"),
            Command::new("concat")
                .about("Join two paths")
                .long_about("Join two paths, inserting a separator when SUFFIX is relative")
                .arg(Arg::new("prefix").value_name("PREFIX").required(true))
                .arg(Arg::new("suffix").value_name("SUFFIX").required(true))
                .arg(
                    Arg::new("normalize")
                        .long("normalize")
                        .help("Normalize the joined path")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("segments")
                .about("List the segments of a path")
                .arg(path_arg()),
            Command::new("inspect")
                .about("Report a path's flags and components")
                .arg(path_arg()),
            Command::new("realpath")
                .about("Resolve a path against the filesystem")
                .arg(path_arg()),
            Command::new("validate")
                .about("Validate a configuration file")
                .arg(Arg::new("config").value_name("CONFIG").required(true)),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("pathname.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
