//! Main entry point for the pathname CLI.
//!
//! This is the command-line interface for the pathname library. It
//! normalizes paths, derives their components, joins them and resolves
//! them against the filesystem.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use commands::Component;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        max_path_len: cli.max_path_len,
        format: cli.format,
    };

    // Route library logging through the CLI's verbosity
    if let Err(e) = global.logger().install() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    let result = match cli.command {
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Extension(cmd) => cmd.execute(Component::Extension, &global),
        Command::Rootname(cmd) => cmd.execute(Component::Rootname, &global),
        Command::Dirname(cmd) => cmd.execute(Component::Dirname, &global),
        Command::Tailname(cmd) => cmd.execute(Component::Tailname, &global),
        Command::Filename(cmd) => cmd.execute(Component::Filename, &global),
        Command::Concat(cmd) => cmd.execute(&global),
        Command::Segments(cmd) => cmd.execute(&global),
        Command::Inspect(cmd) => cmd.execute(&global),
        Command::Realpath(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
