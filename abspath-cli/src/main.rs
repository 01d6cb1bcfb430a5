//! Main entry point for the abspath CLI.
//!
//! This is the command-line interface for validating and composing
//! absolute paths:
//! - `check`: Validate that a path is absolute
//! - `parent`: Print a path's parent
//! - `file-name`: Print a path's last segment
//! - `join`: Join relative or absolute additions onto a base
//! - `ancestors`: Print a path and all of its ancestors
//! - `relationship`: Describe how two paths relate

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    abspath::init_logger(cli.verbose, cli.quiet).install();

    let result = utils::GlobalOptions::from_cli(&cli).and_then(|global| match cli.command {
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Parent(cmd) => cmd.execute(&global),
        cli::Command::FileName(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Ancestors(cmd) => cmd.execute(&global),
        cli::Command::Relationship(cmd) => cmd.execute(&global),
    });

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
