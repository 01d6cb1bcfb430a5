//! CLI structure and command definitions.

use crate::commands::{
    AncestorsCommand, CheckCommand, FileNameCommand, JoinCommand, ParentCommand,
    RelationshipCommand,
};
use abspath::PathStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for validating and composing absolute paths.
#[derive(Parser)]
#[command(name = "abspath")]
#[command(version, about = "Validate and compose absolute paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path style used to normalize arguments (posix or windows)
    #[arg(long, value_name = "STYLE", global = true)]
    pub style: Option<PathStyle>,

    /// YAML configuration file
    #[arg(long, value_name = "FILE", global = true, env = "ABSPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate that a path is absolute and print its normalized form
    Check(CheckCommand),

    /// Print the parent of an absolute path
    Parent(ParentCommand),

    /// Print the last segment of an absolute path
    FileName(FileNameCommand),

    /// Join additions onto an absolute base path
    Join(JoinCommand),

    /// Print a path followed by each of its ancestors
    Ancestors(AncestorsCommand),

    /// Describe how two absolute paths relate
    Relationship(RelationshipCommand),
}
