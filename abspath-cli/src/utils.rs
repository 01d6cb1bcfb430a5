//! Utility functions shared across CLI commands.

use crate::cli::Cli;
use crate::error::CliError;
use abspath::{AbsolutePath, ConfigLoader, PathStyle};
use serde::Serialize;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Style every path argument is normalized under.
    pub style: PathStyle,

    /// Print results as JSON.
    pub json: bool,
}

impl GlobalOptions {
    /// Resolve global options: `--style` flag, then environment, then the
    /// configuration file, then the host style.
    ///
    /// With `--style` set the environment is not consulted at all. An
    /// explicit `--config` file is still read so a broken file is reported.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let style = match cli.style {
            Some(style) => {
                if let Some(path) = cli.config.as_deref() {
                    ConfigLoader::load_file(path)?;
                }
                style
            }
            None => ConfigLoader::load(cli.config.as_deref())?.style_or_host(),
        };
        log::debug!("normalizing arguments with {style} style");
        Ok(Self {
            style,
            json: cli.json,
        })
    }

    /// Validate a path argument.
    pub fn absolute(&self, raw: &str) -> Result<AbsolutePath, CliError> {
        Ok(AbsolutePath::with_style(raw, self.style)?)
    }

    /// Print `report` as JSON, or `plain` when JSON output is off.
    ///
    /// An empty `plain` prints nothing.
    pub fn emit<T: Serialize>(&self, report: &T, plain: &str) -> Result<(), CliError> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(report)?);
        } else if !plain.is_empty() {
            println!("{plain}");
        }
        Ok(())
    }
}
