//! Command to validate a path argument.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use abspath::PathStyle;
use clap::Args;
use serde::Serialize;

/// Validate that a path is absolute and print its normalized form.
#[derive(Args)]
pub struct CheckCommand {
    /// Path to validate
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    input: &'a str,
    path: String,
    style: PathStyle,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.absolute(&self.path)?;
        log::info!("{} is absolute", self.path);

        let report = CheckReport {
            input: &self.path,
            path: path.to_string(),
            style: path.style(),
        };
        global.emit(&report, path.as_str())
    }
}
