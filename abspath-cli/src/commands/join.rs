//! Command to join additions onto a base path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use abspath::AbsolutePath;
use clap::Args;
use serde::Serialize;

/// Join one or more additions onto an absolute base path.
///
/// Additions are applied left to right. An absolute addition replaces
/// everything before it.
#[derive(Args)]
pub struct JoinCommand {
    /// Absolute base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Paths to join onto the base, relative or absolute
    #[arg(value_name = "ADDITION", required = true)]
    pub additions: Vec<String>,
}

#[derive(Serialize)]
struct JoinReport<'a> {
    base: &'a AbsolutePath,
    additions: &'a [String],
    result: &'a AbsolutePath,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let base = global.absolute(&self.base)?;

        let mut result = base.clone();
        for addition in &self.additions {
            result = result.try_join(addition)?;
            log::debug!("joined {addition:?}: {result}");
        }

        let report = JoinReport {
            base: &base,
            additions: &self.additions,
            result: &result,
        };
        global.emit(&report, result.as_str())
    }
}
