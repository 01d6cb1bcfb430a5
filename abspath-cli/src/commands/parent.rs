//! Command to print the parent of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use abspath::AbsolutePath;
use clap::Args;
use serde::Serialize;

/// Print the parent of an absolute path.
///
/// A root has no parent: nothing is printed and the command still succeeds.
#[derive(Args)]
pub struct ParentCommand {
    /// Absolute path whose parent to print
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Serialize)]
struct ParentReport {
    path: AbsolutePath,
    parent: Option<AbsolutePath>,
}

impl ParentCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.absolute(&self.path)?;
        let parent = path.parent();
        if parent.is_none() {
            log::info!("{path} is a root and has no parent");
        }

        let plain = parent.as_ref().map(ToString::to_string).unwrap_or_default();
        global.emit(&ParentReport { path, parent }, &plain)
    }
}
