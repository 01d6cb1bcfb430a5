//! Command to print a path and all of its ancestors.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use abspath::AbsolutePath;
use clap::Args;
use serde::Serialize;

/// Print a path followed by each of its ancestors, ending at the root.
#[derive(Args)]
pub struct AncestorsCommand {
    /// Absolute path to walk upwards from
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Serialize)]
struct AncestorsReport {
    path: AbsolutePath,
    ancestors: Vec<AbsolutePath>,
}

impl AncestorsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.absolute(&self.path)?;
        let ancestors: Vec<AbsolutePath> = path.ancestors().collect();

        let plain = ancestors
            .iter()
            .map(AbsolutePath::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        global.emit(&AncestorsReport { path, ancestors }, &plain)
    }
}
