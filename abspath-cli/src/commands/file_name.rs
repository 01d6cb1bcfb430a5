//! Command to print the last segment of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use serde::Serialize;

/// Print the last segment of an absolute path.
///
/// A root has an empty file name.
#[derive(Args)]
pub struct FileNameCommand {
    /// Absolute path whose last segment to print
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Serialize)]
struct FileNameReport<'a> {
    path: &'a str,
    file_name: &'a str,
}

impl FileNameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.absolute(&self.path)?;
        let file_name = path.file_name();

        let report = FileNameReport {
            path: path.as_str(),
            file_name,
        };
        global.emit(&report, file_name)
    }
}
