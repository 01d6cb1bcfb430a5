//! Command to classify how two paths relate.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use abspath::{AbsolutePath, PathRelationship};
use clap::Args;
use serde::Serialize;

/// Describe how two absolute paths relate in the directory hierarchy.
#[derive(Args)]
pub struct RelationshipCommand {
    /// First absolute path
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second absolute path
    #[arg(value_name = "SECOND")]
    pub second: String,
}

#[derive(Serialize)]
struct RelationshipReport<'a> {
    first: &'a AbsolutePath,
    second: &'a AbsolutePath,
    relationship: &'static str,
    description: String,
}

fn relationship_name(relationship: PathRelationship) -> &'static str {
    match relationship {
        PathRelationship::Ancestor => "ancestor",
        PathRelationship::Descendant => "descendant",
        PathRelationship::Same => "same",
        PathRelationship::Unrelated => "unrelated",
    }
}

impl RelationshipCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let first = global.absolute(&self.first)?;
        let second = global.absolute(&self.second)?;

        let relationship = first.relationship(&second);
        let description = relationship.description(&first, &second);

        let report = RelationshipReport {
            first: &first,
            second: &second,
            relationship: relationship_name(relationship),
            description: description.clone(),
        };
        global.emit(&report, &description)
    }
}
