//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `check`: Validate that a path is absolute
//! - `parent`: Print the parent of a path
//! - `file_name`: Print the last segment of a path
//! - `join`: Join additions onto a base path
//! - `ancestors`: Print a path and its ancestors
//! - `relationship`: Classify how two paths relate

pub mod ancestors;
pub mod check;
pub mod file_name;
pub mod join;
pub mod parent;
pub mod relationship;

pub use ancestors::AncestorsCommand;
pub use check::CheckCommand;
pub use file_name::FileNameCommand;
pub use join::JoinCommand;
pub use parent::ParentCommand;
pub use relationship::RelationshipCommand;
