//! Normalized path values and the validated absolute path type.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Every path value is stored in canonical form, produced by
//! [`normalize::normalize`] under a [`PathStyle`]:
//! - Runs of separators collapse to one
//! - `.` segments are dropped and `..` segments resolved
//! - Trailing separators are removed (except on a root)
//! - Windows-style values use `\` and an uppercase volume letter
//!
//! Normalization is pure string work. Nothing here touches the filesystem,
//! so symlinks are never resolved.
//!
//! ## Local paths
//!
//! [`LocalPath`] is a normalized value that may be relative or absolute. It
//! provides parent and file name extraction, joining, and case-sensitive
//! equality.
//!
//! ## Absolute paths
//!
//! [`AbsolutePath`] wraps a `LocalPath` and guarantees it is absolute.
//! Validate once at a trust boundary, then pass the typed value around:
//!
//! ```
//! use abspath::{AbsolutePath, PathStyle};
//!
//! let root = AbsolutePath::with_style("/srv/app", PathStyle::Posix).unwrap();
//! let logs = root.try_join("var/log").unwrap();
//!
//! assert_eq!(logs.as_str(), "/srv/app/var/log");
//! assert!(logs.starts_with(&root));
//! assert_eq!(logs.parent().unwrap().file_name(), "var");
//! ```

pub mod absolute;
pub mod local;
pub mod normalize;
pub mod relationship;
pub mod style;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use absolute::{AbsolutePath, Ancestors};
pub use local::LocalPath;
pub use relationship::PathRelationship;
pub use style::PathStyle;
