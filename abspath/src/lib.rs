#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # abspath
//!
//! Strongly-typed, normalized absolute paths.
//!
//! Validate a path once at a trust boundary (a configuration value, a
//! command-line argument) with [`AbsolutePath::new`], then pass the typed
//! value through internal APIs without re-checking it. Parents and joins of
//! an `AbsolutePath` are absolute by construction and never fail.
//!
//! ## Core Types
//!
//! - [`AbsolutePath`]: a path guaranteed to be absolute
//! - [`LocalPath`]: a normalized path that may be relative
//! - [`PathStyle`]: the platform rules used for normalization
//! - [`PathRelationship`]: ancestor/descendant classification
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use abspath::{AbsolutePath, PathStyle};
//!
//! let base = AbsolutePath::with_style("/a/b", PathStyle::Posix).unwrap();
//!
//! assert_eq!(base.try_join("c/d").unwrap().to_string(), "/a/b/c/d");
//! assert_eq!(base.try_join("/x/y").unwrap().to_string(), "/x/y");
//! assert!(AbsolutePath::with_style("/", PathStyle::Posix).unwrap().parent().is_none());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigLoader};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{AbsolutePath, Ancestors, LocalPath, PathRelationship, PathStyle};
