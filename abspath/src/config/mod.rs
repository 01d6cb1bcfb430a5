//! Configuration for path handling.
//!
//! Configuration decides which [`PathStyle`](crate::PathStyle) raw strings
//! are normalized under when no style is given explicitly.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (a caller setting `Config::style` directly)
//! 2. Environment variables (`ABSPATH_*`)
//! 3. A YAML configuration file
//! 4. Built-in defaults (the host style)
//!
//! # Examples
//!
//! ```
//! use abspath::config::Config;
//! use abspath::PathStyle;
//!
//! let config = Config::from_yaml_str("style: windows\n").unwrap();
//! assert_eq!(config.style_or_host(), PathStyle::Windows);
//!
//! let config = Config::default();
//! assert_eq!(config.style_or_host(), PathStyle::host());
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::Config;
