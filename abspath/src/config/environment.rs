//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ABSPATH_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::style::PathStyle;

/// Environment variable naming the default path style.
pub const STYLE_VAR: &str = "ABSPATH_STYLE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use abspath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `ABSPATH_STYLE` is set to anything
    /// other than `posix` or `windows`.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(STYLE_VAR) {
            let style = value.parse::<PathStyle>().map_err(|_| Error::Validation {
                field: STYLE_VAR.to_string(),
                message: format!("must be 'posix' or 'windows', got '{value}'"),
            })?;
            log::debug!("{STYLE_VAR} overrides path style to {style}");
            config.style = Some(style);
        }
        Ok(())
    }
}
