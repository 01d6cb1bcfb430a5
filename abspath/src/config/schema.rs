//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::style::PathStyle;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use abspath::config::Config;
/// use abspath::PathStyle;
///
/// let config = Config {
///     style: Some(PathStyle::Posix),
/// };
/// assert_eq!(config.style_or_host(), PathStyle::Posix);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path style used for raw strings; the host style when unset.
    pub style: Option<PathStyle>,
}

impl Config {
    /// Parse a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the
    /// text is not valid YAML for this schema.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The configured style, falling back to the host style.
    #[must_use]
    pub fn style_or_host(&self) -> PathStyle {
        self.style.unwrap_or_else(PathStyle::host)
    }

    /// Overlay `other` onto this configuration; set fields in `other` win.
    pub fn merge(&mut self, other: &Self) {
        if other.style.is_some() {
            self.style = other.style;
        }
    }
}
