//! Platform rule sets for path normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The platform rules a path is normalized under.
///
/// The style decides which characters separate segments, what the canonical
/// separator is, and what "absolute" means.
///
/// # Examples
///
/// ```
/// use abspath::PathStyle;
///
/// assert_eq!(PathStyle::Posix.separator(), '/');
/// assert_eq!(PathStyle::Windows.separator(), '\\');
/// assert_eq!("windows".parse::<PathStyle>().unwrap(), PathStyle::Windows);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// `/`-separated paths, rooted at `/`.
    Posix,

    /// `\`-separated paths (`/` also accepted), absolute only with a volume
    /// designator such as `C:\`.
    Windows,
}

impl PathStyle {
    /// The style of the platform this crate was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The separator written into normalized output.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` separates segments in this style.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    /// Whether this style carries volume designators.
    #[must_use]
    pub const fn has_volumes(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for PathStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "unix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            _ => Err(Error::Validation {
                field: "style".to_string(),
                message: format!("unknown path style '{s}' (expected 'posix' or 'windows')"),
            }),
        }
    }
}
