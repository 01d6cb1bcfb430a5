//! The validated absolute path type.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Div;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::path::local::LocalPath;
use crate::path::relationship::PathRelationship;
use crate::path::style::PathStyle;

/// A normalized path that is guaranteed to be absolute.
///
/// Every instance wraps a [`LocalPath`] whose
/// [`is_absolute`](LocalPath::is_absolute) is true. The only fallible entry
/// points are the constructors that take raw strings; everything derived
/// from an existing `AbsolutePath` (parents, joins) is total.
///
/// Equality and hashing delegate to the wrapped value and are
/// case-sensitive on every platform. Callers on case-insensitive
/// filesystems must fold case themselves before construction.
///
/// Serde uses the canonical string. Deserialization accepts a path of
/// either style, see [`with_any_style`](Self::with_any_style), so values
/// survive a round trip on any host.
///
/// # Examples
///
/// ```
/// use abspath::{AbsolutePath, PathStyle};
///
/// let home = AbsolutePath::with_style("/home/user", PathStyle::Posix).unwrap();
/// assert_eq!(home.file_name(), "user");
/// assert_eq!(home.parent().unwrap().as_str(), "/home");
///
/// let src = home.try_join("project/src").unwrap();
/// assert_eq!(src.as_str(), "/home/user/project/src");
///
/// assert!(AbsolutePath::with_style("relative/path", PathStyle::Posix).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct AbsolutePath {
    inner: LocalPath,
}

impl AbsolutePath {
    /// Create an absolute path from `raw`, normalized under the host style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAbsolute`] if `raw` does not normalize to an
    /// absolute path, or [`Error::InvalidPath`] if it cannot represent a path
    /// at all.
    pub fn new(raw: &str) -> Result<Self> {
        Self::with_style(raw, PathStyle::host())
    }

    /// Create an absolute path from `raw`, normalized under `style`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAbsolute`] if `raw` does not normalize to an
    /// absolute path, or [`Error::InvalidPath`] if it cannot represent a path
    /// at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsolutePath, PathStyle};
    ///
    /// let path = AbsolutePath::with_style("c:/Program Files/./App", PathStyle::Windows).unwrap();
    /// assert_eq!(path.as_str(), r"C:\Program Files\App");
    ///
    /// let err = AbsolutePath::with_style(r"\no\volume", PathStyle::Windows).unwrap_err();
    /// assert!(err.is_not_absolute());
    /// ```
    pub fn with_style(raw: &str, style: PathStyle) -> Result<Self> {
        let local = LocalPath::with_style(raw, style)?;
        Self::validate(local, raw)
    }

    /// Create an absolute path from `raw` under whichever style accepts it.
    ///
    /// The host style is tried first. Absolute forms never overlap between
    /// styles (`/...` against `C:\...`), so at most one style succeeds and the
    /// result is unambiguous.
    ///
    /// # Errors
    ///
    /// Returns the host style's error when neither style accepts `raw`.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsolutePath, PathStyle};
    ///
    /// let windows = AbsolutePath::with_any_style(r"c:\Temp").unwrap();
    /// assert_eq!(windows.style(), PathStyle::Windows);
    ///
    /// let posix = AbsolutePath::with_any_style("/tmp").unwrap();
    /// assert_eq!(posix.style(), PathStyle::Posix);
    ///
    /// assert!(AbsolutePath::with_any_style("tmp").unwrap_err().is_not_absolute());
    /// ```
    pub fn with_any_style(raw: &str) -> Result<Self> {
        let host = PathStyle::host();
        Self::with_style(raw, host).or_else(|err| {
            if !err.is_not_absolute() {
                return Err(err);
            }
            let other = match host {
                PathStyle::Posix => PathStyle::Windows,
                PathStyle::Windows => PathStyle::Posix,
            };
            Self::with_style(raw, other).map_err(|_| err)
        })
    }

    fn validate(local: LocalPath, input: &str) -> Result<Self> {
        if local.is_absolute() {
            log::trace!("accepted absolute path {local}");
            Ok(Self::from_trusted(local))
        } else {
            log::debug!("rejected non-absolute path {input:?} (normalized to {local})");
            Err(Error::NotAbsolute {
                input: input.to_string(),
            })
        }
    }

    /// Wrap a value the caller has already proven absolute.
    ///
    /// Used by `parent` and `join`: dropping a trailing segment keeps the
    /// root and volume, and combining onto an absolute base stays absolute.
    pub(crate) fn from_trusted(inner: LocalPath) -> Self {
        debug_assert!(inner.is_absolute(), "trusted path {inner} is not absolute");
        Self { inner }
    }

    /// The canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// The wrapped path value.
    #[must_use]
    pub fn as_local(&self) -> &LocalPath {
        &self.inner
    }

    /// Convert into the wrapped path value.
    #[must_use]
    pub fn into_local(self) -> LocalPath {
        self.inner
    }

    /// The style this path was normalized under.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.inner.style()
    }

    /// The path with its last segment removed, or `None` for a root.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsolutePath, PathStyle};
    ///
    /// let path = AbsolutePath::with_style("/a/b", PathStyle::Posix).unwrap();
    /// let parent = path.parent().unwrap();
    /// assert_eq!(parent.as_str(), "/a");
    /// assert_eq!(parent.parent().unwrap().as_str(), "/");
    /// assert!(parent.parent().unwrap().parent().is_none());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.inner.parent().map(Self::from_trusted)
    }

    /// Iterate over this path and each of its ancestors, ending at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsolutePath, PathStyle};
    ///
    /// let path = AbsolutePath::with_style("/a/b", PathStyle::Posix).unwrap();
    /// let chain: Vec<String> = path.ancestors().map(|p| p.to_string()).collect();
    /// assert_eq!(chain, ["/a/b", "/a", "/"]);
    /// ```
    #[must_use]
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: Some(self.clone()),
        }
    }

    /// The full text of the last segment. Empty for a root.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.inner.file_name()
    }

    /// Join `addition` onto this path.
    ///
    /// An absolute `addition` supersedes this path entirely, including its
    /// style. A relative one is read under this path's style, appended and
    /// the result renormalized, so `..` segments may climb back up, though
    /// never above the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsolutePath, LocalPath, PathStyle};
    ///
    /// let base = AbsolutePath::with_style("/a/b", PathStyle::Posix).unwrap();
    /// let rel = LocalPath::with_style("c/d", PathStyle::Posix).unwrap();
    /// assert_eq!(base.join(&rel).as_str(), "/a/b/c/d");
    ///
    /// let other = AbsolutePath::with_style("/x/y", PathStyle::Posix).unwrap();
    /// assert_eq!(base.join(&other), other);
    /// ```
    #[must_use]
    pub fn join<P: AsRef<LocalPath>>(&self, addition: P) -> Self {
        let joined = self.inner.combine(addition.as_ref());
        log::trace!("joined {} onto {self} -> {joined}", addition.as_ref());
        Self::from_trusted(joined)
    }

    /// Join a raw string onto this path.
    ///
    /// The string is normalized under this path's style first. Relative
    /// input is expected and valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `addition` cannot represent a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsolutePath, PathStyle};
    ///
    /// let base = AbsolutePath::with_style("/a/b", PathStyle::Posix).unwrap();
    /// assert_eq!(base.try_join("c/d").unwrap().as_str(), "/a/b/c/d");
    /// assert_eq!(base.try_join("/x/y").unwrap().as_str(), "/x/y");
    /// assert_eq!(base.try_join("../../..").unwrap().as_str(), "/");
    /// ```
    pub fn try_join(&self, addition: &str) -> Result<Self> {
        let addition = LocalPath::with_style(addition, self.style())?;
        Ok(self.join(&addition))
    }

    /// Classify how `other` sits relative to this path.
    #[must_use]
    pub fn relationship(&self, other: &Self) -> PathRelationship {
        PathRelationship::between(self, other)
    }

    /// Whether `base` is this path or one of its ancestors.
    ///
    /// Compares whole segments: `/ab` does not start with `/a`.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsolutePath, PathStyle};
    ///
    /// let path = AbsolutePath::with_style("/ab/c", PathStyle::Posix).unwrap();
    /// let base = AbsolutePath::with_style("/ab", PathStyle::Posix).unwrap();
    /// let prefix = AbsolutePath::with_style("/a", PathStyle::Posix).unwrap();
    /// assert!(path.starts_with(&base));
    /// assert!(!path.starts_with(&prefix));
    /// ```
    #[must_use]
    pub fn starts_with(&self, base: &Self) -> bool {
        PathRelationship::is_within(self, base)
    }
}

/// Iterator returned by [`AbsolutePath::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<AbsolutePath>,
}

impl Iterator for Ancestors {
    type Item = AbsolutePath;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

impl FusedIterator for Ancestors {}

impl fmt::Debug for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl AsRef<LocalPath> for AbsolutePath {
    fn as_ref(&self) -> &LocalPath {
        &self.inner
    }
}

impl AsRef<str> for AbsolutePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for AbsolutePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for AbsolutePath {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for AbsolutePath {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl TryFrom<LocalPath> for AbsolutePath {
    type Error = Error;

    fn try_from(local: LocalPath) -> Result<Self> {
        let input = local.as_str().to_string();
        Self::validate(local, &input)
    }
}

impl<'de> Deserialize<'de> for AbsolutePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::with_any_style(&raw).map_err(serde::de::Error::custom)
    }
}

impl From<AbsolutePath> for LocalPath {
    fn from(path: AbsolutePath) -> Self {
        path.inner
    }
}

impl From<AbsolutePath> for String {
    fn from(path: AbsolutePath) -> Self {
        path.inner.into_string()
    }
}

impl PartialEq<str> for AbsolutePath {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for AbsolutePath {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<P: AsRef<LocalPath>> Div<P> for &AbsolutePath {
    type Output = AbsolutePath;

    fn div(self, addition: P) -> AbsolutePath {
        self.join(addition)
    }
}

impl<P: AsRef<LocalPath>> Div<P> for AbsolutePath {
    type Output = AbsolutePath;

    fn div(self, addition: P) -> AbsolutePath {
        self.join(addition)
    }
}
