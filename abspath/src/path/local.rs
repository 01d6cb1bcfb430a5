//! Normalized path values that may be relative or absolute.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::path::normalize::{self, normalize_unchecked, prefix_len, split_volume};
use crate::path::style::PathStyle;

/// A normalized path value, relative or absolute.
///
/// The stored string is always the output of
/// [`normalize`](crate::path::normalize::normalize) for the style the value
/// was built with. Equality, ordering and hashing compare that string only,
/// byte for byte: `/Home` and `/home` are different values on every
/// platform.
///
/// # Examples
///
/// ```
/// use abspath::{LocalPath, PathStyle};
///
/// let path = LocalPath::with_style("a/./b/../c", PathStyle::Posix).unwrap();
/// assert_eq!(path.as_str(), "a/c");
/// assert!(!path.is_absolute());
/// assert_eq!(path.file_name(), "c");
/// ```
#[derive(Clone)]
pub struct LocalPath {
    value: String,
    style: PathStyle,
}

impl LocalPath {
    /// Normalize `raw` under the host style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `raw` cannot represent a path.
    pub fn new(raw: &str) -> Result<Self> {
        Self::with_style(raw, PathStyle::host())
    }

    /// Normalize `raw` under `style`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `raw` cannot represent a path.
    /// Relative input is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{LocalPath, PathStyle};
    ///
    /// let path = LocalPath::with_style("c:/Windows/System32", PathStyle::Windows).unwrap();
    /// assert_eq!(path.as_str(), r"C:\Windows\System32");
    /// assert!(path.is_absolute());
    /// ```
    pub fn with_style(raw: &str, style: PathStyle) -> Result<Self> {
        let value = normalize::normalize(raw, style)?;
        Ok(Self { value, style })
    }

    /// Wrap a string that is already normalized under `style`.
    fn from_normalized(value: String, style: PathStyle) -> Self {
        debug_assert_eq!(normalize_unchecked(&value, style), value);
        Self { value, style }
    }

    /// The canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The style this value was normalized under.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// Convert into the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }

    /// Whether the value is rooted, and carries a volume where the style
    /// requires one.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{LocalPath, PathStyle};
    ///
    /// assert!(LocalPath::with_style("/a", PathStyle::Posix).unwrap().is_absolute());
    /// assert!(!LocalPath::with_style("/a", PathStyle::Windows).unwrap().is_absolute());
    /// assert!(!LocalPath::with_style("C:a", PathStyle::Windows).unwrap().is_absolute());
    /// assert!(LocalPath::with_style(r"C:\a", PathStyle::Windows).unwrap().is_absolute());
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        let (volume, rest) = split_volume(&self.value, self.style);
        let rooted = rest.starts_with(self.style.separator());
        rooted && (volume.is_some() || !self.style.has_volumes())
    }

    /// The value with its last segment removed.
    ///
    /// Returns `None` when there is no segment to remove: for a root, a
    /// bare volume, or `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{LocalPath, PathStyle};
    ///
    /// let path = LocalPath::with_style("/home/user", PathStyle::Posix).unwrap();
    /// assert_eq!(path.parent().unwrap().as_str(), "/home");
    ///
    /// let root = LocalPath::with_style("/", PathStyle::Posix).unwrap();
    /// assert!(root.parent().is_none());
    ///
    /// let single = LocalPath::with_style("user", PathStyle::Posix).unwrap();
    /// assert_eq!(single.parent().unwrap().as_str(), ".");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let prefix = prefix_len(&self.value, self.style);
        let rest = &self.value[prefix..];
        if rest.is_empty() || rest == "." {
            return None;
        }

        let parent = match rest.rfind(self.style.separator()) {
            Some(index) => &self.value[..prefix + index],
            None if prefix == 0 => ".",
            None => &self.value[..prefix],
        };
        Some(Self::from_normalized(parent.to_string(), self.style))
    }

    /// The full text of the last segment, extension included.
    ///
    /// Empty for a root, a bare volume, or `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{LocalPath, PathStyle};
    ///
    /// let path = LocalPath::with_style("/srv/archive.tar.gz", PathStyle::Posix).unwrap();
    /// assert_eq!(path.file_name(), "archive.tar.gz");
    /// assert_eq!(LocalPath::with_style("/", PathStyle::Posix).unwrap().file_name(), "");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> &str {
        let rest = &self.value[prefix_len(&self.value, self.style)..];
        if rest == "." {
            return "";
        }
        rest.rsplit(self.style.separator()).next().unwrap_or_default()
    }

    /// Join `other` onto this value.
    ///
    /// If `other` is absolute in its own style it replaces this value
    /// entirely, style included. A relative `other` is read under this
    /// value's style, concatenated with the style's separator and
    /// renormalized.
    ///
    /// Windows style adds two volume rules. A rooted `other` without a volume
    /// (`\x`) keeps this value's volume. A volume-relative `other` (`D:x`)
    /// appends when the volumes match; when they differ it resolves against
    /// the root of its own volume if this value is absolute, and replaces
    /// this value otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{LocalPath, PathStyle};
    ///
    /// let base = LocalPath::with_style("/a/b", PathStyle::Posix).unwrap();
    /// let rel = LocalPath::with_style("../c", PathStyle::Posix).unwrap();
    /// let abs = LocalPath::with_style("/x", PathStyle::Posix).unwrap();
    ///
    /// assert_eq!(base.combine(&rel).as_str(), "/a/c");
    /// assert_eq!(base.combine(&abs).as_str(), "/x");
    /// ```
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        if other.is_absolute() {
            return other.clone();
        }

        let style = self.style;
        let other = if other.style == style {
            other.clone()
        } else {
            Self::from_normalized(normalize_unchecked(&other.value, style), style)
        };

        let (base_volume, _) = split_volume(&self.value, style);
        let (other_volume, other_rest) = split_volume(&other.value, style);

        let joined = match other_volume {
            Some(volume) if base_volume != Some(volume) => {
                if self.is_absolute() {
                    format!("{volume}:{}{other_rest}", style.separator())
                } else {
                    return other;
                }
            }
            _ if other_rest.starts_with(style.separator()) => match base_volume {
                Some(volume) => format!("{volume}:{other_rest}"),
                None => return other,
            },
            _ => self.concat(other_rest),
        };

        Self::from_normalized(normalize_unchecked(&joined, style), style)
    }

    /// Append a relative tail, inserting a separator unless this value is
    /// only a volume or root prefix.
    fn concat(&self, tail: &str) -> String {
        let prefix = prefix_len(&self.value, self.style);
        let mut out = String::with_capacity(self.value.len() + tail.len() + 1);
        out.push_str(&self.value);
        if self.value.len() > prefix {
            out.push(self.style.separator());
        }
        out.push_str(tail);
        out
    }
}

impl fmt::Debug for LocalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl fmt::Display for LocalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq for LocalPath {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for LocalPath {}

impl PartialOrd for LocalPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for LocalPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl AsRef<LocalPath> for LocalPath {
    fn as_ref(&self) -> &LocalPath {
        self
    }
}

impl AsRef<str> for LocalPath {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl FromStr for LocalPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for LocalPath {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<LocalPath> for String {
    fn from(path: LocalPath) -> Self {
        path.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn posix(raw: &str) -> LocalPath {
        LocalPath::with_style(raw, PathStyle::Posix).unwrap()
    }

    fn windows(raw: &str) -> LocalPath {
        LocalPath::with_style(raw, PathStyle::Windows).unwrap()
    }

    #[test]
    fn test_relative_accepted() {
        let path = posix("relative/path");
        assert_eq!(path.as_str(), "relative/path");
        assert!(!path.is_absolute());
    }

    #[test]
    fn test_nul_rejected() {
        assert!(LocalPath::with_style("a\0", PathStyle::Posix).is_err());
    }

    #[test]
    fn test_is_absolute_posix() {
        assert!(posix("/").is_absolute());
        assert!(posix("/a/b").is_absolute());
        assert!(!posix("a/b").is_absolute());
        assert!(!posix(".").is_absolute());
        assert!(!posix(r"C:\a").is_absolute());
    }

    #[test]
    fn test_is_absolute_windows() {
        assert!(windows(r"C:\").is_absolute());
        assert!(windows("c:/a").is_absolute());
        assert!(!windows(r"\a").is_absolute());
        assert!(!windows("C:a").is_absolute());
        assert!(!windows("C:").is_absolute());
        assert!(!windows("a").is_absolute());
    }

    #[test]
    fn test_parent_posix() {
        assert_eq!(posix("/a/b/c").parent().unwrap(), posix("/a/b"));
        assert_eq!(posix("/a").parent().unwrap(), posix("/"));
        assert!(posix("/").parent().is_none());
        assert_eq!(posix("a/b").parent().unwrap(), posix("a"));
        assert_eq!(posix("a").parent().unwrap(), posix("."));
        assert!(posix(".").parent().is_none());
        assert_eq!(posix("../..").parent().unwrap(), posix(".."));
    }

    #[test]
    fn test_parent_windows() {
        assert_eq!(windows(r"C:\a\b").parent().unwrap().as_str(), r"C:\a");
        assert_eq!(windows(r"C:\a").parent().unwrap().as_str(), r"C:\");
        assert!(windows(r"C:\").parent().is_none());
        assert_eq!(windows("C:a").parent().unwrap().as_str(), "C:");
        assert!(windows("C:").parent().is_none());
        assert_eq!(windows(r"\a").parent().unwrap().as_str(), r"\");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(posix("/home/user").file_name(), "user");
        assert_eq!(posix("/a/b.tar.gz").file_name(), "b.tar.gz");
        assert_eq!(posix("/").file_name(), "");
        assert_eq!(posix(".").file_name(), "");
        assert_eq!(posix("a").file_name(), "a");
        assert_eq!(posix("..").file_name(), "..");
        assert_eq!(windows(r"C:\dir\file.txt").file_name(), "file.txt");
        assert_eq!(windows(r"C:\").file_name(), "");
        assert_eq!(windows("C:").file_name(), "");
    }

    #[test]
    fn test_combine_posix() {
        assert_eq!(posix("/a/b").combine(&posix("c/d")), posix("/a/b/c/d"));
        assert_eq!(posix("/a/b").combine(&posix("/x/y")), posix("/x/y"));
        assert_eq!(posix("/").combine(&posix("x")), posix("/x"));
        assert_eq!(posix("/a").combine(&posix("../../..")), posix("/"));
        assert_eq!(posix("/a").combine(&posix(".")), posix("/a"));
        assert_eq!(posix(".").combine(&posix("x")), posix("x"));
        assert_eq!(posix("a").combine(&posix("../..")), posix(".."));
    }

    #[test]
    fn test_combine_windows() {
        let base = windows(r"C:\a");
        assert_eq!(base.combine(&windows("b")).as_str(), r"C:\a\b");
        assert_eq!(base.combine(&windows(r"D:\x")).as_str(), r"D:\x");
        assert_eq!(base.combine(&windows(r"\x")).as_str(), r"C:\x");
        assert_eq!(base.combine(&windows("C:x")).as_str(), r"C:\a\x");
        assert_eq!(base.combine(&windows("D:x")).as_str(), r"D:\x");
        assert_eq!(windows(r"C:\").combine(&windows("x")).as_str(), r"C:\x");
    }

    #[test]
    fn test_combine_windows_relative_base() {
        assert_eq!(windows("C:").combine(&windows("x")).as_str(), "C:x");
        assert_eq!(windows("a").combine(&windows("D:x")).as_str(), "D:x");
        assert_eq!(windows("a").combine(&windows(r"\x")).as_str(), r"\x");
    }

    #[test]
    fn test_combine_relative_other_read_in_base_style() {
        let base = windows(r"C:\a");
        let other = posix("b/c");
        assert_eq!(base.combine(&other).as_str(), r"C:\a\b\c");
    }

    #[test]
    fn test_combine_absolute_other_style_replaces() {
        let joined = posix("/a").combine(&windows(r"C:\x"));
        assert_eq!(joined.as_str(), r"C:\x");
        assert_eq!(joined.style(), PathStyle::Windows);

        let joined = windows(r"C:\a").combine(&posix("/x"));
        assert_eq!(joined.as_str(), "/x");
        assert_eq!(joined.style(), PathStyle::Posix);
    }

    #[test]
    fn test_combine_other_style_relative_is_rebased() {
        // `\x` is only rooted under Windows rules; under Posix it is a segment
        let joined = posix("/a").combine(&windows(r"\x"));
        assert_eq!(joined.as_str(), r"/a/\x");
        assert_eq!(joined.style(), PathStyle::Posix);
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_ne!(posix("/Home"), posix("/home"));
        assert_eq!(posix("/a/./b"), posix("/a/b"));
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(posix("/a/b"));
        assert!(set.contains(&posix("/a//b/")));
        assert!(!set.contains(&posix("/A/b")));
    }

    #[test]
    fn test_display_and_debug() {
        let path = posix("/a/b");
        assert_eq!(path.to_string(), "/a/b");
        assert_eq!(format!("{path:?}"), "\"/a/b\"");
    }
}
