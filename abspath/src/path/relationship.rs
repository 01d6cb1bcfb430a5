//! Path relationship checking.
//!
//! This module determines how two absolute paths relate to each other in the
//! directory hierarchy, such as whether one is an ancestor of the other.

use crate::path::absolute::AbsolutePath;

/// Relationship between two absolute paths.
///
/// # Examples
///
/// ```
/// use abspath::{AbsolutePath, PathRelationship, PathStyle};
///
/// let parent = AbsolutePath::with_style("/home/user", PathStyle::Posix).unwrap();
/// let child = AbsolutePath::with_style("/home/user/project", PathStyle::Posix).unwrap();
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Both paths are already normalized, so this compares whole segments of
    /// their canonical strings. Comparison is case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsolutePath, PathRelationship, PathStyle};
    ///
    /// let p = |s: &str| AbsolutePath::with_style(s, PathStyle::Posix).unwrap();
    ///
    /// assert_eq!(PathRelationship::between(&p("/a"), &p("/a/b")), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&p("/a/b"), &p("/a")), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&p("/a"), &p("/a/")), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&p("/a"), &p("/ab")), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &AbsolutePath, path2: &AbsolutePath) -> Self {
        if path1 == path2 {
            return Self::Same;
        }

        if is_segment_prefix(path1, path2) {
            return Self::Ancestor;
        }

        if is_segment_prefix(path2, path1) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    #[must_use]
    pub fn is_within(path: &AbsolutePath, directory: &AbsolutePath) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(path: &AbsolutePath, other: &AbsolutePath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsolutePath, PathRelationship, PathStyle};
    ///
    /// let a = AbsolutePath::with_style("/a", PathStyle::Posix).unwrap();
    /// let ab = AbsolutePath::with_style("/a/b", PathStyle::Posix).unwrap();
    ///
    /// let desc = PathRelationship::Ancestor.description(&a, &ab);
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &AbsolutePath, path2: &AbsolutePath) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}

/// Whether `base` is a strict, segment-aligned prefix of `path`.
fn is_segment_prefix(base: &AbsolutePath, path: &AbsolutePath) -> bool {
    let base_str = base.as_str();
    let path_str = path.as_str();
    let separator = base.style().separator();

    let Some(tail) = path_str.strip_prefix(base_str) else {
        return false;
    };
    !tail.is_empty() && (base_str.ends_with(separator) || tail.starts_with(separator))
}
