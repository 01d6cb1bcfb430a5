//! Path normalization functions.
//!
//! This module turns raw strings into the canonical form stored by
//! [`LocalPath`](super::LocalPath):
//! - Splitting off a volume designator (Windows style only)
//! - Collapsing runs of separators
//! - Resolving `.` and `..` segments
//! - Rewriting separators to the style's canonical one
//!
//! Everything here is pure string manipulation. Nothing touches the
//! filesystem or the process environment.

use crate::error::{Error, Result};
use crate::path::style::PathStyle;

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Split a leading volume designator (`C:`) off `raw`.
///
/// Only [`PathStyle::Windows`] has volumes; for other styles the input is
/// returned untouched. The volume letter is uppercased.
///
/// # Examples
///
/// ```
/// use abspath::path::normalize::split_volume;
/// use abspath::PathStyle;
///
/// assert_eq!(split_volume(r"c:\Users", PathStyle::Windows), (Some('C'), r"\Users"));
/// assert_eq!(split_volume("c:/Users", PathStyle::Posix), (None, "c:/Users"));
/// assert_eq!(split_volume("Users", PathStyle::Windows), (None, "Users"));
/// ```
#[must_use]
pub fn split_volume(raw: &str, style: PathStyle) -> (Option<char>, &str) {
    if !style.has_volumes() {
        return (None, raw);
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => {
            (Some(letter.to_ascii_uppercase()), &raw[2..])
        }
        _ => (None, raw),
    }
}

/// Resolve `.` and `..` segments.
///
/// Empty segments (from repeated or trailing separators) and `.` are
/// dropped. `..` removes the previous normal segment. On a rooted path a
/// `..` with nothing left to remove is dropped, since the parent of the
/// root is the root. On an unrooted path it is kept.
///
/// # Examples
///
/// ```
/// use abspath::path::normalize::resolve_segments;
///
/// let resolved = resolve_segments("a/./b/../c".split('/'), true);
/// assert_eq!(resolved, vec!["a", "c"]);
///
/// let resolved = resolve_segments("../a/../..".split('/'), false);
/// assert_eq!(resolved, vec!["..", ".."]);
///
/// let resolved = resolve_segments("../../a".split('/'), true);
/// assert_eq!(resolved, vec!["a"]);
/// ```
pub fn resolve_segments<'a, I>(segments: I, rooted: bool) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result: Vec<&'a str> = Vec::new();

    for segment in segments {
        match segment {
            "" | CURRENT_DIR => {}
            PARENT_DIR => match result.last() {
                Some(&last) if last != PARENT_DIR => {
                    result.pop();
                }
                _ if rooted => {}
                _ => result.push(PARENT_DIR),
            },
            normal => result.push(normal),
        }
    }

    result
}

/// Normalize `raw` under `style`.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if `raw` contains a NUL character, which
/// no supported platform accepts inside a path. Relative input is never an
/// error here.
///
/// # Examples
///
/// ```
/// use abspath::path::normalize::normalize;
/// use abspath::PathStyle;
///
/// assert_eq!(normalize("/a/./b/../c/", PathStyle::Posix).unwrap(), "/a/c");
/// assert_eq!(normalize("a//b", PathStyle::Posix).unwrap(), "a/b");
/// assert_eq!(normalize("", PathStyle::Posix).unwrap(), ".");
/// assert_eq!(normalize("c:/Users/./me", PathStyle::Windows).unwrap(), r"C:\Users\me");
/// assert!(normalize("a\0b", PathStyle::Posix).is_err());
/// ```
pub fn normalize(raw: &str, style: PathStyle) -> Result<String> {
    if raw.contains('\0') {
        return Err(Error::InvalidPath {
            input: raw.to_string(),
            reason: "path contains a NUL character".to_string(),
        });
    }
    Ok(normalize_unchecked(raw, style))
}

/// Normalize input already known to be free of NUL characters.
pub(crate) fn normalize_unchecked(raw: &str, style: PathStyle) -> String {
    let (volume, rest) = split_volume(raw, style);
    let rooted = rest.starts_with(|c: char| style.is_separator(c));
    let segments = resolve_segments(rest.split(|c: char| style.is_separator(c)), rooted);
    render(volume, rooted, &segments, style)
}

/// Length in bytes of the volume and root prefix of a normalized value.
///
/// `"/a"` has prefix `"/"`, `r"C:\a"` has `r"C:\"`, `"C:a"` has `"C:"` and
/// `"a"` has none.
pub(crate) fn prefix_len(normalized: &str, style: PathStyle) -> usize {
    let (volume, rest) = split_volume(normalized, style);
    let volume_len = if volume.is_some() { 2 } else { 0 };
    if rest.starts_with(style.separator()) {
        volume_len + 1
    } else {
        volume_len
    }
}

fn render(volume: Option<char>, rooted: bool, segments: &[&str], style: PathStyle) -> String {
    let separator = style.separator();
    let capacity = segments.iter().map(|s| s.len() + 1).sum::<usize>() + 3;
    let mut out = String::with_capacity(capacity);

    if let Some(letter) = volume {
        out.push(letter);
        out.push(':');
    }
    if rooted {
        out.push(separator);
    }
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(segment);
    }

    if out.is_empty() {
        out.push_str(CURRENT_DIR);
    }
    out
}
