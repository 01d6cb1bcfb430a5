//! Property-based tests for path handling.
//!
//! Note: the normalize and absolute modules already carry quick property
//! tests. This module runs heavier cases across both styles and covers
//! path relationships.

use super::{AbsolutePath, LocalPath, PathRelationship, PathStyle};
use proptest::prelude::*;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn style_strategy() -> impl Strategy<Value = PathStyle> {
    prop_oneof![Just(PathStyle::Posix), Just(PathStyle::Windows)]
}

fn absolute_path_strategy() -> impl Strategy<Value = AbsolutePath> {
    style_strategy().prop_flat_map(absolute_path_in_style)
}

fn absolute_path_in_style(style: PathStyle) -> impl Strategy<Value = AbsolutePath> {
    prop::collection::vec(path_component_strategy(), 0..8).prop_map(move |parts| {
        let root = match style {
            PathStyle::Posix => "/",
            PathStyle::Windows => "C:\\",
        };
        let raw = format!("{root}{}", parts.join("/"));
        AbsolutePath::with_style(&raw, style).unwrap()
    })
}

fn same_style_pair_strategy() -> impl Strategy<Value = (AbsolutePath, AbsolutePath)> {
    style_strategy()
        .prop_flat_map(|style| (absolute_path_in_style(style), absolute_path_in_style(style)))
}

fn relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => path_component_strategy(),
            1 => Just("..".to_string()),
            1 => Just(".".to_string()),
        ],
        0..6,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Re-validating the canonical form gives back an equal path
    #[test]
    fn canonical_form_round_trips(path in absolute_path_strategy()) {
        let again = AbsolutePath::with_style(path.as_str(), path.style()).unwrap();
        prop_assert_eq!(again, path);
    }

    // Every ancestor is absolute, keeps the style, and contains the path
    #[test]
    fn ancestors_are_absolute_containers(path in absolute_path_strategy()) {
        for ancestor in path.ancestors() {
            prop_assert!(ancestor.as_local().is_absolute());
            prop_assert_eq!(ancestor.style(), path.style());
            prop_assert!(PathRelationship::contains(&ancestor, &path));
        }
    }

    // Joining a relative addition never leaves the base's volume
    #[test]
    fn join_relative_stays_absolute(path in absolute_path_strategy(), addition in relative_strategy()) {
        let joined = path.try_join(&addition).unwrap();
        prop_assert!(joined.as_local().is_absolute());
        let root = path.ancestors().last().unwrap();
        prop_assert!(joined.starts_with(&root));
    }

    // Joining relative segments without `..` yields a descendant (or the same path)
    #[test]
    fn join_plain_segments_descends(path in absolute_path_strategy(), parts in prop::collection::vec(path_component_strategy(), 1..4)) {
        let joined = path.try_join(&parts.join("/")).unwrap();
        prop_assert_eq!(PathRelationship::between(&path, &joined), PathRelationship::Ancestor);
        prop_assert_eq!(joined.file_name(), parts.last().unwrap().as_str());
    }

    // Joining an absolute path of the same style returns that path unchanged
    #[test]
    fn join_absolute_replaces((path, other) in same_style_pair_strategy()) {
        prop_assert_eq!(path.join(&other), other);
    }

    // An absolute addition wins even when its style differs from the base
    #[test]
    fn join_absolute_replaces_any_style(path in absolute_path_strategy(), other in absolute_path_strategy()) {
        let joined = path.join(&other);
        prop_assert_eq!(joined.style(), other.style());
        prop_assert_eq!(joined, other);
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn path_relationship_symmetric(path1 in absolute_path_strategy(), path2 in absolute_path_strategy()) {
        let rel_12 = PathRelationship::between(&path1, &path2);
        let rel_21 = PathRelationship::between(&path2, &path1);

        let is_symmetric = matches!(
            (rel_12, rel_21),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_12, rel_21);
    }

    // Parent and file name recompose the path
    #[test]
    fn parent_and_file_name_recompose(path in absolute_path_strategy()) {
        if let Some(parent) = path.parent() {
            let name = LocalPath::with_style(path.file_name(), path.style()).unwrap();
            prop_assert_eq!(parent.join(&name), path);
        } else {
            prop_assert_eq!(path.file_name(), "");
        }
    }
}
