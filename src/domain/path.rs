//! Hierarchy path handling: validation of query roots and decomposition
//! of parameter names into segment descriptors.

use std::fmt;

use crate::domain::entities::NodeIdentity;
use crate::domain::error::DomainError;

/// Hierarchy separator used by the parameter store.
pub const PATH_SEPARATOR: char = '/';

/// A validated query root such as `/Servers/Prod`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyPath(String);

impl HierarchyPath {
    /// Parse a query root. It must start with the separator.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidHierarchyPath {
                path: raw.to_string(),
                reason: "path is empty".to_string(),
            });
        }
        if !trimmed.starts_with(PATH_SEPARATOR) {
            return Err(DomainError::InvalidHierarchyPath {
                path: raw.to_string(),
                reason: format!("hierarchies start with '{}'", PATH_SEPARATOR),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HierarchyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One segment of a parameter path together with its ancestor link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Bare segment name, used as the display label
    pub name: String,
    /// Name of the preceding segment, None for the top-level segment
    pub parent: Option<String>,
    /// Path from root up to and including this segment, e.g. `/A/B`
    pub path: String,
    /// Path from root of the preceding segment
    pub parent_path: Option<String>,
}

impl Segment {
    /// Identity key of this segment under the given identity mode.
    pub fn key(&self, identity: NodeIdentity) -> &str {
        match identity {
            NodeIdentity::Path => &self.path,
            NodeIdentity::Name => &self.name,
        }
    }

    /// Identity key of the parent segment under the given identity mode.
    pub fn parent_key(&self, identity: NodeIdentity) -> Option<&str> {
        match identity {
            NodeIdentity::Path => self.parent_path.as_deref(),
            NodeIdentity::Name => self.parent.as_deref(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Decompose a parameter path into ordered segment descriptors.
///
/// Empty segments (leading, doubled or trailing separators) are dropped.
/// The first descriptor is the top-level ancestor, the last one is the leaf.
/// `""` and `"/"` yield an empty sequence.
pub fn decompose(path: &str) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for name in path.split(PATH_SEPARATOR).filter(|s| !s.is_empty()) {
        let (parent, parent_path) = match segments.last() {
            Some(prev) => (Some(prev.name.clone()), Some(prev.path.clone())),
            None => (None, None),
        };
        let full = format!(
            "{}{}{}",
            parent_path.as_deref().unwrap_or(""),
            PATH_SEPARATOR,
            name
        );
        segments.push(Segment {
            name: name.to_string(),
            parent,
            path: full,
            parent_path,
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_nested_path_when_decomposing_then_links_each_segment_to_predecessor() {
        let segments = decompose("/Servers/Prod/DbHost");

        let links: Vec<_> = segments
            .iter()
            .map(|s| (s.name.as_str(), s.parent.as_deref()))
            .collect();
        assert_eq!(
            links,
            vec![
                ("Servers", None),
                ("Prod", Some("Servers")),
                ("DbHost", Some("Prod")),
            ]
        );
        assert_eq!(segments[2].path, "/Servers/Prod/DbHost");
        assert_eq!(segments[2].parent_path.as_deref(), Some("/Servers/Prod"));
    }

    #[test]
    fn given_path_without_separator_when_decomposing_then_single_root_segment() {
        let segments = decompose("DbHost");
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_root());
        assert_eq!(segments[0].path, "/DbHost");
    }

    #[rstest]
    #[case("")]
    #[case("/")]
    #[case("//")]
    fn given_only_empty_segments_when_decomposing_then_empty(#[case] path: &str) {
        assert!(decompose(path).is_empty());
    }

    #[rstest]
    #[case("/A/B/C")]
    #[case("/Servers/Prod/DbHost")]
    #[case("/single")]
    #[case("no/leading/slash")]
    fn given_valid_path_when_rejoining_segments_then_reconstructs_path(#[case] path: &str) {
        let rejoined = decompose(path)
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join("/");
        assert_eq!(rejoined, path.trim_start_matches('/'));
    }

    #[test]
    fn given_doubled_separator_when_decomposing_then_skips_empty_segment() {
        let names: Vec<_> = decompose("/A//B/").into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn given_identity_mode_when_keying_then_uses_path_or_name() {
        let segments = decompose("/A/B");
        assert_eq!(segments[1].key(NodeIdentity::Path), "/A/B");
        assert_eq!(segments[1].key(NodeIdentity::Name), "B");
        assert_eq!(segments[1].parent_key(NodeIdentity::Path), Some("/A"));
        assert_eq!(segments[1].parent_key(NodeIdentity::Name), Some("A"));
        assert_eq!(segments[0].parent_key(NodeIdentity::Path), None);
    }

    #[rstest]
    #[case("/Servers/Prod", true)]
    #[case("/", true)]
    #[case("Servers/Prod", false)]
    #[case("", false)]
    #[case("   ", false)]
    fn given_query_root_when_parsing_then_requires_leading_separator(
        #[case] raw: &str,
        #[case] ok: bool,
    ) {
        assert_eq!(HierarchyPath::parse(raw).is_ok(), ok);
    }
}
