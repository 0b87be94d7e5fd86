//! Relation Paths - dot-chained segments with optional "as" aliases

/// One hop in a relation path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// Relation name on the current entity
    pub relation: String,

    /// Table alias for this hop, parsed from a trailing `as` clause
    pub alias: Option<String>,
}

impl PathSegment {
    /// Parse raw segment text, extracting an alias introduced by a
    /// case-insensitive `as` keyword. The alias is the first non-empty
    /// token following the keyword.
    pub fn parse(raw: &str) -> Self {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if let Some(pos) = tokens.iter().position(|t| t.eq_ignore_ascii_case("as")) {
            if pos > 0 && pos + 1 < tokens.len() {
                return Self {
                    relation: tokens[..pos].join(" "),
                    alias: Some(tokens[pos + 1].to_string()),
                };
            }
        }
        Self {
            relation: tokens.join(" "),
            alias: None,
        }
    }
}

/// An ordered sequence of parsed path segments, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationPath {
    segments: Vec<PathSegment>,
}

impl RelationPath {
    /// The parsed segments, in traversal order
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&str> for RelationPath {
    /// Split a dot-delimited path into segments
    fn from(path: &str) -> Self {
        Self {
            segments: path
                .split('.')
                .filter(|segment| !segment.trim().is_empty())
                .map(PathSegment::parse)
                .collect(),
        }
    }
}

impl From<String> for RelationPath {
    fn from(path: String) -> Self {
        Self::from(path.as_str())
    }
}

impl From<&[&str]> for RelationPath {
    /// Treat each element as one already-split segment
    fn from(segments: &[&str]) -> Self {
        Self {
            segments: segments.iter().map(|s| PathSegment::parse(s)).collect(),
        }
    }
}

impl From<Vec<&str>> for RelationPath {
    fn from(segments: Vec<&str>) -> Self {
        Self::from(segments.as_slice())
    }
}

impl<const N: usize> From<[&str; N]> for RelationPath {
    fn from(segments: [&str; N]) -> Self {
        Self::from(segments.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_segment_has_no_alias() {
        let segment = PathSegment::parse("post");
        assert_eq!(segment.relation, "post");
        assert_eq!(segment.alias, None);
    }

    #[test]
    fn trailing_as_clause_becomes_the_alias() {
        let segment = PathSegment::parse("author as post_authors");
        assert_eq!(segment.relation, "author");
        assert_eq!(segment.alias.as_deref(), Some("post_authors"));
    }

    #[test]
    fn alias_keyword_is_case_insensitive() {
        let segment = PathSegment::parse("author AS post_authors");
        assert_eq!(segment.relation, "author");
        assert_eq!(segment.alias.as_deref(), Some("post_authors"));
    }

    #[test]
    fn extra_whitespace_is_tolerated() {
        let segment = PathSegment::parse("  author   as   post_authors  ");
        assert_eq!(segment.relation, "author");
        assert_eq!(segment.alias.as_deref(), Some("post_authors"));
    }

    #[test]
    fn dangling_as_keyword_is_not_an_alias() {
        let segment = PathSegment::parse("author as");
        assert_eq!(segment.relation, "author as");
        assert_eq!(segment.alias, None);
    }

    #[test]
    fn dotted_string_splits_into_hops() {
        let path = RelationPath::from("post.author as post_authors");
        assert_eq!(path.len(), 2);
        assert_eq!(path.segments()[0].relation, "post");
        assert_eq!(path.segments()[1].alias.as_deref(), Some("post_authors"));
    }

    #[test]
    fn explicit_sequence_skips_dot_splitting() {
        let path = RelationPath::from(vec!["post", "author as post_authors"]);
        assert_eq!(path.len(), 2);
        assert_eq!(path.segments()[1].relation, "author");
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert!(RelationPath::from("").is_empty());
        assert_eq!(RelationPath::from("post.").len(), 1);
    }
}
