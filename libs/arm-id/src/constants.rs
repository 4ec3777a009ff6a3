//! Literal keywords and separator of the identifier grammar.

/// Keyword introducing the subscription id.
pub const SUBSCRIPTIONS: &str = "subscriptions";

/// Keyword introducing the resource group name.
pub const RESOURCE_GROUPS: &str = "resourceGroups";

/// Keyword introducing the provider namespace.
pub const PROVIDERS: &str = "providers";

/// Segment separator.
pub const SEPARATOR: char = '/';

/// Splits a path into its non-empty segments.
///
/// Leading, trailing, and doubled separators produce no segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|segment| !segment.is_empty())
}

/// Returns true if `segment` is the given keyword, ignoring ASCII case.
pub fn keyword_matches(segment: &str, keyword: &str) -> bool {
    segment.eq_ignore_ascii_case(keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_skip_empty() {
        let parts: Vec<_> = segments("//a/b///c/").collect();
        assert_eq!(parts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_segments_of_separators_only() {
        assert_eq!(segments("///").count(), 0);
    }

    #[test]
    fn test_keyword_matches_ignores_case() {
        assert!(keyword_matches("SUBSCRIPTIONS", SUBSCRIPTIONS));
        assert!(keyword_matches("resourcegroups", RESOURCE_GROUPS));
        assert!(!keyword_matches("provider", PROVIDERS));
    }
}
