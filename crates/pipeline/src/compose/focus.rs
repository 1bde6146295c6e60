//! Focus points: one short line per leading source.

use crate::types::SourceDocument;

/// Focus points shown when no source is available.
pub const FOCUS_PLACEHOLDER: &str =
    "No live sources returned. Using stored market heuristics for guidance.";

/// Default number of focus points.
pub const DEFAULT_FOCUS_DEPTH: usize = 3;

/// Snippet length, in characters, before truncation.
pub const FOCUS_SNIPPET_CHARS: usize = 110;

/// Render `"<hostname>: <snippet>"` for the first `depth` sources.
///
/// Snippets longer than [`FOCUS_SNIPPET_CHARS`] are cut and end with `…`.
pub fn focus_points(sources: &[SourceDocument], depth: usize) -> Vec<String> {
    if sources.is_empty() {
        return vec![FOCUS_PLACEHOLDER.to_string()];
    }

    sources
        .iter()
        .take(depth)
        .map(|source| format!("{}: {}", source.hostname, truncate(&source.snippet)))
        .collect()
}

fn truncate(snippet: &str) -> String {
    if snippet.chars().count() <= FOCUS_SNIPPET_CHARS {
        return snippet.to_string();
    }
    let mut cut: String = snippet.chars().take(FOCUS_SNIPPET_CHARS).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(host: &str, snippet: &str) -> SourceDocument {
        SourceDocument::new("t", format!("https://{}/", host), snippet, 1)
    }

    #[test]
    fn test_empty_sources_give_placeholder() {
        for depth in [0, 1, 3, 10] {
            assert_eq!(focus_points(&[], depth), vec![FOCUS_PLACEHOLDER.to_string()]);
        }
    }

    #[test]
    fn test_depth_limits_entries() {
        let sources = vec![source("a.org", "one"), source("b.org", "two"), source("c.org", "three")];
        let points = focus_points(&sources, 2);
        assert_eq!(points, vec!["a.org: one", "b.org: two"]);
        assert_eq!(focus_points(&sources, 10).len(), 3);
    }

    #[test]
    fn test_long_snippet_truncated_with_ellipsis() {
        let long = "é".repeat(150);
        let points = focus_points(&[source("fao.org", &long)], 3);
        let rendered = points[0].strip_prefix("fao.org: ").unwrap();

        assert_eq!(rendered.chars().count(), FOCUS_SNIPPET_CHARS + 1);
        assert!(rendered.ends_with('…'));
    }

    #[test]
    fn test_exact_length_not_truncated() {
        let exact = "x".repeat(FOCUS_SNIPPET_CHARS);
        let points = focus_points(&[source("fao.org", &exact)], 1);
        assert!(!points[0].ends_with('…'));
    }
}
