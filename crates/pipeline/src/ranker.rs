//! Deterministic keyword ranking for the fallback path.

use crate::keywords::tokenize;
use crate::types::SourceDocument;

/// Weight of a query token found in a title.
pub const TITLE_WEIGHT: u32 = 3;

/// Weight of a query token found in a snippet.
pub const SNIPPET_WEIGHT: u32 = 2;

/// Scores and orders corpus entries against a query.
///
/// Pure: the same query and corpus always produce the same output.
#[derive(Debug, Clone)]
pub struct SourceRanker {
    cap: usize,
}

impl SourceRanker {
    pub fn new(cap: usize) -> Self {
        Self { cap }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Rank `corpus` for `query`, best first, at most `cap` entries.
    ///
    /// Entries with equal scores keep their corpus order.
    pub fn rank(&self, query: &str, corpus: &[SourceDocument]) -> Vec<SourceDocument> {
        let tokens = tokenize(query);

        let mut scored: Vec<(u32, &SourceDocument)> = corpus
            .iter()
            .map(|doc| (score_source(&tokens, doc), doc))
            .collect();

        // `sort_by` is stable, so corpus order breaks ties.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let ranked: Vec<SourceDocument> = scored
            .into_iter()
            .take(self.cap)
            .map(|(_, doc)| doc.clone())
            .collect();

        tracing::debug!("Ranked {} of {} fallback sources", ranked.len(), corpus.len());
        ranked
    }
}

/// Keyword score of one document for already-tokenized query terms.
pub fn score_source(tokens: &[String], doc: &SourceDocument) -> u32 {
    let title = doc.title.to_lowercase();
    let snippet = doc.snippet.to_lowercase();

    tokens
        .iter()
        .map(|token| {
            let mut score = 0;
            if title.contains(token.as_str()) {
                score += TITLE_WEIGHT;
            }
            if snippet.contains(token.as_str()) {
                score += SNIPPET_WEIGHT;
            }
            score
        })
        .sum()
}
