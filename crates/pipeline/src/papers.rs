//! Quota-balanced research paper selection.
//!
//! Government papers get a flat score boost and a guaranteed share of the
//! result (`ceil(limit * 0.66)` slots), so an institutional paper can outrank
//! a better textual match from a journal. Both mechanisms are editorial
//! policy and are applied as-is.

use crate::authority::SourceKind;
use crate::corpus::Corpus;
use crate::keywords::{has_research_intent, tokenize};
use crate::types::{PaperOrigin, PaperSelection, ResearchPaper, SourceDocument};
use std::sync::Arc;

/// Default number of papers returned.
pub const DEFAULT_PAPER_LIMIT: usize = 5;

/// Share of the result reserved for government papers.
pub const GOVERNMENT_QUOTA: f64 = 0.66;

/// Flat boost for every government paper.
pub const GOVERNMENT_BOOST: u32 = 5;

/// Extra boost for government papers when the query mentions government.
pub const GOVERNMENT_QUERY_BOOST: u32 = 10;

const KEYWORD_WEIGHT: u32 = 4;
const TITLE_WEIGHT: u32 = 3;
const SNIPPET_WEIGHT: u32 = 2;

/// Number of government slots for a given limit.
pub fn government_target(limit: usize) -> usize {
    (limit as f64 * GOVERNMENT_QUOTA).ceil() as usize
}

struct ScoredPaper<'a> {
    paper: &'a ResearchPaper,
    score: u32,
    kind: SourceKind,
}

/// Picks papers from the research corpus.
#[derive(Debug, Clone)]
pub struct PaperSelector {
    corpus: Arc<Corpus>,
    limit: usize,
}

impl PaperSelector {
    pub fn new(corpus: Arc<Corpus>, limit: usize) -> Self {
        Self { corpus, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Select papers with the configured limit.
    pub fn select(&self, query: &str, fallback_sources: &[SourceDocument]) -> PaperSelection {
        self.select_with_limit(query, fallback_sources, self.limit)
    }

    /// Select up to `limit` papers for `query`.
    ///
    /// Returns an empty, not-requested selection when the query has no
    /// research intent. When no paper scores above zero, `fallback_sources`
    /// (truncated to `limit`) stand in, marked as such.
    pub fn select_with_limit(
        &self,
        query: &str,
        fallback_sources: &[SourceDocument],
        limit: usize,
    ) -> PaperSelection {
        if !has_research_intent(query) {
            return PaperSelection::not_requested();
        }

        let tokens = tokenize(query);
        let mentions_government = query.to_lowercase().contains("gov");

        let mut matches: Vec<ScoredPaper<'_>> = self
            .corpus
            .papers
            .iter()
            .map(|paper| {
                let kind = SourceKind::of(&paper.document);
                let mut score = score_paper(&tokens, paper);
                if kind.is_government() {
                    score += GOVERNMENT_BOOST;
                    if mentions_government {
                        score += GOVERNMENT_QUERY_BOOST;
                    }
                }
                ScoredPaper { paper, score, kind }
            })
            .filter(|scored| scored.score > 0)
            .collect();

        // Stable: corpus order breaks ties.
        matches.sort_by(|a, b| b.score.cmp(&a.score));

        let government: Vec<SourceDocument> = matches
            .iter()
            .filter(|scored| scored.kind.is_government())
            .take(government_target(limit))
            .map(|scored| scored.paper.strip())
            .collect();

        let journal_slots = limit.saturating_sub(government.len());
        let journal = matches
            .iter()
            .filter(|scored| !scored.kind.is_government())
            .take(journal_slots)
            .map(|scored| scored.paper.strip());

        let mut documents = government;
        documents.extend(journal);
        documents.truncate(limit);

        if !documents.is_empty() {
            tracing::debug!("Selected {} research papers", documents.len());
            return PaperSelection {
                origin: PaperOrigin::Corpus,
                documents,
            };
        }

        tracing::debug!("No research paper matched; using fallback sources");
        PaperSelection {
            origin: PaperOrigin::FallbackSources,
            documents: fallback_sources.iter().take(limit).cloned().collect(),
        }
    }
}

/// Textual score of a paper, before any government boost.
fn score_paper(tokens: &[String], paper: &ResearchPaper) -> u32 {
    let title = paper.document.title.to_lowercase();
    let snippet = paper.document.snippet.to_lowercase();
    let keywords: Vec<String> = paper.keywords.iter().map(|k| k.to_lowercase()).collect();

    tokens
        .iter()
        .map(|token| {
            let token = token.as_str();
            let mut score = 0;
            if keywords.iter().any(|keyword| keyword.contains(token)) {
                score += KEYWORD_WEIGHT;
            }
            if title.contains(token) {
                score += TITLE_WEIGHT;
            }
            if snippet.contains(token) {
                score += SNIPPET_WEIGHT;
            }
            score
        })
        .sum()
}
