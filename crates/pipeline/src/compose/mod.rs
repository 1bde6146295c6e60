//! Narrative composition.
//!
//! The composer picks one of four strategies for a query and renders the
//! final prose from ranked sources and selected papers. It never fetches
//! anything; all inputs come from a [`SearchSummary`](crate::types::SearchSummary).

pub mod focus;
pub mod topics;

pub use focus::{focus_points, DEFAULT_FOCUS_DEPTH, FOCUS_PLACEHOLDER};
pub use topics::{general_answer, named_variety, Topic};

use crate::authority::{government_share, SourceKind};
use crate::corpus::Corpus;
use crate::keywords::{contains_any, has_research_intent, GENERAL_KNOWLEDGE_KEYWORDS, MARKET_KEYWORDS};
use crate::types::{PaperOrigin, PaperSelection, QueryCategory, SourceDocument};
use rand::RngCore;
use std::sync::Arc;

const MARKET_UNAVAILABLE: &str = "Current market intelligence is unavailable. Market data includes real-time \
     pricing analysis, supply and demand forecasting, export/import trends, quality standards, and logistics insights.";

const MARKET_ANALYSIS: &str = "**Market Analysis:**
- Current trends indicate significant market dynamics affecting pricing and availability
- Supply chain factors influence trading opportunities
- Regional variations impact market conditions
- Quality standards affect premium pricing potential

**Recommendations:**
- Monitor trends for pricing adjustments
- Adjust inventory based on demand forecasts
- Explore new market opportunities
- Maintain quality standards for premium positioning";

const CAPABILITIES: &str = "Information is currently unavailable. I can help with general questions about honey \
     and beekeeping, market intelligence and pricing, research papers and scientific studies, and field practices. \
     Please try rephrasing your question.";

const PAPERS_CLOSING: &str = "All papers listed above are from verified government research institutions \
     and reputable scientific journals with valid, accessible links.";

/// Which narrative strategy a query gets. First match wins.
pub fn resolve_category(query: &str) -> QueryCategory {
    let normalized = query.to_lowercase();

    if has_research_intent(query) {
        QueryCategory::Research
    } else if contains_any(&normalized, MARKET_KEYWORDS) {
        QueryCategory::Market
    } else if contains_any(&normalized, GENERAL_KNOWLEDGE_KEYWORDS)
        || normalized.contains("honey bee")
        || (normalized.contains("bee") && normalized.contains("honey"))
    {
        QueryCategory::GeneralKnowledge
    } else {
        QueryCategory::Default
    }
}

/// A rendered answer body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub category: QueryCategory,
    pub narrative: String,
    pub focus_points: Vec<String>,
}

/// Renders narratives and focus points.
#[derive(Debug, Clone)]
pub struct SummaryComposer {
    corpus: Arc<Corpus>,
    focus_depth: usize,
}

impl SummaryComposer {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            corpus,
            focus_depth: DEFAULT_FOCUS_DEPTH,
        }
    }

    pub fn with_focus_depth(mut self, depth: usize) -> Self {
        self.focus_depth = depth;
        self
    }

    pub fn focus_depth(&self) -> usize {
        self.focus_depth
    }

    /// Compose with the configured focus depth and a fresh entropy-seeded RNG.
    pub fn compose(
        &self,
        query: &str,
        sources: &[SourceDocument],
        papers: &PaperSelection,
    ) -> Composition {
        let mut rng = rand::thread_rng();
        self.compose_with_rng(query, sources, papers, self.focus_depth, &mut rng)
    }

    /// Compose with an explicit focus depth and random source.
    ///
    /// With a seeded `rng` the output is fully deterministic.
    pub fn compose_with_rng(
        &self,
        query: &str,
        sources: &[SourceDocument],
        papers: &PaperSelection,
        depth: usize,
        rng: &mut dyn RngCore,
    ) -> Composition {
        let category = resolve_category(query);
        tracing::debug!(category = category.as_str(), "Resolved narrative category");

        let narrative = match category {
            QueryCategory::Research => research_narrative(sources, papers),
            QueryCategory::Market => market_narrative(sources),
            QueryCategory::GeneralKnowledge => {
                let answer = general_answer(query, &self.corpus.varieties, rng);
                match sources {
                    [] => answer,
                    [first] => format!("{}\n\n**Additional Information:**\n\n{}", answer, first.snippet),
                    [first, second, ..] => format!(
                        "{}\n\n**Additional Information:**\n\n{} {}",
                        answer, first.snippet, second.snippet
                    ),
                }
            }
            QueryCategory::Default => {
                if sources.is_empty() {
                    CAPABILITIES.to_string()
                } else {
                    leading_snippets(sources, 3)
                }
            }
        };

        Composition {
            category,
            narrative,
            focus_points: focus_points(sources, depth),
        }
    }
}

fn leading_snippets(sources: &[SourceDocument], count: usize) -> String {
    sources
        .iter()
        .take(count)
        .map(|source| source.snippet.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn market_narrative(sources: &[SourceDocument]) -> String {
    if sources.is_empty() {
        return MARKET_UNAVAILABLE.to_string();
    }
    format!("{}\n\n{}", leading_snippets(sources, 3), MARKET_ANALYSIS)
}

fn research_narrative(sources: &[SourceDocument], papers: &PaperSelection) -> String {
    let mut narrative = String::new();
    let labelled = papers.origin == PaperOrigin::Corpus;

    if !papers.is_empty() {
        narrative.push_str(&format!(
            "**Research Papers Found ({} papers):**\n\n",
            papers.len()
        ));

        for (idx, paper) in papers.documents.iter().enumerate() {
            let label = if labelled {
                SourceKind::of(paper).label()
            } else {
                "Web Source"
            };
            narrative.push_str(&format!(
                "{}. **{}**\n   Source: {} ({})\n   Link: {}\n   Summary: {}\n\n",
                idx + 1,
                paper.title,
                label,
                paper.hostname,
                paper.url,
                paper.snippet
            ));
        }

        if labelled {
            let (count, percentage) = government_share(&papers.documents);
            narrative.push_str(&format!(
                "**Source Distribution:** {} government research papers ({}%), {} peer-reviewed journal papers ({}%)\n\n",
                count,
                percentage,
                papers.len() - count,
                100 - percentage
            ));
        }
    }

    if !sources.is_empty() {
        narrative.push_str("**Additional Research Insights:**\n\n");
        narrative.push_str(&leading_snippets(sources, 2));
    }

    if labelled && !papers.is_empty() {
        narrative.push_str("\n\n");
        narrative.push_str(PAPERS_CLOSING);
    }

    narrative
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::papers::{PaperSelector, DEFAULT_PAPER_LIMIT};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn composer() -> SummaryComposer {
        SummaryComposer::new(Corpus::shared())
    }

    fn compose(query: &str, sources: &[SourceDocument], papers: &PaperSelection) -> Composition {
        let mut rng = StdRng::seed_from_u64(3);
        composer().compose_with_rng(query, sources, papers, DEFAULT_FOCUS_DEPTH, &mut rng)
    }

    fn doc(host: &str, snippet: &str) -> SourceDocument {
        SourceDocument::new("Title", format!("https://{}/", host), snippet, 1)
    }

    #[test]
    fn test_category_priority() {
        assert_eq!(resolve_category("honey price research"), QueryCategory::Research);
        assert_eq!(resolve_category("honey export moisture compliance"), QueryCategory::Market);
        assert_eq!(resolve_category("tell me about manuka honey properties"), QueryCategory::GeneralKnowledge);
        assert_eq!(resolve_category("bees and honey"), QueryCategory::GeneralKnowledge);
        assert_eq!(resolve_category("acacia jars"), QueryCategory::Default);
    }

    #[test]
    fn test_market_narrative_uses_three_snippets() {
        let sources = vec![doc("a.org", "One."), doc("b.org", "Two."), doc("c.org", "Three."), doc("d.org", "Four.")];
        let result = compose("honey price", &sources, &PaperSelection::not_requested());

        assert_eq!(result.category, QueryCategory::Market);
        assert!(result.narrative.starts_with("One. Two. Three.\n\n**Market Analysis:**"));
        assert!(!result.narrative.contains("Four."));
        assert!(result.narrative.ends_with("Maintain quality standards for premium positioning"));
    }

    #[test]
    fn test_market_without_sources() {
        let result = compose("honey price", &[], &PaperSelection::not_requested());
        assert_eq!(result.narrative, MARKET_UNAVAILABLE);
        assert_eq!(result.focus_points, vec![FOCUS_PLACEHOLDER.to_string()]);
    }

    #[test]
    fn test_default_narrative() {
        let sources = vec![doc("a.org", "One."), doc("b.org", "Two.")];
        assert_eq!(compose("acacia jars", &sources, &PaperSelection::not_requested()).narrative, "One. Two.");
        assert_eq!(compose("acacia jars", &[], &PaperSelection::not_requested()).narrative, CAPABILITIES);
    }

    #[test]
    fn test_general_appends_two_snippets() {
        let sources = vec![doc("a.org", "One."), doc("b.org", "Two."), doc("c.org", "Three.")];
        let result = compose("what is honey", &sources, &PaperSelection::not_requested());

        assert!(result.narrative.starts_with("Honey is a natural sweet substance"));
        assert!(result.narrative.ends_with("**Additional Information:**\n\nOne. Two."));
    }

    #[test]
    fn test_research_narrative_labels_and_distribution() {
        let selection = PaperSelector::new(Corpus::shared(), DEFAULT_PAPER_LIMIT).select("honey research paper", &[]);
        let sources = vec![doc("a.org", "One."), doc("b.org", "Two.")];
        let result = compose("honey research paper", &sources, &selection);

        assert_eq!(result.category, QueryCategory::Research);
        assert!(result.narrative.starts_with("**Research Papers Found (5 papers):**"));
        assert!(result.narrative.contains("Source: Government Research ("));
        assert!(result.narrative.contains("Source: Peer-Reviewed Journal ("));
        assert!(result.narrative.contains(
            "**Source Distribution:** 4 government research papers (80%), 1 peer-reviewed journal papers (20%)"
        ));
        assert!(result.narrative.contains("**Additional Research Insights:**\n\nOne. Two."));
        assert!(result.narrative.ends_with(PAPERS_CLOSING));
    }

    #[test]
    fn test_fallback_papers_are_not_labelled() {
        let selection = PaperSelection {
            origin: PaperOrigin::FallbackSources,
            documents: vec![doc("usda.gov", "Generic page.")],
        };
        let result = compose("honey study", &[], &selection);

        assert!(result.narrative.contains("Source: Web Source (usda.gov)"));
        assert!(!result.narrative.contains("Government Research"));
        assert!(!result.narrative.contains("**Source Distribution:**"));
        assert!(!result.narrative.contains(PAPERS_CLOSING));
    }

    #[test]
    fn test_research_without_papers_or_sources_is_empty() {
        let result = compose("honey study", &[], &PaperSelection::not_requested());
        assert!(result.narrative.is_empty());
    }

    #[test]
    fn test_focus_depth_is_applied() {
        let sources = vec![doc("a.org", "One."), doc("b.org", "Two."), doc("c.org", "Three.")];
        let mut rng = StdRng::seed_from_u64(0);
        let result = composer().compose_with_rng("acacia jars", &sources, &PaperSelection::not_requested(), 2, &mut rng);
        assert_eq!(result.focus_points, vec!["a.org: One.", "b.org: Two."]);
    }
}
