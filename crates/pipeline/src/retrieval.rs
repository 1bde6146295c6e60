//! Live-first retrieval with deterministic fallback.
//!
//! One live request per query, never retried. A missing client, a provider
//! error and an empty result list all lead to the same place: the local
//! [`SourceRanker`] over the fixed corpus. Live and fallback results are
//! never mixed within one query, and nothing is cached between queries.

use crate::corpus::Corpus;
use crate::papers::PaperSelector;
use crate::ranker::SourceRanker;
use crate::types::{ProviderKind, SearchSummary, SourceDocument};
use honeyscope_provider::{SearchClient, SearchRequest};
use std::sync::Arc;

/// Produces a [`SearchSummary`] for a query.
pub struct RetrievalOrchestrator {
    client: Option<Arc<dyn SearchClient>>,
    corpus: Arc<Corpus>,
    ranker: SourceRanker,
    selector: PaperSelector,
    result_count: usize,
}

impl RetrievalOrchestrator {
    pub fn new(
        client: Option<Arc<dyn SearchClient>>,
        corpus: Arc<Corpus>,
        ranker: SourceRanker,
        selector: PaperSelector,
    ) -> Self {
        Self {
            client,
            corpus,
            ranker,
            selector,
            result_count: honeyscope_provider::client::DEFAULT_NUM_RESULTS,
        }
    }

    /// Set the number of results requested from the live provider.
    pub fn with_result_count(mut self, count: usize) -> Self {
        self.result_count = count;
        self
    }

    pub fn has_live_provider(&self) -> bool {
        self.client.is_some()
    }

    /// Retrieve sources and papers for `query`. Never fails.
    pub async fn retrieve(&self, query: &str) -> SearchSummary {
        let query = query.trim();
        if query.is_empty() {
            return SearchSummary::empty();
        }

        if let Some(sources) = self.fetch_live(query).await {
            tracing::info!("Answering from live search ({} sources)", sources.len());
            let papers = self.selector.select(query, &sources);
            return SearchSummary {
                provider: ProviderKind::Live,
                sources,
                papers,
            };
        }

        let sources = self.ranker.rank(query, &self.corpus.sources);
        tracing::info!("Answering from local fallback ({} sources)", sources.len());
        let papers = self.selector.select(query, &sources);
        SearchSummary {
            provider: ProviderKind::Fallback,
            sources,
            papers,
        }
    }

    /// One live request. `None` means "use the fallback".
    async fn fetch_live(&self, query: &str) -> Option<Vec<SourceDocument>> {
        let Some(client) = self.client.as_ref() else {
            tracing::debug!("Live search not configured; skipping provider");
            return None;
        };

        let request = SearchRequest::new(query).with_num(self.result_count);
        match client.search(&request).await {
            Ok(results) if results.is_empty() => {
                tracing::warn!(
                    provider = client.provider_name(),
                    "Live search returned no results; falling back to local ranking"
                );
                None
            }
            Ok(results) => Some(
                results
                    .iter()
                    .take(self.ranker.cap())
                    .enumerate()
                    .map(|(index, raw)| SourceDocument::from_raw(raw, index))
                    .collect(),
            ),
            Err(e) => {
                tracing::warn!(
                    provider = client.provider_name(),
                    "Live search failed, falling back to local ranking: {}",
                    e
                );
                None
            }
        }
    }
}
