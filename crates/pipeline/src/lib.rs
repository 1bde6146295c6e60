//! Honey domain query pipeline.
//!
//! Gates a free-text query for domain relevance, retrieves sources (live
//! provider first, local ranking as fallback), selects research papers under
//! a government quota, and composes a narrative answer with focus points.

pub mod authority;
pub mod classifier;
pub mod compose;
pub mod corpus;
pub mod field;
pub mod keywords;
pub mod papers;
pub mod profile;
pub mod ranker;
pub mod retrieval;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use classifier::{GateDecision, RelevanceClassifier};
pub use compose::{focus_points, Composition, SummaryComposer};
pub use corpus::{Corpus, HoneyVariety, VarietyCategory};
pub use field::{
    assess, estimate_purity, plan_harvest, FieldReport, HarvestPlan, HiveStrength, PurityEstimate,
    PurityLabel, SampleFeatures,
};
pub use papers::PaperSelector;
pub use profile::{pick_profile, HoneyProfile};
pub use ranker::SourceRanker;
pub use retrieval::RetrievalOrchestrator;
pub use types::{
    PaperOrigin, PaperSelection, ProviderKind, QueryCategory, RelevanceVerdict, SearchSummary,
    SourceDocument,
};

use honeyscope_core::{AnswerSettings, AppConfig, AppResult};
use honeyscope_provider::{create_client, SearchClient};
use rand::RngCore;
use serde::Serialize;
use std::sync::Arc;

/// A composed answer for an accepted query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub query: String,
    pub category: QueryCategory,
    pub narrative: String,
    pub focus_points: Vec<String>,
    pub summary: SearchSummary,
    /// Lot profile for the query; `None` only with an empty profile table
    pub profile: Option<HoneyProfile>,
}

/// Result of [`Pipeline::ask`].
#[derive(Debug, Clone, PartialEq)]
pub enum AskOutcome {
    /// The gate refused the query; nothing was retrieved
    Rejected(GateDecision),
    Answered(Answer),
}

/// The wired-up pipeline: classifier, retrieval and composer over one corpus.
pub struct Pipeline {
    corpus: Arc<Corpus>,
    classifier: RelevanceClassifier,
    orchestrator: RetrievalOrchestrator,
    composer: SummaryComposer,
}

impl Pipeline {
    /// Build a pipeline over `corpus` with an optional live client.
    pub fn new(
        corpus: Arc<Corpus>,
        client: Option<Arc<dyn SearchClient>>,
        settings: &AnswerSettings,
    ) -> Self {
        let orchestrator = RetrievalOrchestrator::new(
            client,
            corpus.clone(),
            SourceRanker::new(settings.source_cap),
            PaperSelector::new(corpus.clone(), settings.paper_limit),
        );
        let composer = SummaryComposer::new(corpus.clone()).with_focus_depth(settings.focus_depth);

        Self {
            corpus,
            classifier: RelevanceClassifier::default(),
            orchestrator,
            composer,
        }
    }

    /// Production wiring: built-in corpus and the configured live provider.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        config.validate()?;

        let client = create_client(&config.search);
        tracing::debug!(
            live = client.is_some(),
            engine = %config.search.engine,
            "Building pipeline"
        );

        let pipeline = Self::new(Corpus::shared(), client, &config.answer);
        Ok(Self {
            orchestrator: pipeline
                .orchestrator
                .with_result_count(config.search.result_count),
            ..pipeline
        })
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn classifier(&self) -> &RelevanceClassifier {
        &self.classifier
    }

    pub fn orchestrator(&self) -> &RetrievalOrchestrator {
        &self.orchestrator
    }

    pub fn composer(&self) -> &SummaryComposer {
        &self.composer
    }

    /// Answer `query` with the configured focus depth.
    pub async fn ask(&self, query: &str, rng: &mut (dyn RngCore + Send)) -> AskOutcome {
        self.ask_with_depth(query, self.composer.focus_depth(), rng)
            .await
    }

    /// Gate, retrieve, compose, then pick a lot profile. Never fails: every
    /// degraded path has a defined fallback.
    pub async fn ask_with_depth(
        &self,
        query: &str,
        depth: usize,
        rng: &mut (dyn RngCore + Send),
    ) -> AskOutcome {
        let decision = self.classifier.gate(query);
        if !decision.is_accepted() {
            tracing::info!(
                confidence = decision.verdict().confidence,
                "Query rejected: {}",
                decision.verdict().reason
            );
            return AskOutcome::Rejected(decision);
        }

        let summary = self.orchestrator.retrieve(query).await;
        let composition =
            self.composer
                .compose_with_rng(query, &summary.sources, &summary.papers, depth, rng);
        let profile = pick_profile(query, &self.corpus.profiles, rng);

        AskOutcome::Answered(Answer {
            query: query.to_string(),
            category: composition.category,
            narrative: composition.narrative,
            focus_points: composition.focus_points,
            summary,
            profile,
        })
    }
}
