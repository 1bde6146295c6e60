//! Query scenarios run through the whole pipeline.

use crate::authority::{government_share, SourceKind};
use crate::classifier::{GateDecision, HARD_REJECT_MESSAGE, SOFT_REJECT_FLOOR};
use crate::corpus::{Corpus, HoneyVariety, VarietyCategory};
use crate::ranker::SourceRanker;
use crate::types::{PaperOrigin, ProviderKind, QueryCategory, ResearchPaper, SourceDocument};
use crate::{Answer, AskOutcome, Pipeline};
use honeyscope_core::AnswerSettings;
use honeyscope_provider::{MockSearchClient, RawResult, SearchClient};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn offline() -> Pipeline {
    Pipeline::new(Corpus::shared(), None, &AnswerSettings::default())
}

fn with_client(client: Arc<MockSearchClient>) -> Pipeline {
    Pipeline::new(
        Corpus::shared(),
        Some(client as Arc<dyn SearchClient>),
        &AnswerSettings::default(),
    )
}

async fn answer(pipeline: &Pipeline, query: &str) -> Answer {
    let mut rng = StdRng::seed_from_u64(11);
    match pipeline.ask(query, &mut rng).await {
        AskOutcome::Answered(answer) => answer,
        AskOutcome::Rejected(decision) => panic!("{:?} was rejected: {:?}", query, decision),
    }
}

#[tokio::test]
async fn test_market_query_uses_ranked_snippets() {
    let pipeline = offline();
    let answer = answer(&pipeline, "honey export moisture compliance").await;

    assert_eq!(answer.category, QueryCategory::Market);
    assert_eq!(answer.summary.provider, ProviderKind::Fallback);
    assert_eq!(answer.summary.papers.origin, PaperOrigin::NotRequested);

    let ranked = SourceRanker::new(5).rank("honey export moisture compliance", &Corpus::builtin().sources);
    let lead: Vec<&str> = ranked.iter().take(3).map(|s| s.snippet.as_str()).collect();
    assert!(answer.narrative.starts_with(&lead.join(" ")));
    assert!(answer.narrative.contains("**Market Analysis:**"));
    assert!(answer.narrative.contains("**Recommendations:**"));

    assert_eq!(answer.focus_points.len(), 3);
    assert!(answer.focus_points[0].starts_with("apimondia.org: "));
}

#[tokio::test]
async fn test_usda_research_query() {
    let pipeline = offline();
    let answer = answer(&pipeline, "usda research paper on honey quality").await;

    assert_eq!(answer.category, QueryCategory::Research);
    let papers = &answer.summary.papers;
    assert_eq!(papers.origin, PaperOrigin::Corpus);
    assert!(papers.documents.iter().any(|d| d.hostname.contains("usda")));

    let government = papers
        .documents
        .iter()
        .filter(|d| SourceKind::of(d).is_government())
        .count();
    let expected = (government as f64 / papers.len() as f64 * 100.0).round() as u32;
    assert_eq!(government_share(&papers.documents), (government, expected));
    assert!(answer.narrative.contains(&format!(
        "**Source Distribution:** {} government research papers ({}%)",
        government, expected
    )));
}

#[tokio::test]
async fn test_weather_query_is_hard_rejected() {
    let client = Arc::new(MockSearchClient::with_results(vec![RawResult::default()]));
    let pipeline = with_client(client.clone());
    let mut rng = StdRng::seed_from_u64(0);

    let outcome = pipeline.ask("what is the weather today", &mut rng).await;
    let AskOutcome::Rejected(decision) = outcome else {
        panic!("weather query should be rejected");
    };

    assert!(matches!(decision, GateDecision::HardReject { .. }));
    assert!(!decision.verdict().is_related);
    assert!(decision.verdict().confidence <= SOFT_REJECT_FLOOR);
    assert_eq!(decision.message(), Some(HARD_REJECT_MESSAGE));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_manuka_query_gets_variety_template() {
    let pipeline = offline();
    let answer = answer(&pipeline, "tell me about manuka honey properties").await;

    assert_eq!(answer.category, QueryCategory::GeneralKnowledge);
    assert!(answer.narrative.starts_with("**Manuka Honey**"));
    assert!(answer.narrative.contains("High antibacterial activity."));
    assert!(!answer.narrative.contains("**Honey Type: "));
    assert!(answer.narrative.contains("**Additional Information:**"));
}

#[tokio::test]
async fn test_seeded_answers_are_reproducible() {
    let pipeline = offline();
    let query = "which types of honey exist";

    let first = answer(&pipeline, query).await;
    let second = answer(&pipeline, query).await;

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_live_answer_focus_points_follow_provider_order() {
    let client = Arc::new(MockSearchClient::with_results(vec![
        RawResult {
            title: Some("Acacia outlook".to_string()),
            link: Some("https://www.honeytrade.example/acacia".to_string()),
            snippet: Some("Acacia prices firm.".to_string()),
            ..Default::default()
        },
        RawResult {
            link: Some("not a url".to_string()),
            ..Default::default()
        },
    ]));
    let pipeline = with_client(client.clone());
    let answer = answer(&pipeline, "acacia honey price outlook").await;

    assert_eq!(answer.summary.provider, ProviderKind::Live);
    assert_eq!(
        answer.focus_points,
        vec![
            "honeytrade.example: Acacia prices firm.".to_string(),
            "unknown-source: No snippet available.".to_string(),
        ]
    );
    assert_eq!(answer.summary.sources[1].title, "Result 2");
    assert_eq!(client.calls(), 1);
    assert_eq!(answer.profile.map(|p| p.name), Some("Desert Bloom"));
}

#[tokio::test]
async fn test_every_answer_carries_a_profile() {
    let pipeline = offline();

    let matched = answer(&pipeline, "nordic heather honey market").await;
    assert_eq!(matched.profile.as_ref().map(|p| p.region), Some("Skåne • Sweden"));

    let drawn = answer(&pipeline, "hive inspection checklist").await;
    let names: Vec<&str> = Corpus::builtin().profiles.iter().map(|p| p.name).collect();
    assert!(names.contains(&drawn.profile.as_ref().unwrap().name));

    let json = serde_json::to_value(&drawn).unwrap();
    assert!(json["profile"]["marketingTip"].is_string());
}

#[tokio::test]
async fn test_failing_provider_degrades_to_fallback() {
    let pipeline = with_client(Arc::new(MockSearchClient::failing("HTTP 503")));
    let answer = answer(&pipeline, "honey bee biology").await;

    assert_eq!(answer.summary.provider, ProviderKind::Fallback);
    assert_eq!(answer.summary.sources.len(), 5);
    assert_eq!(answer.category, QueryCategory::GeneralKnowledge);
}

#[tokio::test]
async fn test_small_fixture_corpus() {
    let corpus = Corpus::new(
        vec![SourceDocument::new(
            "Clover notes",
            "https://clover.example.org/",
            "Clover honey is mild.",
            1,
        )],
        vec![ResearchPaper::new(
            SourceDocument::new("Clover yield study", "https://ars.usda.gov/clover", "Yield data.", 1),
            &["clover", "yield"],
        )],
        vec![HoneyVariety {
            name: "Clover",
            category: VarietyCategory::Light,
            description: "Sweet and mild.",
        }],
    );
    let settings = AnswerSettings {
        source_cap: 3,
        paper_limit: 2,
        focus_depth: 1,
    };
    let pipeline = Pipeline::new(Arc::new(corpus), None, &settings);

    let answer = answer(&pipeline, "clover honey yield study").await;
    assert_eq!(answer.category, QueryCategory::Research);
    assert_eq!(answer.summary.sources.len(), 1);
    assert_eq!(answer.summary.papers.len(), 1);
    assert_eq!(answer.focus_points, vec!["clover.example.org: Clover honey is mild."]);
    assert!(answer.narrative.contains("1 government research papers (100%), 0 peer-reviewed journal papers (0%)"));
    assert!(answer.profile.is_none());
}
