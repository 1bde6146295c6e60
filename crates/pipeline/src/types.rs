//! Pipeline data types.

use honeyscope_provider::RawResult;
use serde::{Deserialize, Serialize};

/// Hostname used when a URL is missing, unparseable or has no host.
pub const UNKNOWN_HOST: &str = "unknown-source";

/// URL used when a raw result carries no link at all.
pub const MISSING_URL: &str = "#";

/// Snippet used when a raw result carries no snippet.
pub const MISSING_SNIPPET: &str = "No snippet available.";

/// A single retrieved or synthesized search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub title: String,

    pub url: String,

    pub snippet: String,

    /// Derived from `url`; `unknown-source` when it cannot be resolved
    pub hostname: String,

    /// Stable 1-based rank within the set the document came from
    pub position: u32,
}

impl SourceDocument {
    /// Create a document, deriving its hostname from `url`.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
        position: u32,
    ) -> Self {
        let url = url.into();
        Self {
            title: title.into(),
            hostname: hostname_of(&url),
            url,
            snippet: snippet.into(),
            position,
        }
    }

    /// Convert a provider record at `index` (0-based) into a document.
    pub fn from_raw(raw: &RawResult, index: usize) -> Self {
        let url = raw
            .link
            .as_deref()
            .or(raw.source.as_deref())
            .unwrap_or_default();
        let fallback_position = u32::try_from(index + 1).unwrap_or(u32::MAX);

        Self {
            title: raw
                .title
                .clone()
                .unwrap_or_else(|| format!("Result {}", index + 1)),
            hostname: hostname_of(url),
            url: if url.is_empty() {
                MISSING_URL.to_string()
            } else {
                url.to_string()
            },
            snippet: raw
                .snippet
                .clone()
                .unwrap_or_else(|| MISSING_SNIPPET.to_string()),
            position: raw
                .position
                .filter(|position| *position >= 1)
                .unwrap_or(fallback_position),
        }
    }
}

/// Resolve the display hostname of a URL, without a leading `www.`.
pub fn hostname_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .filter(|host| !host.is_empty())
        .map(|host| host.strip_prefix("www.").unwrap_or(&host).to_string())
        .unwrap_or_else(|| UNKNOWN_HOST.to_string())
}

/// A hand-curated research corpus entry.
///
/// `keywords` only drive matching; use [`ResearchPaper::strip`] before
/// handing a paper to anything outside the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchPaper {
    pub document: SourceDocument,
    pub keywords: Vec<String>,
}

impl ResearchPaper {
    pub fn new(document: SourceDocument, keywords: &[&str]) -> Self {
        Self {
            document,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// The externally visible view of this paper.
    pub fn strip(&self) -> SourceDocument {
        self.document.clone()
    }
}

/// Outcome of relevance classification. Pure function of the query text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelevanceVerdict {
    pub is_related: bool,

    /// In `[0, 1]`
    pub confidence: f32,

    pub reason: String,
}

/// Which retrieval branch produced the sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Live,
    Fallback,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Live => "live",
            ProviderKind::Fallback => "fallback",
        }
    }
}

/// Where the documents in a [`PaperSelection`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaperOrigin {
    /// No research intent in the query; the selection is empty
    NotRequested,

    /// Scored entries from the research corpus
    Corpus,

    /// No paper matched; generic sources stand in and must not be labelled
    /// as government or journal papers
    FallbackSources,
}

/// Papers chosen for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperSelection {
    pub origin: PaperOrigin,
    pub documents: Vec<SourceDocument>,
}

impl PaperSelection {
    pub fn not_requested() -> Self {
        Self {
            origin: PaperOrigin::NotRequested,
            documents: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }
}

/// Result of one retrieval. Produced once per query and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub provider: ProviderKind,
    pub sources: Vec<SourceDocument>,
    pub papers: PaperSelection,
}

impl SearchSummary {
    /// Summary for a query that produced nothing at all.
    pub fn empty() -> Self {
        Self {
            provider: ProviderKind::Fallback,
            sources: Vec::new(),
            papers: PaperSelection::not_requested(),
        }
    }
}

/// Narrative strategy for a query, resolved in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryCategory {
    Research,
    Market,
    GeneralKnowledge,
    Default,
}

impl QueryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryCategory::Research => "research",
            QueryCategory::Market => "market",
            QueryCategory::GeneralKnowledge => "general-knowledge",
            QueryCategory::Default => "default",
        }
    }
}
