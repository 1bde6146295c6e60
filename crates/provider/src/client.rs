//! Search client abstraction and request/result types.
//!
//! This module defines the core abstractions for talking to a live search
//! provider.

use honeyscope_core::AppResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of results requested when the caller does not say otherwise.
pub const DEFAULT_NUM_RESULTS: usize = 5;

/// Live search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query, sent as `q`
    pub query: String,

    /// Number of results to request, sent as `num`
    pub num: usize,
}

impl SearchRequest {
    /// Create a new request with the default result count.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            num: DEFAULT_NUM_RESULTS,
        }
    }

    /// Set the number of results to request.
    pub fn with_num(mut self, num: usize) -> Self {
        self.num = num;
        self
    }
}

/// One result record as returned by a provider.
///
/// Every field is optional; providers are inconsistent about what they send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Some engines (news) put the URL here instead of `link`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl RawResult {
    /// Extract a record from an arbitrary JSON object.
    ///
    /// Fields of the wrong type are treated as absent rather than failing
    /// the whole record.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            title: text("title"),
            link: text("link"),
            source: text("source"),
            snippet: text("snippet"),
            position: value
                .get("position")
                .and_then(Value::as_u64)
                .and_then(|p| u32::try_from(p).ok()),
        }
    }
}

/// Trait for live search providers.
///
/// Implementations perform exactly one request per call: no retries, no
/// caching. Any transport failure, non-success status or malformed payload is
/// returned as an error; an empty `Vec` means the provider answered with
/// nothing usable.
#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    /// Get the provider name (e.g., "serpapi", "mock").
    fn provider_name(&self) -> &str;

    /// Run one search request.
    async fn search(&self, request: &SearchRequest) -> AppResult<Vec<RawResult>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults_to_five_results() {
        let request = SearchRequest::new("manuka");
        assert_eq!(request.num, 5);
        assert_eq!(request.with_num(3).num, 3);
    }

    #[test]
    fn test_raw_result_from_full_record() {
        let raw = RawResult::from_value(&json!({
            "title": "Honey prices",
            "link": "https://www.example.com/prices",
            "snippet": "Prices rose.",
            "position": 2
        }));

        assert_eq!(raw.title.as_deref(), Some("Honey prices"));
        assert_eq!(raw.link.as_deref(), Some("https://www.example.com/prices"));
        assert_eq!(raw.position, Some(2));
        assert!(raw.source.is_none());
    }

    #[test]
    fn test_raw_result_tolerates_wrong_types() {
        let raw = RawResult::from_value(&json!({
            "title": 42,
            "source": "https://news.example.org/a",
            "position": "first"
        }));

        assert!(raw.title.is_none());
        assert_eq!(raw.source.as_deref(), Some("https://news.example.org/a"));
        assert!(raw.position.is_none());
    }
}
