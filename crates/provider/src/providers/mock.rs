//! In-memory search provider.
//!
//! Returns a canned result list or a canned failure without touching the
//! network, and counts how many times it was called.

use crate::client::{RawResult, SearchClient, SearchRequest};
use honeyscope_core::{AppError, AppResult};
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the mock answers with.
#[derive(Debug, Clone)]
enum MockBehavior {
    Results(Vec<RawResult>),
    Failure(String),
}

/// Mock provider for testing and offline development.
#[derive(Debug)]
pub struct MockSearchClient {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockSearchClient {
    /// A provider that always returns `results` (truncated to the requested count).
    pub fn with_results(results: Vec<RawResult>) -> Self {
        Self {
            behavior: MockBehavior::Results(results),
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider that answers with an empty result list.
    pub fn empty() -> Self {
        Self::with_results(Vec::new())
    }

    /// A provider whose every request fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Failure(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of search calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SearchClient for MockSearchClient {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn search(&self, request: &SearchRequest) -> AppResult<Vec<RawResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Results(results) => {
                Ok(results.iter().take(request.num).cloned().collect())
            }
            MockBehavior::Failure(message) => Err(AppError::Provider(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str) -> RawResult {
        RawResult {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_mock_returns_truncated_results() {
        let client = MockSearchClient::with_results((0..7).map(|i| raw(&format!("r{}", i))).collect());
        let results = client.search(&SearchRequest::new("honey")).await.unwrap();

        assert_eq!(results.len(), 5);
        assert_eq!(results[0].title.as_deref(), Some("r0"));
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let client = MockSearchClient::failing("connection reset");
        let err = client.search(&SearchRequest::new("honey")).await.unwrap_err();

        assert!(err.to_string().contains("connection reset"));
        assert_eq!(client.provider_name(), "mock");
    }
}
