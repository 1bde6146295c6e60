//! SerpAPI-compatible search provider.
//!
//! Sends one `GET` with `engine`, `q`, `num` and `api_key` query parameters
//! and reads the result list from the first of `organic_results`, `results`
//! or `news_results` present in the JSON body.

use crate::client::{RawResult, SearchClient, SearchRequest};
use honeyscope_core::{AppError, AppResult};
use serde_json::Value;
use url::Url;

/// Payload keys checked in order for the result array.
const RESULT_KEYS: [&str; 3] = ["organic_results", "results", "news_results"];

/// Query parameters this client always owns.
const OWNED_PARAMS: [&str; 3] = ["q", "num", "api_key"];

/// SerpAPI search client.
pub struct SerpApiClient {
    /// Endpoint URL (may already carry query parameters such as `engine`)
    endpoint: String,

    /// Engine name, used unless the endpoint already names one
    engine: String,

    /// Provider credential
    api_key: String,

    /// HTTP client
    client: reqwest::Client,
}

impl SerpApiClient {
    /// Create a new client.
    pub fn new(
        endpoint: impl Into<String>,
        engine: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            engine: engine.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the request URL for a search.
    fn build_url(&self, request: &SearchRequest) -> AppResult<Url> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| {
            AppError::Provider(format!("Invalid endpoint {:?}: {}", self.endpoint, e))
        })?;

        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| OWNED_PARAMS.iter().all(|owned| key != owned))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let has_engine = retained.iter().any(|(key, _)| key == "engine");

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, value) in &retained {
                pairs.append_pair(key, value);
            }
            if !has_engine {
                pairs.append_pair("engine", &self.engine);
            }
            pairs.append_pair("q", &request.query);
            pairs.append_pair("num", &request.num.to_string());
            pairs.append_pair("api_key", &self.api_key);
        }

        Ok(url)
    }

    /// Pull the result records out of a response body.
    fn extract_results(payload: &Value, limit: usize) -> AppResult<Vec<RawResult>> {
        let Some(list) = RESULT_KEYS
            .iter()
            .find_map(|key| payload.get(*key).filter(|v| !v.is_null()))
        else {
            return Ok(Vec::new());
        };

        let records = list.as_array().ok_or_else(|| {
            AppError::Provider("Result list in provider payload is not an array".to_string())
        })?;

        Ok(records
            .iter()
            .take(limit)
            .map(RawResult::from_value)
            .collect())
    }
}

#[async_trait::async_trait]
impl SearchClient for SerpApiClient {
    fn provider_name(&self) -> &str {
        "serpapi"
    }

    async fn search(&self, request: &SearchRequest) -> AppResult<Vec<RawResult>> {
        let url = self.build_url(request)?;
        tracing::debug!(engine = %self.engine, num = request.num, "Sending search request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("Failed to reach search provider: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Provider(format!(
                "Search provider rejected the request ({}): {}",
                status, body
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Failed to parse provider payload: {}", e)))?;

        let results = Self::extract_results(&payload, request.num)?;
        tracing::debug!("Search provider returned {} results", results.len());
        Ok(results)
    }
}
