//! Search provider factory.
//!
//! Builds the live search client from configuration. A missing credential is
//! not an error: it means live search is switched off and the caller should
//! go straight to its fallback path.

use crate::client::SearchClient;
use crate::providers::SerpApiClient;
use honeyscope_core::SearchSettings;
use std::sync::Arc;

/// Create the live search client for the given settings.
///
/// # Returns
/// * `Some(client)` when a non-blank API key is configured
/// * `None` when live search is not configured
pub fn create_client(settings: &SearchSettings) -> Option<Arc<dyn SearchClient>> {
    if !settings.is_configured() {
        tracing::debug!("No search API key configured; live search disabled");
        return None;
    }

    let api_key = settings.api_key.as_deref().unwrap_or_default().trim();
    let client = SerpApiClient::new(&settings.endpoint, &settings.engine, api_key);
    Some(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_key_means_no_client() {
        let settings = SearchSettings::default();
        assert!(create_client(&settings).is_none());
    }

    #[test]
    fn test_blank_key_means_no_client() {
        let settings = SearchSettings {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(create_client(&settings).is_none());
    }

    #[test]
    fn test_key_creates_serpapi_client() {
        let settings = SearchSettings {
            api_key: Some("abc".to_string()),
            ..Default::default()
        };
        let client = create_client(&settings).expect("client should be created");
        assert_eq!(client.provider_name(), "serpapi");
    }
}
