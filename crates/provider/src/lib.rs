//! Live search provider integration for Honeyscope.
//!
//! This crate provides a provider-agnostic abstraction over web search
//! backends. The answering pipeline only ever sees [`SearchClient`] and the
//! loosely-typed [`RawResult`] records it returns.
//!
//! # Providers
//! - **SerpAPI**: HTTP GET against a SerpAPI-compatible endpoint (default)
//! - **Mock**: canned results or a canned failure, for tests and offline runs
//!
//! # Example
//! ```no_run
//! use honeyscope_provider::{SearchClient, SearchRequest, providers::SerpApiClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SerpApiClient::new("https://serpapi.com/search.json", "google", "key");
//! let results = client.search(&SearchRequest::new("acacia honey prices")).await?;
//! println!("{} results", results.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;

// Re-export main types
pub use client::{RawResult, SearchClient, SearchRequest};
pub use factory::create_client;
pub use providers::{MockSearchClient, SerpApiClient};
