//! Search provider implementations.

pub mod mock;
pub mod serpapi;

pub use mock::MockSearchClient;
pub use serpapi::SerpApiClient;
