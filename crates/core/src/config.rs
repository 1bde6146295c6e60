//! Configuration management for Honeyscope.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Built-in defaults
//! - Config file (`.honeyscope/config.yaml` or `HONEYSCOPE_CONFIG`)
//! - Environment variables
//! - Command-line flags
//!
//! The pipeline reads the search settings once, when it is built.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Default live search endpoint (SerpAPI-compatible).
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://serpapi.com/search.json";

/// Default search engine name passed to the provider.
pub const DEFAULT_SEARCH_ENGINE: &str = "google";

/// Number of results requested from the live provider.
pub const DEFAULT_RESULT_COUNT: usize = 5;

/// Maximum number of ranked sources in a summary.
pub const DEFAULT_SOURCE_CAP: usize = 5;

/// Maximum number of research papers in a summary.
pub const DEFAULT_PAPER_LIMIT: usize = 5;

/// Number of focus points rendered by default.
pub const DEFAULT_FOCUS_DEPTH: usize = 3;

/// Live search provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Provider endpoint URL
    pub endpoint: String,

    /// Engine name (e.g., "google")
    pub engine: String,

    /// Provider credential; live mode is disabled without it
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Number of results requested per query
    pub result_count: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            engine: DEFAULT_SEARCH_ENGINE.to_string(),
            api_key: None,
            result_count: DEFAULT_RESULT_COUNT,
        }
    }
}

impl SearchSettings {
    /// Whether a usable credential is present. Blank keys count as absent.
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Answer composition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSettings {
    /// Cap on ranked sources
    pub source_cap: usize,

    /// Cap on selected research papers
    pub paper_limit: usize,

    /// Number of focus points shown
    pub focus_depth: usize,
}

impl Default for AnswerSettings {
    fn default() -> Self {
        Self {
            source_cap: DEFAULT_SOURCE_CAP,
            paper_limit: DEFAULT_PAPER_LIMIT,
            focus_depth: DEFAULT_FOCUS_DEPTH,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Live search provider settings
    pub search: SearchSettings,

    /// Answer composition settings
    pub answer: AnswerSettings,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    search: Option<SearchSection>,
    answer: Option<AnswerSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSection {
    endpoint: Option<String>,
    engine: Option<String>,
    api_key_env: Option<String>,
    result_count: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerSection {
    source_cap: Option<usize>,
    paper_limit: Option<usize>,
    focus_depth: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

impl AppConfig {
    /// Load configuration from defaults, config file and environment.
    ///
    /// Environment variables:
    /// - `HONEYSCOPE_CONFIG`: Path to config file
    /// - `HONEYSCOPE_SEARCH_ENDPOINT`: Provider endpoint URL
    /// - `HONEYSCOPE_SEARCH_API_KEY`: Provider credential
    /// - `HONEYSCOPE_SEARCH_ENGINE`: Provider engine name
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        Self::load_from(std::env::var("HONEYSCOPE_CONFIG").ok().map(PathBuf::from))
    }

    /// Load configuration using an explicit config file path.
    ///
    /// An explicit path that does not exist is an error; the default
    /// `.honeyscope/config.yaml` is optional.
    pub fn load_from(config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self {
            config_file,
            ..Self::default()
        };

        let config_path = match config.config_file {
            Some(ref cf) => cf.clone(),
            None => PathBuf::from(".honeyscope").join("config.yaml"),
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path, |var| std::env::var(var).ok())?;
        } else if config.config_file.is_some() {
            return Err(AppError::Config(format!(
                "Config file does not exist: {:?}",
                config_path
            )));
        }

        Ok(config.apply_env(|var| std::env::var(var).ok()))
    }

    /// Merge a YAML configuration file into this config.
    ///
    /// `lookup` resolves the environment variable named by `apiKeyEnv`.
    fn merge_yaml<F>(&self, path: &Path, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(search) = config_file.search {
            if let Some(endpoint) = search.endpoint {
                result.search.endpoint = endpoint;
            }
            if let Some(engine) = search.engine {
                result.search.engine = engine;
            }
            if let Some(count) = search.result_count {
                result.search.result_count = count;
            }
            if let Some(env_var) = search.api_key_env {
                if let Some(key) = lookup(&env_var) {
                    result.search.api_key = Some(key);
                }
            }
        }

        if let Some(answer) = config_file.answer {
            if let Some(cap) = answer.source_cap {
                result.answer.source_cap = cap;
            }
            if let Some(limit) = answer.paper_limit {
                result.answer.paper_limit = limit;
            }
            if let Some(depth) = answer.focus_depth {
                result.answer.focus_depth = depth;
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        tracing::debug!("Merged config file {:?}", path);
        Ok(result)
    }

    /// Apply environment variable overrides.
    fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("HONEYSCOPE_SEARCH_ENDPOINT") {
            self.search.endpoint = endpoint;
        }

        if let Some(key) = lookup("HONEYSCOPE_SEARCH_API_KEY") {
            self.search.api_key = Some(key);
        }

        if let Some(engine) = lookup("HONEYSCOPE_SEARCH_ENGINE") {
            self.search.engine = engine;
        }

        if let Some(level) = lookup("RUST_LOG") {
            self.log_level = Some(level);
        }

        if lookup("NO_COLOR").is_some() {
            self.no_color = true;
        }

        self
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over environment variables.
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        engine: Option<String>,
        focus_depth: Option<usize>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(endpoint) = endpoint {
            self.search.endpoint = endpoint;
        }

        if let Some(engine) = engine {
            self.search.engine = engine;
        }

        if let Some(depth) = focus_depth {
            self.answer.focus_depth = depth;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate the merged configuration.
    pub fn validate(&self) -> AppResult<()> {
        let endpoint = url::Url::parse(&self.search.endpoint).map_err(|e| {
            AppError::Config(format!(
                "Invalid search endpoint {:?}: {}",
                self.search.endpoint, e
            ))
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Search endpoint must be http(s): {}",
                self.search.endpoint
            )));
        }

        if self.search.engine.trim().is_empty() {
            return Err(AppError::Config("Search engine name is empty".to_string()));
        }

        let limits = [
            ("search.resultCount", self.search.result_count),
            ("answer.sourceCap", self.answer.source_cap),
            ("answer.paperLimit", self.answer.paper_limit),
            ("answer.focusDepth", self.answer.focus_depth),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(AppError::Config(format!("{} must be at least 1", name)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.search.endpoint, DEFAULT_SEARCH_ENDPOINT);
        assert_eq!(config.search.engine, "google");
        assert!(!config.search.is_configured());
        assert_eq!(config.answer.source_cap, 5);
        assert_eq!(config.answer.paper_limit, 5);
        assert_eq!(config.answer.focus_depth, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_api_key_is_not_configured() {
        let settings = SearchSettings {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!settings.is_configured());
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            ("HONEYSCOPE_SEARCH_API_KEY", "secret"),
            ("HONEYSCOPE_SEARCH_ENGINE", "bing"),
            ("NO_COLOR", "1"),
        ]);
        let config = AppConfig::default().apply_env(|k| vars.get(k).cloned());

        assert!(config.search.is_configured());
        assert_eq!(config.search.engine, "bing");
        assert_eq!(config.search.endpoint, DEFAULT_SEARCH_ENDPOINT);
        assert!(config.no_color);
    }

    #[test]
    fn test_merge_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "search:\n  engine: duckduckgo\n  apiKeyEnv: MY_SERP_KEY\nanswer:\n  focusDepth: 2\nlogging:\n  level: debug\n  color: false"
        )
        .unwrap();

        let vars = env(&[("MY_SERP_KEY", "abc123")]);
        let config = AppConfig::default()
            .merge_yaml(file.path(), |k| vars.get(k).cloned())
            .unwrap();

        assert_eq!(config.search.engine, "duckduckgo");
        assert_eq!(config.search.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.answer.focus_depth, 2);
        assert_eq!(config.answer.source_cap, 5);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.no_color);
    }

    #[test]
    fn test_merge_yaml_rejects_garbage() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "search: [unterminated").unwrap();

        let result = AppConfig::default().merge_yaml(file.path(), |_| None);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_missing_explicit_config_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let result = AppConfig::load_from(Some(missing));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default().with_overrides(
            Some("http://localhost:9000/search".to_string()),
            None,
            Some(4),
            None,
            true,
            false,
        );

        assert_eq!(config.search.endpoint, "http://localhost:9000/search");
        assert_eq!(config.answer.focus_depth, 4);
        assert!(config.verbose);
        assert_eq!(config.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let mut config = AppConfig::default();
        config.search.endpoint = "ftp://example.com/search".to_string();
        assert!(config.validate().is_err());

        config.search.endpoint = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = AppConfig::default();
        config.answer.focus_depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_not_serialized() {
        let mut config = AppConfig::default();
        config.search.api_key = Some("topsecret".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("topsecret"));
    }
}
