//! Error types for Honeyscope.
//!
//! This module defines a unified error enum covering configuration, I/O,
//! search provider and serialization errors.

use thiserror::Error;

/// Unified error type for Honeyscope.
///
/// The answering pipeline never returns these; it converts provider
/// failures into its fallback path.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Live search provider errors (transport, HTTP status, payload)
    #[error("Search provider error: {0}")]
    Provider(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = AppError::Provider("status 503".to_string());
        assert_eq!(err.to_string(), "Search provider error: status 503");
    }

    #[test]
    fn test_every_variant_has_a_source() {
        // No catch-all arm: a variant nothing constructs should not exist.
        let describe = |err: &AppError| match err {
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
            AppError::Provider(_) => "provider",
            AppError::Serialization(_) => "serialization",
        };

        let io: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(describe(&io), "io");
        let yaml: AppError = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err().into();
        assert_eq!(describe(&yaml), "serialization");
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
