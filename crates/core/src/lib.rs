//! Honeyscope Core Library
//!
//! This crate provides the foundational utilities shared by every Honeyscope crate:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management (search provider and answer settings)

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AnswerSettings, AppConfig, SearchSettings};
pub use error::{AppError, AppResult};
