//! Command handlers for the Honeyscope CLI.
//!
//! Each command is a thin caller over `honeyscope_pipeline`; nothing here
//! changes how a query is answered.

pub mod ask;
pub mod chat;
pub mod classify;
pub mod field;
pub mod papers;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use classify::ClassifyCommand;
pub use field::FieldCommand;
pub use papers::PapersCommand;
