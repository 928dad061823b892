//! Error types for locale loading

use thiserror::Error;

/// Errors that can occur while building a locale table.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The document is not shaped like a locale table
    #[error("Failed to parse locale table: {0}")]
    ParseError(String),

    /// A message entry is neither a string nor a nested group
    #[error("Invalid message for key '{key}': expected a string or an object")]
    InvalidMessage { key: String },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}
