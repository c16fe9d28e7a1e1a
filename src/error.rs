//! Error types for inventory loading and rating.
//!
//! Value-level problems never surface here: every malformed field has a
//! fallback score and malformed records are skipped. These variants cover the
//! cases where there is nothing to rate at all.

use std::path::PathBuf;

/// Fatal error for a rating run.
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    /// The inventory file does not exist
    #[error("Inventory file not found at {}", path.display())]
    NotFound { path: PathBuf },

    /// The inventory file exists but could not be read
    #[error("Failed to read inventory at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The inventory file is not valid JSON
    #[error("Failed to parse inventory JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document is an empty array
    #[error("Inventory document is an empty array")]
    EmptyDocument,

    /// The document is neither an object nor an array of objects
    #[error("Inventory document must be an object or an array of objects, found {found}")]
    InvalidDocument { found: &'static str },

    /// No top-level `Applications` grouping
    #[error("Inventory has no \"Applications\" grouping")]
    MissingApplications,

    /// `Applications` exists but is not keyed by application id
    #[error("\"Applications\" must be an object keyed by application id, found {found}")]
    InvalidApplications { found: &'static str },
}

/// Short JSON type name for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
