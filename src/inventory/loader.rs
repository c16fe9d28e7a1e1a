use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{json_kind, RatingError};

/// Top-level key grouping application entries by id
pub const APPLICATIONS_KEY: &str = "Applications";

/// Load an inventory document from a JSON file
///
/// Key order of the document is preserved, so applications keep their file
/// order through rating.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The content is not valid JSON
pub fn load_inventory(path: &Path) -> Result<Value, RatingError> {
    if !path.exists() {
        return Err(RatingError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| RatingError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Read {} bytes of inventory from {}", content.len(), path.display());

    serde_json::from_str(&content).map_err(|source| RatingError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Locate the `Applications` grouping in an inventory document
///
/// Accepts either an object holding the grouping, or an array whose first
/// element is such an object (the upstream export wraps the inventory in a
/// one-element list).
pub fn applications(document: &Value) -> Result<&Map<String, Value>, RatingError> {
    let root = match document {
        Value::Array(items) => items.first().ok_or(RatingError::EmptyDocument)?,
        other => other,
    };

    let root = root.as_object().ok_or(RatingError::InvalidDocument {
        found: json_kind(root),
    })?;

    let grouping = root
        .get(APPLICATIONS_KEY)
        .ok_or(RatingError::MissingApplications)?;

    grouping
        .as_object()
        .ok_or(RatingError::InvalidApplications {
            found: json_kind(grouping),
        })
}
