//! Export errors.

use thiserror::Error;

/// Error returned when serializing a token set fails.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested format id is not in the registry.
    #[error("unknown export format '{id}'")]
    UnknownFormat { id: String },

    /// A text template failed to render.
    #[error("failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    /// A JSON document failed to serialize.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
