//! Error types for the slide editor core.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing, storing, or exporting a presentation.
///
/// Missing slides or elements are not errors: mutations that target them
/// return the document unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// Deleting the only remaining slide was requested.
    #[error("Cannot delete the last slide of a presentation")]
    LastSlide,

    /// No stored presentation has the given id.
    #[error("Presentation not found: {0}")]
    NotFound(String),

    /// The template catalog has no entry with the given id.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// A loaded or deserialized document breaks a model invariant.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Producing an export artifact failed.
    #[error("Export error: {0}")]
    Export(String),
}
