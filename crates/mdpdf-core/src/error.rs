//! Error types for document conversion and rendering

use thiserror::Error;

/// Result type for mdpdf operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors that can occur while building or rendering a document
#[derive(Error, Debug)]
pub enum PdfError {
    /// A node that only makes sense inside its parent was reached on its
    /// own (a table row or cell outside a table). The tree walk is broken.
    #[error("{0} reached outside of its parent table")]
    MisplacedNode(&'static str),

    /// No image data could be resolved for a URL
    #[error("Image not found: {0}")]
    ImageNotFound(String),

    /// The render step failed
    #[error("Render failed: {0}")]
    Render(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
