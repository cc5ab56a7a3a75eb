//! Error types for the SVG boundary.

use std::io;
use thiserror::Error;

/// Errors that can occur while importing or exporting SVG documents.
#[derive(Error, Debug)]
pub enum SvgError {
    /// The document is not an SVG document at all.
    #[error("Invalid SVG: missing <svg> element")]
    InvalidDocument,

    /// A required named path is absent from the document.
    #[error("Missing required geometry: no closed path with id \"{id}\"")]
    MissingGeometry { id: String },

    /// I/O error while reading or writing a document file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
