//! Error types for pattern generation.
//!
//! Only missing input geometry and boundary failures are fatal. Empty
//! regions at any stage are ordinary data, and the erosion iteration cap is
//! a logged diagnostic, not an error.

use knurlkit_svg::SvgError;
use std::io;
use thiserror::Error;

/// Errors that abort a pattern generation run.
#[derive(Error, Debug)]
pub enum PatternError {
    /// A required named path is absent from the input document. Fatal: the
    /// run aborts before any output is produced.
    #[error("Missing required geometry: \"{id}\" not found in input document")]
    MissingGeometry { id: String },

    /// A configuration value is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The import or export boundary failed structurally.
    #[error("SVG boundary error: {0}")]
    Svg(#[from] SvgError),

    /// I/O error reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
