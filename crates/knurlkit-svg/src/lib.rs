//! # Knurlkit SVG Boundary
//!
//! The import and export adapters around the pattern generator.
//!
//! Import extracts named closed paths from an SVG document and converts them
//! to polygons. Parsing is deliberately narrow: `<path>`, `<polygon>` and
//! `<rect>` elements are recognized, curve commands are sampled at their
//! endpoints, and no attempt is made at general SVG correctness. Geometry
//! that is not a simple closed path produces garbage-in-garbage-out rather
//! than an error.
//!
//! Export serializes pattern borders (filled) and milling contours (stroked
//! outlines) back into an SVG document.

pub mod error;
pub mod export;
pub mod import;

pub use error::SvgError;
pub use export::{render_pattern_svg, write_pattern_svg};
pub use import::{load_named_polygons, parse_polygons};
