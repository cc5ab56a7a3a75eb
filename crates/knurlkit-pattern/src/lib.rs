//! # Knurlkit Pattern Generation
//!
//! Turns a blade outline and a cutting bounding region into a machinable
//! relief pattern: the working region is tiled into square cells, and each
//! cell is eroded into concentric inward-offset milling contours with a
//! checkerboard phase rule deciding which contours are retained.
//!
//! The pipeline runs strictly left to right, with no feedback:
//! import → working region → grid tiling → per-cell erosion → export.
//! Cells are independent of one another; each erosion loop owns its own
//! shrinking region.

pub mod config;
pub mod driver;
pub mod erosion;
pub mod error;
pub mod grid;
pub mod region;

pub use config::PatternConfig;
pub use driver::{generate, run, PatternOutput};
pub use erosion::{cell_phase, erode, Erosion, ITERATION_CAP};
pub use error::PatternError;
pub use grid::{GridTiler, Tile};
pub use region::build_working_region;
