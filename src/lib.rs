//! # Knurlkit
//!
//! A batch tool that converts a knife blade silhouette and a cutting
//! bounding region (named closed paths in an SVG document) into a
//! machinable relief pattern: a grid of cells, each carrying concentric,
//! checkerboard-phased inward-offset milling contours.
//!
//! ## Architecture
//!
//! Knurlkit is organized as a workspace with multiple crates:
//!
//! 1. **knurlkit-geom** - Polygons and regions, boolean intersection,
//!    inward offsetting
//! 2. **knurlkit-svg** - The import/export boundary around the generator
//! 3. **knurlkit-pattern** - Working region, grid tiling, erosion engine,
//!    and the run driver
//! 4. **knurlkit** - This binary crate, wiring configuration and logging

pub use knurlkit_geom as geom;
pub use knurlkit_pattern as pattern;
pub use knurlkit_svg as svg;

pub use knurlkit_pattern::{generate, run, PatternConfig, PatternError, PatternOutput};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
