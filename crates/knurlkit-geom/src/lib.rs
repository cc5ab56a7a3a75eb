//! # Knurlkit Geometry
//!
//! Geometry kernel for knurlkit: 2D polygons and regions with the two
//! operations the pattern generator is built on, polygon boolean
//! intersection and uniform inward offsetting (erosion).
//!
//! All region operations are deterministic and side-effect free. An empty
//! region is an ordinary value, not an error; every operation accepts and
//! produces empty regions gracefully.

pub mod error;
pub mod point;
pub mod polygon;
pub mod region;

pub use error::GeometryError;
pub use point::Point;
pub use polygon::Polygon;
pub use region::{Bounds, Region};
