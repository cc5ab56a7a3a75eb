//! Error types for the geometry crate.

use thiserror::Error;

/// Errors raised when constructing geometry from raw coordinate data.
#[derive(Error, Debug)]
pub enum GeometryError {
    /// A polygon ring has fewer than three distinct vertices.
    #[error("Degenerate ring: {0} distinct vertices (need at least 3)")]
    DegenerateRing(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_ring_names_vertex_count() {
        let err = GeometryError::DegenerateRing(2);
        assert!(err.to_string().contains("2 distinct vertices"));
    }
}
