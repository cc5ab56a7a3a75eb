//! Immutable polygon type: one exterior ring plus optional hole rings.

use crate::error::GeometryError;
use crate::point::Point;

/// Tolerance below which two vertices are treated as coincident.
const COINCIDENT_EPS: f64 = 1e-9;

/// An ordered, closed sequence of 2D points describing an exterior boundary,
/// optionally with interior hole rings. Rings are stored unclosed (the
/// implicit closing edge from the last vertex back to the first is not
/// duplicated). Immutable once constructed; all region operations produce new
/// values.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Vec<Point>,
    holes: Vec<Vec<Point>>,
}

impl Polygon {
    /// Creates a polygon from an exterior ring. A trailing vertex coincident
    /// with the first (the usual closed-path convention) is dropped, as are
    /// consecutive duplicate vertices.
    pub fn new(exterior: Vec<Point>) -> Result<Self, GeometryError> {
        Self::with_holes(exterior, Vec::new())
    }

    /// Creates a polygon with interior hole rings. Each hole ring is cleaned
    /// the same way as the exterior; degenerate holes are rejected.
    pub fn with_holes(
        exterior: Vec<Point>,
        holes: Vec<Vec<Point>>,
    ) -> Result<Self, GeometryError> {
        let exterior = clean_ring(exterior)?;
        let holes = holes
            .into_iter()
            .map(clean_ring)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { exterior, holes })
    }

    /// The exterior ring, unclosed.
    pub fn exterior(&self) -> &[Point] {
        &self.exterior
    }

    /// Interior hole rings, unclosed.
    pub fn holes(&self) -> &[Vec<Point>] {
        &self.holes
    }
}

/// Drops the closing vertex and consecutive duplicates, then validates that
/// at least three distinct vertices remain.
fn clean_ring(points: Vec<Point>) -> Result<Vec<Point>, GeometryError> {
    let mut ring: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        match ring.last() {
            Some(last) if last.distance_to(&p) <= COINCIDENT_EPS => {}
            _ => ring.push(p),
        }
    }
    if ring.len() > 1 {
        let first = ring[0];
        if ring.last().map(|l| l.distance_to(&first) <= COINCIDENT_EPS) == Some(true) {
            ring.pop();
        }
    }
    if ring.len() < 3 {
        return Err(GeometryError::DegenerateRing(ring.len()));
    }
    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn closing_vertex_is_dropped() {
        let mut pts = square();
        pts.push(Point::new(0.0, 0.0));
        let poly = Polygon::new(pts).unwrap();
        assert_eq!(poly.exterior().len(), 4);
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let poly = Polygon::new(pts).unwrap();
        assert_eq!(poly.exterior().len(), 3);
    }

    #[test]
    fn two_distinct_vertices_are_degenerate() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        assert!(Polygon::new(pts).is_err());
    }

    #[test]
    fn holes_are_kept() {
        let hole = vec![
            Point::new(2.0, 2.0),
            Point::new(4.0, 2.0),
            Point::new(4.0, 4.0),
            Point::new(2.0, 4.0),
        ];
        let poly = Polygon::with_holes(square(), vec![hole]).unwrap();
        assert_eq!(poly.holes().len(), 1);
    }
}
