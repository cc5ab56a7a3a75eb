//! Regions: sets of closed loops supporting boolean intersection and inward
//! offsetting via `cavalier_contours`.

use cavalier_contours::polyline::{
    BooleanOp, PlineOffsetOptions, PlineOrientation, PlineSource, PlineSourceMut, PlineVertex,
    Polyline,
};

use crate::point::Point;
use crate::polygon::Polygon;

/// Loops with absolute area below this are discarded as numerical noise.
const AREA_EPS: f64 = 1e-9;

/// Maximum chord deviation when flattening arc segments back to vertices.
const ARC_FLATTEN_EPS: f64 = 1e-3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    fn merge(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// A set of zero or more closed loops: counter-clockwise boundary loops
/// enclosing material, clockwise hole loops removing it. A region may be
/// empty, and a single polygon can split into disjoint pieces under offset
/// and intersection operations.
#[derive(Debug, Clone, Default)]
pub struct Region {
    /// Filled boundary loops, counter-clockwise.
    boundaries: Vec<Polyline<f64>>,
    /// Hole loops, clockwise.
    holes: Vec<Polyline<f64>>,
}

impl Region {
    /// The empty region.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a region from a polygon's exterior and hole rings.
    pub fn from_polygon(polygon: &Polygon) -> Self {
        let mut region = Region::empty();
        region.push_boundary(ring_to_pline(polygon.exterior()));
        for hole in polygon.holes() {
            region.push_hole(ring_to_pline(hole));
        }
        region
    }

    /// Builds an axis-aligned rectangular region.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut region = Region::empty();
        let mut pline = Polyline::new();
        pline.add_vertex(PlineVertex::new(x, y, 0.0));
        pline.add_vertex(PlineVertex::new(x + width, y, 0.0));
        pline.add_vertex(PlineVertex::new(x + width, y + height, 0.0));
        pline.add_vertex(PlineVertex::new(x, y + height, 0.0));
        pline.set_is_closed(true);
        region.push_boundary(pline);
        region
    }

    /// True when the region contains no material.
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Total enclosed area, holes subtracted. Non-negative.
    pub fn area(&self) -> f64 {
        let filled: f64 = self.boundaries.iter().map(|p| p.area().abs()).sum();
        let removed: f64 = self.holes.iter().map(|p| p.area().abs()).sum();
        (filled - removed).max(0.0)
    }

    /// Bounding box over all boundary loops, `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        self.boundaries
            .iter()
            .filter_map(|p| {
                p.extents().map(|e| Bounds {
                    min_x: e.min_x,
                    min_y: e.min_y,
                    max_x: e.max_x,
                    max_y: e.max_y,
                })
            })
            .reduce(|a, b| a.merge(&b))
    }

    /// Boolean intersection with another region. May yield multiple disjoint
    /// pieces or pieces with holes; yields the empty region when the inputs
    /// do not overlap.
    pub fn intersection(&self, other: &Region) -> Region {
        let mut out = Region::empty();
        for a in &self.boundaries {
            for b in &other.boundaries {
                let result = a.boolean(b, BooleanOp::And);
                for p in result.pos_plines {
                    out.push_boundary(p.pline);
                }
                for p in result.neg_plines {
                    out.push_hole(p.pline);
                }
            }
        }
        for hole in self.holes.iter().chain(other.holes.iter()) {
            out = out.subtract_loop(hole);
        }
        out
    }

    /// Uniform inward offset by `distance`: every boundary moves toward the
    /// material interior, every hole grows. Only ever removes area; a region
    /// narrower than `2 * distance` vanishes entirely.
    pub fn inset(&self, distance: f64) -> Region {
        if self.is_empty() || distance == 0.0 {
            return self.clone();
        }
        let opts = PlineOffsetOptions {
            handle_self_intersects: true,
            ..Default::default()
        };

        // Boundary loops are CCW: a positive parallel offset moves left of
        // the travel direction, which is toward the interior.
        let mut out = Region::empty();
        for boundary in &self.boundaries {
            for piece in boundary.parallel_offset_opt(distance, &opts) {
                match piece.orientation() {
                    PlineOrientation::Clockwise => out.push_hole(piece),
                    _ => out.push_boundary(piece),
                }
            }
        }

        // Hole loops are CW: the same positive offset grows the hole into
        // the surrounding material.
        let mut grown_holes = Vec::new();
        for hole in &self.holes {
            grown_holes.extend(hole.parallel_offset_opt(distance, &opts));
        }
        for hole in &grown_holes {
            out = out.subtract_loop(hole);
        }
        out
    }

    /// Closed outlines of the boundary loops as polygons, arcs flattened.
    /// Hole loops are not reported; the export boundary renders exterior
    /// rings only.
    pub fn outlines(&self) -> impl Iterator<Item = Polygon> + '_ {
        self.boundaries.iter().filter_map(|pline| {
            let flat = pline
                .arcs_to_approx_lines(ARC_FLATTEN_EPS)
                .unwrap_or_else(|| pline.clone());
            let points: Vec<Point> = flat
                .vertex_data
                .iter()
                .map(|v| Point::new(v.x, v.y))
                .collect();
            Polygon::new(points).ok()
        })
    }

    /// Removes the material enclosed by `hole` from every boundary loop.
    fn subtract_loop(&self, hole: &Polyline<f64>) -> Region {
        let hole_ccw = oriented_ccw(hole);
        let mut out = Region::empty();
        for boundary in &self.boundaries {
            let result = boundary.boolean(&hole_ccw, BooleanOp::Not);
            for p in result.pos_plines {
                out.push_boundary(p.pline);
            }
            for p in result.neg_plines {
                out.push_hole(p.pline);
            }
        }
        for existing in &self.holes {
            out.push_hole(existing.clone());
        }
        out
    }

    fn push_boundary(&mut self, mut pline: Polyline<f64>) {
        if pline.area().abs() < AREA_EPS {
            return;
        }
        if pline.orientation() == PlineOrientation::Clockwise {
            pline.invert_direction_mut();
        }
        self.boundaries.push(pline);
    }

    fn push_hole(&mut self, mut pline: Polyline<f64>) {
        if pline.area().abs() < AREA_EPS {
            return;
        }
        if pline.orientation() == PlineOrientation::CounterClockwise {
            pline.invert_direction_mut();
        }
        self.holes.push(pline);
    }
}

/// Converts an unclosed ring into a closed polyline.
fn ring_to_pline(ring: &[Point]) -> Polyline<f64> {
    let mut pline = Polyline::new();
    for p in ring {
        pline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
    }
    pline.set_is_closed(true);
    pline
}

/// Returns a CCW copy of the loop for boolean operands.
fn oriented_ccw(pline: &Polyline<f64>) -> Polyline<f64> {
    let mut copy = pline.clone();
    if copy.orientation() == PlineOrientation::Clockwise {
        copy.invert_direction_mut();
    }
    copy
}
