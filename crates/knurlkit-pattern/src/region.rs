//! Working region construction: blade ∩ bounding, inset by the safety margin.

use knurlkit_geom::{Polygon, Region};
use tracing::debug;

/// Computes the working region: the boolean intersection of the blade
/// outline and the cutting bounding region, shrunk inward by `margin`. The
/// offset only ever removes area; convex corners are not compensated
/// outward. An empty intersection yields an empty region, which downstream
/// stages treat as zero contributions rather than an error.
pub fn build_working_region(blade: &Polygon, bounding: &Polygon, margin: f64) -> Region {
    let intersection =
        Region::from_polygon(blade).intersection(&Region::from_polygon(bounding));
    let inset = intersection.inset(margin);
    debug!(
        intersection_area = intersection.area(),
        working_area = inset.area(),
        "built working region"
    );
    inset
}

#[cfg(test)]
mod tests {
    use super::*;
    use knurlkit_geom::Point;

    fn square(origin: f64, size: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(origin, origin),
            Point::new(origin + size, origin),
            Point::new(origin + size, origin + size),
            Point::new(origin, origin + size),
        ])
        .unwrap()
    }

    #[test]
    fn identical_squares_inset_by_margin() {
        let working = build_working_region(&square(0.0, 100.0), &square(0.0, 100.0), 10.0);
        assert!((working.area() - 6400.0).abs() < 1e-6);
        let bounds = working.bounds().unwrap();
        assert!((bounds.min_x - 10.0).abs() < 1e-6);
        assert!((bounds.max_x - 90.0).abs() < 1e-6);
    }

    #[test]
    fn disjoint_inputs_yield_empty_region() {
        let working = build_working_region(&square(0.0, 50.0), &square(100.0, 50.0), 10.0);
        assert!(working.is_empty());
    }

    #[test]
    fn margin_larger_than_overlap_yields_empty_region() {
        let working = build_working_region(&square(0.0, 15.0), &square(0.0, 15.0), 10.0);
        assert!(working.is_empty());
    }

    #[test]
    fn zero_margin_keeps_the_intersection() {
        let working = build_working_region(&square(0.0, 40.0), &square(20.0, 40.0), 0.0);
        assert!((working.area() - 400.0).abs() < 1e-6);
    }
}
