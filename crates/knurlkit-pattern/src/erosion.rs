//! Erosion engine: iteratively insets a cell's pattern border, retaining
//! contours per the checkerboard phase rule.

use knurlkit_geom::Region;
use tracing::warn;

/// Safety bound on erosion iterations per cell. Reaching it with area still
/// remaining indicates unusually fine spacing relative to the region, or a
/// numerical stall in the offset operation.
pub const ITERATION_CAP: u32 = 1000;

/// Result of eroding one cell.
#[derive(Debug, Clone)]
pub struct Erosion {
    /// Retained milling contours, outermost first; each strictly contained
    /// in the previous.
    pub contours: Vec<Region>,
    /// Number of offset iterations performed.
    pub iterations: u32,
    /// True when the loop stopped at [`ITERATION_CAP`] with material left.
    pub cap_reached: bool,
}

/// Checkerboard phase for the cell at `(ix, iy)`. Adjacent cells always get
/// opposite phases, so their retained bands are offset from each other.
///
/// Kept literally as a two-step XOR: visually similar checkerboard formulas
/// select different band sets, so this must not be replaced by a simplified
/// parity rule without confirming equivalence.
pub fn cell_phase(ix: u32, iy: u32) -> bool {
    let mut odd = ix % 2 == 0;
    if iy % 2 == 0 {
        odd = !odd;
    }
    odd
}

/// Erodes a cell's pattern border at the given spacing. The first inset is a
/// half step so the outermost retained contour sits centered rather than
/// flush with the cell border; each following iteration insets a full step.
/// With `alternate` set, only iterations matching the cell's phase are
/// retained; otherwise every iteration is.
pub fn erode(border: &Region, ix: u32, iy: u32, spacing: f64, alternate: bool) -> Erosion {
    let odd = cell_phase(ix, iy);
    let mut current = border.inset(spacing / 2.0);
    let mut contours = Vec::new();
    let mut iter = 0u32;

    while iter < ITERATION_CAP && !current.is_empty() {
        let even = (iter % 2 == 0) == odd;
        if !alternate || even {
            contours.push(current.clone());
        }
        current = current.inset(spacing);
        iter += 1;
    }

    let cap_reached = !current.is_empty();
    if cap_reached {
        warn!(
            ix,
            iy,
            remaining_area = current.area(),
            "erosion stopped at iteration cap with material remaining"
        );
    }

    Erosion {
        contours,
        iterations: iter,
        cap_reached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> Region {
        Region::rect(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn phase_alternates_between_neighbors() {
        for ix in 0..4u32 {
            for iy in 0..4u32 {
                assert_ne!(cell_phase(ix, iy), cell_phase(ix + 1, iy));
                assert_ne!(cell_phase(ix, iy), cell_phase(ix, iy + 1));
            }
        }
    }

    #[test]
    fn phase_matches_the_source_rule() {
        // odd = (ix % 2 == 0), then flipped when iy is even.
        assert!(!cell_phase(0, 0));
        assert!(cell_phase(1, 0));
        assert!(cell_phase(0, 1));
        assert!(!cell_phase(1, 1));
    }

    #[test]
    fn ten_square_with_two_spacing_runs_two_iterations() {
        // Half-step inset of 1 gives 8x8; full steps give 4x4 then empty.
        let erosion = erode(&cell(), 0, 0, 2.0, false);
        assert_eq!(erosion.iterations, 2);
        assert!(!erosion.cap_reached);
        assert_eq!(erosion.contours.len(), 2);
        assert!((erosion.contours[0].area() - 64.0).abs() < 1e-6);
        assert!((erosion.contours[1].area() - 16.0).abs() < 1e-6);
    }

    #[test]
    fn alternate_retains_every_other_iteration() {
        // Phase false at (0,0): the odd iterations are retained.
        let erosion = erode(&cell(), 0, 0, 2.0, true);
        assert_eq!(erosion.contours.len(), 1);
        assert!((erosion.contours[0].area() - 16.0).abs() < 1e-6);

        // Phase true at (1,0): the even iterations are retained.
        let erosion = erode(&cell(), 1, 0, 2.0, true);
        assert_eq!(erosion.contours.len(), 1);
        assert!((erosion.contours[0].area() - 64.0).abs() < 1e-6);
    }

    #[test]
    fn contours_are_strictly_nested() {
        let erosion = erode(&cell(), 0, 0, 1.0, false);
        assert!(erosion.contours.len() > 2);
        for pair in erosion.contours.windows(2) {
            assert!(pair[1].area() < pair[0].area());
            let outer = pair[0].bounds().unwrap();
            let inner = pair[1].bounds().unwrap();
            assert!(inner.min_x > outer.min_x - 1e-9);
            assert!(inner.max_x < outer.max_x + 1e-9);
            assert!(inner.min_y > outer.min_y - 1e-9);
            assert!(inner.max_y < outer.max_y + 1e-9);
        }
    }

    #[test]
    fn empty_border_terminates_immediately() {
        let erosion = erode(&Region::empty(), 0, 0, 2.0, true);
        assert_eq!(erosion.iterations, 0);
        assert!(erosion.contours.is_empty());
        assert!(!erosion.cap_reached);
    }

    #[test]
    fn termination_within_cap_for_fine_spacing() {
        let erosion = erode(&cell(), 0, 0, 0.05, false);
        assert!(!erosion.cap_reached);
        assert!(erosion.iterations < ITERATION_CAP);
        // 10x10 with 0.025 half-step then 0.05 steps: roughly 100 rings.
        assert!(erosion.iterations > 90);
    }
}
