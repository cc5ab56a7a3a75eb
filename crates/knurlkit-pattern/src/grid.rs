//! Grid tiling: partitions the working region's bounding box into square
//! cells and clips the region to each cell.

use knurlkit_geom::{Bounds, Region};

/// Guards the floor division against boolean-offset noise in the region
/// extents so a full final column is not dropped over a sub-micron deficit.
/// A genuinely partial strip is still truncated.
const EXTENT_EPS: f64 = 1e-6;

/// One occupied grid cell: its coordinates, the cell square, and the clipped
/// portion of the working region inside it (the pattern border).
#[derive(Debug, Clone)]
pub struct Tile {
    pub ix: u32,
    pub iy: u32,
    pub cell: Bounds,
    pub border: Region,
}

/// Tiles a region's bounding box into `cell_size` squares. The cell counts
/// use floor division: a final partial strip narrower than `cell_size` at
/// the high edge is not covered by any cell. That truncation is deliberate
/// and part of the pattern's contract.
#[derive(Debug, Clone)]
pub struct GridTiler {
    region: Region,
    cell_size: f64,
}

impl GridTiler {
    pub fn new(region: Region, cell_size: f64) -> Self {
        Self { region, cell_size }
    }

    /// Number of grid columns and rows.
    pub fn grid_dimensions(&self) -> (u32, u32) {
        match self.region.bounds() {
            Some(bounds) if self.cell_size > 0.0 => {
                let nx = ((bounds.width() / self.cell_size) + EXTENT_EPS).floor() as u32;
                let ny = ((bounds.height() / self.cell_size) + EXTENT_EPS).floor() as u32;
                (nx, ny)
            }
            _ => (0, 0),
        }
    }

    /// Lazy iterator over occupied cells, `ix`-major with both axes
    /// ascending. Restartable: each call yields a fresh traversal.
    pub fn tiles(&self) -> Tiles<'_> {
        let (nx, ny) = self.grid_dimensions();
        let origin = self
            .region
            .bounds()
            .map(|b| (b.min_x, b.min_y))
            .unwrap_or((0.0, 0.0));
        Tiles {
            region: &self.region,
            cell_size: self.cell_size,
            origin,
            nx,
            ny,
            ix: 0,
            iy: 0,
        }
    }
}

/// Iterator over the non-empty tiles of a [`GridTiler`].
pub struct Tiles<'a> {
    region: &'a Region,
    cell_size: f64,
    origin: (f64, f64),
    nx: u32,
    ny: u32,
    ix: u32,
    iy: u32,
}

impl Iterator for Tiles<'_> {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        while self.ix < self.nx {
            while self.iy < self.ny {
                let ix = self.ix;
                let iy = self.iy;
                self.iy += 1;

                let x = self.origin.0 + f64::from(ix) * self.cell_size;
                let y = self.origin.1 + f64::from(iy) * self.cell_size;
                let cell = Bounds {
                    min_x: x,
                    min_y: y,
                    max_x: x + self.cell_size,
                    max_y: y + self.cell_size,
                };
                let border = Region::rect(x, y, self.cell_size, self.cell_size)
                    .intersection(self.region);
                if !border.is_empty() {
                    return Some(Tile {
                        ix,
                        iy,
                        cell,
                        border,
                    });
                }
            }
            self.iy = 0;
            self.ix += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_square_tiles_completely() {
        let region = Region::rect(10.0, 10.0, 80.0, 80.0);
        let tiler = GridTiler::new(region, 10.0);
        assert_eq!(tiler.grid_dimensions(), (8, 8));

        let tiles: Vec<Tile> = tiler.tiles().collect();
        assert_eq!(tiles.len(), 64);
        for tile in &tiles {
            assert!((tile.border.area() - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn traversal_is_ix_major_ascending() {
        let region = Region::rect(0.0, 0.0, 30.0, 20.0);
        let tiler = GridTiler::new(region, 10.0);
        let order: Vec<(u32, u32)> = tiler.tiles().map(|t| (t.ix, t.iy)).collect();
        assert_eq!(
            order,
            vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]
        );
    }

    #[test]
    fn tiles_are_restartable() {
        let region = Region::rect(0.0, 0.0, 20.0, 20.0);
        let tiler = GridTiler::new(region, 10.0);
        assert_eq!(tiler.tiles().count(), 4);
        assert_eq!(tiler.tiles().count(), 4);
    }

    #[test]
    fn partial_strip_is_truncated() {
        // 25 wide: two full columns, the final 5-wide strip is dropped.
        let region = Region::rect(0.0, 0.0, 25.0, 10.0);
        let tiler = GridTiler::new(region, 10.0);
        assert_eq!(tiler.grid_dimensions(), (2, 1));
        let max_x = tiler
            .tiles()
            .map(|t| t.cell.max_x)
            .fold(f64::MIN, f64::max);
        assert!((max_x - 20.0).abs() < 1e-9);
    }

    #[test]
    fn empty_region_yields_no_tiles() {
        let tiler = GridTiler::new(Region::empty(), 10.0);
        assert_eq!(tiler.grid_dimensions(), (0, 0));
        assert_eq!(tiler.tiles().count(), 0);
    }

    #[test]
    fn cells_outside_the_region_are_skipped() {
        // An L-shaped working region: the grid spans the full bounding box
        // but only cells overlapping material are emitted.
        let vertical = Region::rect(0.0, 0.0, 10.0, 30.0);
        let tiler = GridTiler::new(vertical, 10.0);
        let tiles: Vec<Tile> = tiler.tiles().collect();
        assert_eq!(tiles.len(), 3);
        assert!(tiles.iter().all(|t| t.ix == 0));
    }

    #[test]
    fn borders_are_contained_in_the_region() {
        let region = Region::rect(3.0, 3.0, 34.0, 27.0);
        let region_bounds = region.bounds().unwrap();
        let tiler = GridTiler::new(region, 10.0);
        for tile in tiler.tiles() {
            let b = tile.border.bounds().unwrap();
            assert!(b.min_x >= region_bounds.min_x - 1e-9);
            assert!(b.max_x <= region_bounds.max_x + 1e-9);
            assert!(b.min_y >= region_bounds.min_y - 1e-9);
            assert!(b.max_y <= region_bounds.max_y + 1e-9);
        }
    }
}
