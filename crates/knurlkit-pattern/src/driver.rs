//! Driver: wires import → working region → tiling → erosion → export.

use std::path::Path;

use knurlkit_geom::{Polygon, Region};
use knurlkit_svg::{load_named_polygons, write_pattern_svg, SvgError};
use tracing::{debug, info};

use crate::config::PatternConfig;
use crate::erosion::erode;
use crate::error::PatternError;
use crate::grid::{GridTiler, Tile};
use crate::region::build_working_region;

/// The accumulated output of a run: pattern borders (one per occupied cell)
/// and milling contours (one per retained erosion iteration), plus run
/// diagnostics. Built once, consumed once by the export adapter.
#[derive(Debug, Default)]
pub struct PatternOutput {
    pub borders: Vec<Region>,
    pub millings: Vec<Region>,
    /// Number of grid cells that produced a pattern border.
    pub cells: usize,
    /// Number of cells whose erosion hit the iteration cap.
    pub cap_hits: usize,
}

impl PatternOutput {
    /// Exterior outlines of all pattern borders, for export.
    pub fn border_outlines(&self) -> Vec<Polygon> {
        self.borders.iter().flat_map(|r| r.outlines()).collect()
    }

    /// Exterior outlines of all milling contours, for export.
    pub fn milling_outlines(&self) -> Vec<Polygon> {
        self.millings.iter().flat_map(|r| r.outlines()).collect()
    }
}

/// What one cell contributes to the output set. Cells are independent, so
/// this is computed by a pure per-cell function and merged afterwards.
struct CellOutput {
    border: Region,
    contours: Vec<Region>,
    cap_reached: bool,
}

fn carve_cell(tile: Tile, spacing: f64, alternate: bool) -> CellOutput {
    let erosion = erode(&tile.border, tile.ix, tile.iy, spacing, alternate);
    debug!(
        ix = tile.ix,
        iy = tile.iy,
        contours = erosion.contours.len(),
        iterations = erosion.iterations,
        "carved cell"
    );
    CellOutput {
        border: tile.border,
        contours: erosion.contours,
        cap_reached: erosion.cap_reached,
    }
}

/// Generates the relief pattern for an SVG document. Fails only when the
/// required named geometry is missing or the document is not SVG; an empty
/// working region produces an empty (but valid) output set.
pub fn generate(svg: &str, config: &PatternConfig) -> Result<PatternOutput, PatternError> {
    config.validate()?;

    let ids = [config.blade_id.as_str(), config.bounding_id.as_str()];
    let mut polygons = load_named_polygons(svg, &ids).map_err(|err| match err {
        SvgError::MissingGeometry { id } => PatternError::MissingGeometry { id },
        other => PatternError::Svg(other),
    })?;
    let blade = polygons
        .remove(&config.blade_id)
        .ok_or_else(|| PatternError::MissingGeometry {
            id: config.blade_id.clone(),
        })?;
    let bounding = polygons
        .remove(&config.bounding_id)
        .ok_or_else(|| PatternError::MissingGeometry {
            id: config.bounding_id.clone(),
        })?;

    let working = build_working_region(&blade, &bounding, config.margin);
    let tiler = GridTiler::new(working, config.rect_size);

    let mut output = PatternOutput::default();
    for tile in tiler.tiles() {
        let cell = carve_cell(tile, config.space, config.alternate);
        output.cells += 1;
        if cell.cap_reached {
            output.cap_hits += 1;
        }
        output.borders.push(cell.border);
        output.millings.extend(cell.contours);
    }

    info!(
        cells = output.cells,
        borders = output.borders.len(),
        millings = output.millings.len(),
        cap_hits = output.cap_hits,
        "pattern generated"
    );
    Ok(output)
}

/// Full batch run: read the input document, generate the pattern, and invoke
/// the export adapter exactly once. Aborts before touching the output file
/// when required geometry is missing.
pub fn run(
    input: &Path,
    output: &Path,
    config: &PatternConfig,
) -> Result<PatternOutput, PatternError> {
    let svg = std::fs::read_to_string(input)?;
    let pattern = generate(&svg, config)?;
    write_pattern_svg(
        output,
        &pattern.border_outlines(),
        &pattern.milling_outlines(),
    )?;
    info!(output = %output.display(), "output saved");
    Ok(pattern)
}
