//! SVG export: serializes pattern borders and milling contours.
//!
//! Borders are rendered as filled shapes marking the fillable area; milling
//! contours as unfilled stroked outlines, one tool pass each. Only exterior
//! rings are emitted.

use std::path::Path;

use knurlkit_geom::Polygon;
use tracing::debug;

use crate::error::SvgError;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const BORDER_STYLE: &str = "fill:gray";
const MILLING_STYLE: &str = "stroke:black;stroke-width:0.2;fill:none";

/// Renders an output set into an SVG document string. Called once per run;
/// empty collections produce a valid document with no polygon elements.
pub fn render_pattern_svg(borders: &[Polygon], millings: &[Polygon]) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"{}\" version=\"1.1\" width=\"100%\" height=\"100%\">\n",
        SVG_NS
    ));
    for polygon in borders {
        push_polygon_element(&mut svg, polygon, BORDER_STYLE);
    }
    for polygon in millings {
        push_polygon_element(&mut svg, polygon, MILLING_STYLE);
    }
    svg.push_str("</svg>\n");
    debug!(
        borders = borders.len(),
        millings = millings.len(),
        "rendered pattern document"
    );
    svg
}

/// Renders and writes the document to a file.
pub fn write_pattern_svg(
    path: &Path,
    borders: &[Polygon],
    millings: &[Polygon],
) -> Result<(), SvgError> {
    let svg = render_pattern_svg(borders, millings);
    std::fs::write(path, svg)?;
    Ok(())
}

fn push_polygon_element(out: &mut String, polygon: &Polygon, style: &str) {
    let points = polygon
        .exterior()
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&format!(
        "  <polygon points=\"{}\" style=\"{}\"/>\n",
        points, style
    ));
}
