//! SVG import: extracts named closed paths as polygons.
//!
//! Recognizes `<path>`, `<polygon>` and `<rect>` elements. Path data is
//! reduced to a vertex sequence by taking the endpoint of every drawing
//! command, so curves contribute their endpoints only. This is the
//! segment-endpoint sampling the pattern generator was designed around.

use std::collections::HashMap;

use knurlkit_geom::{Point, Polygon};
use tracing::debug;

use crate::error::SvgError;

/// Loads the polygons carrying the given `id` attributes from an SVG
/// document. Fails with [`SvgError::MissingGeometry`] naming the first
/// absent identifier; the caller must treat that as fatal for the run.
pub fn load_named_polygons(
    svg: &str,
    ids: &[&str],
) -> Result<HashMap<String, Polygon>, SvgError> {
    let mut polygons = HashMap::new();
    for (id, polygon) in parse_polygons(svg)? {
        if let Some(id) = id {
            if ids.contains(&id.as_str()) {
                polygons.entry(id).or_insert(polygon);
            }
        }
    }
    for id in ids {
        if !polygons.contains_key(*id) {
            return Err(SvgError::MissingGeometry { id: (*id).to_string() });
        }
    }
    debug!(count = polygons.len(), "loaded named polygons");
    Ok(polygons)
}

/// Parses every recognizable closed shape in the document, with its `id`
/// attribute when present. Shapes that do not yield at least three distinct
/// vertices are skipped.
pub fn parse_polygons(svg: &str) -> Result<Vec<(Option<String>, Polygon)>, SvgError> {
    if !svg.contains("<svg") {
        return Err(SvgError::InvalidDocument);
    }

    let mut found = Vec::new();

    for tag in scan_tags(svg, "<path") {
        if let Some(d) = extract_attr_str(tag, "d") {
            let points = parse_path_data(d);
            if let Ok(polygon) = Polygon::new(points) {
                found.push((extract_attr_string(tag, "id"), polygon));
            }
        }
    }

    for tag in scan_tags(svg, "<polygon") {
        if let Some(points_str) = extract_attr_str(tag, "points") {
            let points = parse_point_list(points_str);
            if let Ok(polygon) = Polygon::new(points) {
                found.push((extract_attr_string(tag, "id"), polygon));
            }
        }
    }

    for tag in scan_tags(svg, "<rect") {
        let x = extract_attr_f64(tag, "x").unwrap_or(0.0);
        let y = extract_attr_f64(tag, "y").unwrap_or(0.0);
        let width = extract_attr_f64(tag, "width").unwrap_or(0.0);
        let height = extract_attr_f64(tag, "height").unwrap_or(0.0);
        if width > 0.0 && height > 0.0 {
            let corners = vec![
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ];
            if let Ok(polygon) = Polygon::new(corners) {
                found.push((extract_attr_string(tag, "id"), polygon));
            }
        }
    }

    Ok(found)
}

/// Yields the contents of every tag starting with `opener`, up to but not
/// including the closing `>`.
fn scan_tags<'a>(svg: &'a str, opener: &'a str) -> impl Iterator<Item = &'a str> {
    let mut search_pos = 0;
    std::iter::from_fn(move || {
        while let Some(tag_start) = svg[search_pos..].find(opener) {
            let abs_tag_start = search_pos + tag_start;
            // Reject prefixes of longer element names ("<path" vs "<pattern").
            let after = svg[abs_tag_start + opener.len()..].chars().next();
            let boundary = matches!(after, Some(c) if c.is_whitespace() || c == '>' || c == '/');
            match svg[abs_tag_start..].find('>') {
                Some(tag_end) => {
                    search_pos = abs_tag_start + tag_end + 1;
                    if boundary {
                        return Some(&svg[abs_tag_start..abs_tag_start + tag_end]);
                    }
                }
                None => return None,
            }
        }
        None
    })
}

fn extract_attr_str<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    let pattern = format!("{}=\"", attr);
    let mut search_pos = 0;
    while let Some(start) = tag[search_pos..].find(&pattern) {
        let abs_start = search_pos + start;
        // Attribute names start after whitespace; a bare substring hit
        // would let `d="` match the tail of `id="`.
        let at_boundary = tag[..abs_start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_whitespace());
        let val_start = abs_start + pattern.len();
        if at_boundary {
            if let Some(end) = tag[val_start..].find('"') {
                return Some(&tag[val_start..val_start + end]);
            }
            return None;
        }
        search_pos = val_start;
    }
    None
}

fn extract_attr_string(tag: &str, attr: &str) -> Option<String> {
    extract_attr_str(tag, attr).map(|s| s.to_string())
}

fn extract_attr_f64(tag: &str, attr: &str) -> Option<f64> {
    extract_attr_str(tag, attr).and_then(|s| s.parse().ok())
}

/// Parses a `points` attribute: whitespace/comma separated coordinate pairs.
fn parse_point_list(points_str: &str) -> Vec<Point> {
    points_str
        .split(|c| c == ' ' || c == ',' || c == '\n' || c == '\t')
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>()
        .chunks(2)
        .filter_map(|chunk| {
            if chunk.len() == 2 {
                let x = chunk[0].parse::<f64>().ok()?;
                let y = chunk[1].parse::<f64>().ok()?;
                Some(Point::new(x, y))
            } else {
                None
            }
        })
        .collect()
}

/// Argument count per path command; the endpoint occupies the final two
/// slots (one slot for H/V).
fn command_arity(cmd: char) -> Option<usize> {
    match cmd.to_ascii_uppercase() {
        'M' | 'L' | 'T' => Some(2),
        'H' | 'V' => Some(1),
        'S' | 'Q' => Some(4),
        'C' => Some(6),
        'A' => Some(7),
        'Z' => Some(0),
        _ => None,
    }
}

/// Reduces SVG path data to the vertex sequence of its first subpath.
/// Curve commands contribute their endpoints. Stops at `Z` or at a second
/// `M` starting a new subpath.
fn parse_path_data(d: &str) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();
    let mut numbers = NumberScanner::new(d);
    let mut current = Point::new(0.0, 0.0);

    while let Some(cmd) = numbers.next_command() {
        let arity = match command_arity(cmd) {
            Some(a) => a,
            None => continue,
        };
        if cmd.eq_ignore_ascii_case(&'z') {
            break;
        }
        let relative = cmd.is_ascii_lowercase();
        let mut first_group = true;
        // Commands repeat implicitly while numbers follow.
        loop {
            let mut args = Vec::with_capacity(arity);
            for _ in 0..arity {
                match numbers.next_number() {
                    Some(n) => args.push(n),
                    None => return points,
                }
            }
            if args.len() < arity {
                return points;
            }
            let upper = cmd.to_ascii_uppercase();
            // A second M starts a new subpath; only the first is used.
            if upper == 'M' && first_group && !points.is_empty() {
                return points;
            }
            current = match upper {
                'H' => {
                    let x = if relative { current.x + args[0] } else { args[0] };
                    Point::new(x, current.y)
                }
                'V' => {
                    let y = if relative { current.y + args[0] } else { args[0] };
                    Point::new(current.x, y)
                }
                _ => {
                    let x = args[arity - 2];
                    let y = args[arity - 1];
                    if relative {
                        Point::new(current.x + x, current.y + y)
                    } else {
                        Point::new(x, y)
                    }
                }
            };
            points.push(current);
            first_group = false;
            if !numbers.peek_is_number() {
                break;
            }
        }
    }

    points
}

/// Splits path data into command letters and numbers, tolerating glued
/// tokens like `M10,20L30-5`.
struct NumberScanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> NumberScanner<'a> {
    fn new(d: &'a str) -> Self {
        Self {
            bytes: d.as_bytes(),
            pos: 0,
        }
    }

    fn skip_separators(&mut self) {
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b == b',' || b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn next_command(&mut self) -> Option<char> {
        self.skip_separators();
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b.is_ascii_alphabetic() {
                self.pos += 1;
                return Some(b as char);
            }
            self.pos += 1;
        }
        None
    }

    fn peek_is_number(&mut self) -> bool {
        self.skip_separators();
        self.pos < self.bytes.len()
            && matches!(self.bytes[self.pos], b'0'..=b'9' | b'-' | b'+' | b'.')
    }

    fn next_number(&mut self) -> Option<f64> {
        self.skip_separators();
        let start = self.pos;
        let mut seen_digit = false;
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            let is_sign = b == b'-' || b == b'+';
            let leading = self.pos == start;
            // A sign mid-number terminates it unless it follows an exponent.
            let after_exp = self.pos > start
                && matches!(self.bytes[self.pos - 1], b'e' | b'E');
            if b.is_ascii_digit() {
                seen_digit = true;
                self.pos += 1;
            } else if b == b'.' || b == b'e' || b == b'E' || (is_sign && (leading || after_exp)) {
                self.pos += 1;
            } else {
                break;
            }
        }
        if !seen_digit {
            self.pos = start;
            return None;
        }
        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()?
            .parse()
            .ok()
    }
}
