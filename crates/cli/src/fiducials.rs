use std::path::Path;

use anyhow::{bail, Context};
use barpath_mesh::Vector3;

/// Reads fiducials from a text file.
///
/// One point per line: three reals separated by commas or whitespace, in
/// millimeters. Blank lines and lines starting with `#` are skipped, which
/// covers the coordinate columns of comma-separated markup exports.
pub fn read_fiducials<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Vector3>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading fiducials from {}", path.display()))?;
    parse_fiducials(&text).with_context(|| format!("parsing {}", path.display()))
}

fn parse_fiducials(text: &str) -> anyhow::Result<Vec<Vector3>> {
    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();
        if fields.len() != 3 {
            bail!(
                "line {}: expected 3 coordinates, got {}",
                lineno + 1,
                fields.len()
            );
        }

        let mut coords = [0.0f32; 3];
        for (coord, field) in coords.iter_mut().zip(&fields) {
            *coord = field
                .parse()
                .with_context(|| format!("line {}: bad coordinate {:?}", lineno + 1, field))?;
        }
        points.push(Vector3 {
            x: coords[0],
            y: coords[1],
            z: coords[2],
        });
    }
    Ok(points)
}
