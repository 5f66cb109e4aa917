use barpath_mesh::{Facet, TriangleMesh, Vector3};

use crate::error::BarError;

/// Extrudes ordered control points into a closed solid bar.
///
/// Each control point becomes the center of a rectangular cross-section,
/// 2*`depth` tall along y and 2*`width` wide along z. The cross-section is
/// axis-aligned at every station; it never rotates to follow the path.
/// Consecutive stations are joined by four side faces split into triangles,
/// and the first and last stations are capped, closing the solid.
///
/// The solid traces the control polygon, not a resampled curve, so the mesh
/// size stays proportional to the fiducial count. Near-coincident stations
/// produce near-zero-area side faces; they are not rejected here.
pub fn extrude_bar<M: TriangleMesh>(
    points: &[Vector3],
    width: f32,
    depth: f32,
) -> Result<M, BarError> {
    if points.len() < 2 {
        return Err(BarError::InsufficientPoints {
            needed: 2,
            got: points.len(),
        });
    }
    if width <= 0.0 || depth <= 0.0 {
        return Err(BarError::InvalidParameter { width, depth });
    }

    let stations = points.len();
    let mut vertices = Vec::with_capacity(4 * stations);
    let mut facets = Vec::with_capacity(8 * (stations - 1) + 4);

    for (i, p) in points.iter().enumerate() {
        // Four corners of the cross-section centered on this station.
        vertices.push(Vector3 {
            x: p.x,
            y: p.y + depth,
            z: p.z + width,
        });
        vertices.push(Vector3 {
            x: p.x,
            y: p.y + depth,
            z: p.z - width,
        });
        vertices.push(Vector3 {
            x: p.x,
            y: p.y - depth,
            z: p.z + width,
        });
        vertices.push(Vector3 {
            x: p.x,
            y: p.y - depth,
            z: p.z - width,
        });

        if i + 1 < stations {
            let base = (4 * i) as u32;
            let next = base + 4;

            // Front face (+y side).
            facets.push(Facet {
                p0: base,
                p1: next,
                p2: next + 1,
            });
            facets.push(Facet {
                p0: base,
                p1: next + 1,
                p2: base + 1,
            });
            // Back face (-y side).
            facets.push(Facet {
                p0: base + 2,
                p1: next + 3,
                p2: next + 2,
            });
            facets.push(Facet {
                p0: base + 2,
                p1: base + 3,
                p2: next + 3,
            });
            // Top face (+z side).
            facets.push(Facet {
                p0: base,
                p1: next + 2,
                p2: next,
            });
            facets.push(Facet {
                p0: base,
                p1: base + 2,
                p2: next + 2,
            });
            // Bottom face (-z side).
            facets.push(Facet {
                p0: base + 1,
                p1: next + 1,
                p2: next + 3,
            });
            facets.push(Facet {
                p0: base + 1,
                p1: next + 3,
                p2: base + 3,
            });
        }
    }

    // Cap both open ends.
    facets.push(Facet { p0: 0, p1: 1, p2: 2 });
    facets.push(Facet { p0: 1, p1: 3, p2: 2 });

    let last = (vertices.len() - 4) as u32;
    facets.push(Facet {
        p0: last,
        p1: last + 1,
        p2: last + 2,
    });
    facets.push(Facet {
        p0: last + 1,
        p1: last + 3,
        p2: last + 2,
    });

    Ok(M::from_parts(vertices, facets))
}
