use crate::{
    geometry::{Triangle, Vector3},
    TriangleMesh,
};

/// A single facet referencing its vertices by index.
///
/// This type must be paired with a list of vertices. The points here are only
/// indices into another vector, so a vertex shared by many facets is stored
/// once. That is the common case for the solids built in this workspace:
/// every interior cross-section corner is shared by several side faces.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Facet {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

/// Triangle mesh stored as a vertex list plus index triples.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh {
    pub points: Vec<Vector3>,
    pub facets: Vec<Facet>,
}

impl IndexedMesh {
    /// Iterates the facets as dereferenced [`Triangle`] values.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.facets.iter().map(|f| Triangle {
            p0: self.points[f.p0 as usize],
            p1: self.points[f.p1 as usize],
            p2: self.points[f.p2 as usize],
        })
    }
}

impl TriangleMesh for IndexedMesh {
    fn from_parts(points: Vec<Vector3>, facets: Vec<Facet>) -> Self {
        Self { points, facets }
    }

    fn points(&self) -> &[Vector3] {
        self.points.as_slice()
    }

    fn facets(&self) -> &[Facet] {
        self.facets.as_slice()
    }
}
