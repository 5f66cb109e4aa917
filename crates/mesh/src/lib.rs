mod geometry;
mod indexed;

pub use geometry::*;
pub use indexed::*;

/// A reasonable default mesh to select for unopinionated consumers.
pub type DefaultMesh = IndexedMesh;

pub trait TriangleMesh: Sized {
    /// Creates a TriangleMesh from a shared vertex list and the facets
    /// indexing into it.
    ///
    /// # Arguments
    ///
    /// * `points` - The vertices of the mesh.
    /// * `facets` - Index triples into `points`, one per triangle.
    fn from_parts(points: Vec<Vector3>, facets: Vec<Facet>) -> Self;

    /// Returns the vertices of this mesh in construction order.
    fn points(&self) -> &[Vector3];

    /// Returns the facets of this mesh in construction order.
    fn facets(&self) -> &[Facet];

    /// Returns the number of vertices in this mesh.
    fn vertex_count(&self) -> usize {
        self.points().len()
    }

    /// Returns the number of triangles that comprises this mesh.
    fn triangle_count(&self) -> usize {
        self.facets().len()
    }
}
