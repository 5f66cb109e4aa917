pub type Vector3 = cgmath::Vector3<f32>;

/// A single triangle held by value, vertices in winding order.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}
