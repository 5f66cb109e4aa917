/// Failures surfaced by the bar-shaping pipeline.
///
/// Every error is a pure return value; nothing is recovered or clamped
/// internally, and no stage produces partial output on failure.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum BarError {
    #[error("at least {needed} fiducial points are required, got {got}")]
    InsufficientPoints { needed: usize, got: usize },

    #[error("extrusion half-extents must be positive, got width={width} depth={depth}")]
    InvalidParameter { width: f32, depth: f32 },
}
