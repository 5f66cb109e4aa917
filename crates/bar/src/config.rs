/// Parameters for shaping and extruding a bar.
#[derive(Debug, Clone)]
pub struct BarConfig {
    /// Cross-section half-extent along z, in millimeters.
    pub width: f32,
    /// Cross-section half-extent along y, in millimeters.
    pub depth: f32,
    /// Number of points sampled from the fitted curve when measuring it.
    pub curve_samples: usize,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            width: 7.5,
            depth: 1.0,
            curve_samples: 128,
        }
    }
}
