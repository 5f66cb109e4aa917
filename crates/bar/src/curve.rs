use barpath_mesh::Vector3;
use cgmath::InnerSpace;

use crate::error::BarError;

/// An interpolating cubic curve through an ordered control-point sequence.
///
/// Built from Catmull-Rom spans with the end tangent points clamped, so the
/// curve passes through every control point. Parameter `t` in [0, 1] covers
/// the N-1 spans in sequence order; t = i/(N-1) lands on control point i.
#[derive(Debug, Clone, PartialEq)]
pub struct BarCurve {
    control: Vec<Vector3>,
}

impl BarCurve {
    /// Fits a curve through `points` in the given order.
    pub fn fit(points: &[Vector3]) -> Result<Self, BarError> {
        if points.len() < 2 {
            return Err(BarError::InsufficientPoints {
                needed: 2,
                got: points.len(),
            });
        }
        Ok(Self {
            control: points.to_vec(),
        })
    }

    /// The control points the curve interpolates.
    pub fn control_points(&self) -> &[Vector3] {
        self.control.as_slice()
    }

    /// Evaluates the curve at `t`. Parameters outside [0, 1] are clamped to
    /// the curve ends.
    pub fn evaluate(&self, t: f32) -> Vector3 {
        let spans = self.control.len() - 1;
        let s = t.clamp(0.0, 1.0) * spans as f32;
        let i = (s as usize).min(spans - 1);
        let u = s - i as f32;

        let p1 = self.control[i];
        let p2 = self.control[i + 1];
        // Clamp the outer tangent points at the curve ends.
        let p0 = if i == 0 { p1 } else { self.control[i - 1] };
        let p3 = if i + 2 < self.control.len() {
            self.control[i + 2]
        } else {
            p2
        };
        catmull_rom(p0, p1, p2, p3, u)
    }

    /// Samples the curve at `samples` evenly spaced parameters across the
    /// whole domain, first and last control points included.
    pub fn sample(&self, samples: usize) -> Vec<Vector3> {
        let samples = samples.max(2);
        (0..samples)
            .map(|i| self.evaluate(i as f32 / (samples - 1) as f32))
            .collect()
    }

    /// Arc length of the curve, approximated by summing segment lengths of
    /// a sampled polyline. Precision scales with `samples`.
    pub fn length(&self, samples: usize) -> f32 {
        polyline_length(&self.sample(samples))
    }
}

/// Sum of Euclidean segment lengths between consecutive points.
pub fn polyline_length(points: &[Vector3]) -> f32 {
    points.windows(2).map(|w| (w[1] - w[0]).magnitude()).sum()
}

fn catmull_rom(p0: Vector3, p1: Vector3, p2: Vector3, p3: Vector3, t: f32) -> Vector3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;

    use super::*;

    fn v(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }

    fn assert_close(a: Vector3, b: Vector3) {
        assert_float_eq!(a.x, b.x, abs <= 0.0001);
        assert_float_eq!(a.y, b.y, abs <= 0.0001);
        assert_float_eq!(a.z, b.z, abs <= 0.0001);
    }

    #[test]
    fn too_few_points() {
        assert_eq!(
            Err(BarError::InsufficientPoints { needed: 2, got: 1 }),
            BarCurve::fit(&[v(0.0, 0.0, 0.0)])
        );
    }

    #[test]
    fn interpolates_every_control_point() {
        let control = [
            v(0.0, 0.0, 0.0),
            v(10.0, 4.0, -1.0),
            v(17.0, 9.0, 2.0),
            v(30.0, 3.0, 0.5),
        ];
        let curve = BarCurve::fit(&control).unwrap();
        for (i, p) in control.iter().enumerate() {
            let t = i as f32 / (control.len() - 1) as f32;
            assert_close(*p, curve.evaluate(t));
        }
    }

    #[test]
    fn two_point_curve_length_is_the_euclidean_distance() {
        let curve = BarCurve::fit(&[v(0.0, 0.0, 0.0), v(3.0, 4.0, 12.0)]).unwrap();
        assert_float_eq!(curve.length(128), 13.0, abs <= 0.001);
    }

    #[test]
    fn evaluate_clamps_the_parameter() {
        let control = [v(0.0, 0.0, 0.0), v(5.0, 5.0, 5.0), v(10.0, 0.0, 0.0)];
        let curve = BarCurve::fit(&control).unwrap();
        assert_close(control[0], curve.evaluate(-0.5));
        assert_close(control[2], curve.evaluate(1.5));
    }

    #[test]
    fn sample_spans_the_whole_curve() {
        let control = [v(0.0, 0.0, 0.0), v(4.0, 6.0, 1.0), v(8.0, 0.0, 2.0)];
        let curve = BarCurve::fit(&control).unwrap();
        let sampled = curve.sample(100);
        assert_eq!(100, sampled.len());
        assert_close(control[0], sampled[0]);
        assert_close(control[2], sampled[99]);
    }

    #[test]
    fn polyline_length_sums_segments() {
        let points = [v(0.0, 0.0, 0.0), v(10.0, 0.0, 0.0), v(20.0, 5.0, 0.0)];
        assert_float_eq!(polyline_length(&points), 10.0 + 125.0_f32.sqrt(), abs <= 0.0001);
    }
}
