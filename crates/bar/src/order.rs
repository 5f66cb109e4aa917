use std::f32::consts::PI;

use barpath_mesh::Vector3;
use ordered_float::OrderedFloat;

use crate::error::BarError;

fn f32_cmp(a: &f32, b: &f32) -> std::cmp::Ordering {
    a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
}

/// Orders fiducials into a single sweep by angle around a derived center.
///
/// The center is the x centroid of the cloud pushed below its lowest point
/// (min y minus 1), so the angular sort sweeps once across the whole cloud
/// instead of splitting it at an arbitrary seam. Angles are taken from the
/// xy projection, normalized to [0, 2pi), then re-keyed by a half turn to
/// move the angular origin to the bottom of the cloud.
///
/// The sort is stable: points with equal keys keep their input order.
pub fn polar_sweep_order(points: &[Vector3]) -> Result<Vec<Vector3>, BarError> {
    if points.len() < 2 {
        return Err(BarError::InsufficientPoints {
            needed: 2,
            got: points.len(),
        });
    }

    let cx = points.iter().map(|p| p.x).sum::<f32>() / points.len() as f32;
    let cy = points.iter().fold(f32::INFINITY, |min, p| min.min(p.y)) - 1.0;

    let mut ordered = points.to_vec();
    ordered.sort_by_key(|p| {
        let angle = (p.y - cy).atan2(p.x - cx).rem_euclid(2.0 * PI);
        let key = if angle >= PI {
            angle - PI
        } else {
            angle + PI
        };
        OrderedFloat(key)
    });
    Ok(ordered)
}

/// Orders fiducials by ascending x.
///
/// This is the order the markup length is measured in; bar generation uses
/// [`polar_sweep_order`] instead. The two orderings differ on purpose.
pub fn x_order(points: &[Vector3]) -> Result<Vec<Vector3>, BarError> {
    if points.len() < 2 {
        return Err(BarError::InsufficientPoints {
            needed: 2,
            got: points.len(),
        });
    }

    let mut ordered = points.to_vec();
    ordered.sort_by(|a, b| f32_cmp(&a.x, &b.x));
    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }

    #[test]
    fn too_few_points() {
        assert_eq!(
            Err(BarError::InsufficientPoints { needed: 2, got: 0 }),
            polar_sweep_order(&[])
        );
        assert_eq!(
            Err(BarError::InsufficientPoints { needed: 2, got: 1 }),
            polar_sweep_order(&[v(1.0, 2.0, 3.0)])
        );
        assert_eq!(
            Err(BarError::InsufficientPoints { needed: 2, got: 1 }),
            x_order(&[v(1.0, 2.0, 3.0)])
        );
    }

    #[test]
    fn sweep_order_of_rising_ridge() {
        // Center lands at (10, -1); the re-keyed angles grow from the
        // rightmost point to the leftmost, so the sweep runs right to left.
        let points = [v(0.0, 0.0, 0.0), v(10.0, 0.0, 0.0), v(20.0, 5.0, 0.0)];
        let ordered = polar_sweep_order(&points).unwrap();
        assert_eq!(
            ordered,
            vec![v(20.0, 5.0, 0.0), v(10.0, 0.0, 0.0), v(0.0, 0.0, 0.0)]
        );
    }

    #[test]
    fn sweep_order_is_permutation_invariant() {
        let points = [v(0.0, 0.0, 0.0), v(10.0, 0.0, 0.0), v(20.0, 5.0, 0.0)];
        let expected = polar_sweep_order(&points).unwrap();

        let permutations = [
            [points[0], points[2], points[1]],
            [points[1], points[0], points[2]],
            [points[1], points[2], points[0]],
            [points[2], points[0], points[1]],
            [points[2], points[1], points[0]],
        ];
        for permutation in &permutations {
            assert_eq!(expected, polar_sweep_order(permutation).unwrap());
        }
    }

    #[test]
    fn sweep_order_preserves_the_point_multiset() {
        let points = [
            v(3.0, 9.0, -2.0),
            v(-7.0, 1.0, 4.0),
            v(0.5, 12.0, 0.0),
            v(11.0, 2.5, 1.0),
            v(-2.0, 6.0, 3.0),
        ];
        let ordered = polar_sweep_order(&points).unwrap();
        assert_eq!(points.len(), ordered.len());
        for p in &points {
            assert_eq!(
                points.iter().filter(|q| *q == p).count(),
                ordered.iter().filter(|q| *q == p).count()
            );
        }
    }

    #[test]
    fn equal_angles_keep_input_order() {
        // Both points sit straight above the derived center, so their sort
        // keys are identical and the stable sort must not swap them.
        let a = v(0.0, 0.0, 1.0);
        let b = v(0.0, 10.0, 2.0);
        assert_eq!(vec![a, b], polar_sweep_order(&[a, b]).unwrap());
        assert_eq!(vec![b, a], polar_sweep_order(&[b, a]).unwrap());
    }

    #[test]
    fn x_order_sorts_ascending() {
        let points = [v(20.0, 5.0, 0.0), v(0.0, 0.0, 0.0), v(10.0, 0.0, 0.0)];
        let ordered = x_order(&points).unwrap();
        assert_eq!(
            ordered,
            vec![v(0.0, 0.0, 0.0), v(10.0, 0.0, 0.0), v(20.0, 5.0, 0.0)]
        );
    }
}
