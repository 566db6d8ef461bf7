//! Provides polyline simplification.
//!
//! A Ramer-Douglas-Peucker pass over `[longitude, latitude]` vertices,
//! measuring deviation with the geodesic perpendicular distance of
//! [`crate::geodesic`] so the tolerance is a real distance in
//! kilometers rather than a degree figure that stretches with
//! latitude.

use crate::geodesic;

/// Simplifies a polyline to the vertices that deviate from it by more
/// than `epsilon` kilometers.
///
/// Vertices are `[longitude, latitude]` pairs in degrees. The first
/// and last vertex always survive; polylines of fewer than three
/// vertices are returned unchanged.
///
/// # Example
///
/// ```
/// let line = [
///     [0.0, 0.0],
///     [0.5, 0.0001],
///     [1.0, 0.0],
///     [1.5, 0.5],
///     [2.0, 1.0],
/// ];
/// let kept = geofmt::simplify(&line, 0.05);
/// assert_eq!(kept, vec![[0.0, 0.0], [1.0, 0.0], [2.0, 1.0]]);
/// ```
pub fn simplify(points: &[[f64; 2]], epsilon: f64) -> Vec<[f64; 2]> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut index = 0;
    let mut max_distance = 0.0;
    for (i, point) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let distance = geodesic::perpendicular_distance(
            first[0], first[1], last[0], last[1], point[0], point[1],
        );
        if distance > max_distance {
            index = i;
            max_distance = distance;
        }
    }

    if max_distance > epsilon {
        let mut left = simplify(&points[..=index], epsilon);
        let right = simplify(&points[index..], epsilon);
        // the split vertex belongs to both halves, keep one copy
        left.pop();
        left.extend(right);
        left
    } else {
        vec![first, last]
    }
}
