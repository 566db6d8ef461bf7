//! Provides great-circle distance and point-to-chord distance.
//!
//! All distances are kilometers on a sphere with the mean Earth radius,
//! inputs are decimal degrees. Longitude comes first in every argument
//! list, matching the `x, y` axis order of the projection engine.

/// Mean Earth radius \[km\].
const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

#[inline]
fn haversine(angle: f64) -> f64 {
    (angle / 2.0).sin().powi(2)
}

/// Returns the great-circle distance \[km\] between two points.
///
/// Haversine formula on a sphere of radius 6371.0 km. The result is
/// non-negative, symmetric in its two points, and zero for coincident
/// points.
///
/// # Example
///
/// ```
/// # use geofmt::distance;
/// // Two points roughly 2.3 km apart in Surrey
/// let d = distance(-0.427093, 51.273458, -0.400305, 51.286216);
/// assert!((d - 2.3).abs() < 0.1);
///
/// assert_eq!(distance(10.0, 45.0, 10.0, 45.0), 0.0);
/// ```
pub fn distance(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> f64 {
    let x1 = lng1.to_radians();
    let y1 = lat1.to_radians();
    let x2 = lng2.to_radians();
    let y2 = lat2.to_radians();

    (haversine(y2 - y1) + (1.0 - haversine(y1 - y2) - haversine(y1 + y2)) * haversine(x2 - x1))
        .sqrt()
        .asin()
        * 2.0
        * EARTH_MEAN_RADIUS_KM
}

/// Returns the distance \[km\] from a point to the chord joining two
/// other points.
///
/// The three points form a triangle with sides measured by [`distance`];
/// Heron's formula gives the area and the height over the chord is
/// `2 * area / base`. The approximation holds when the points are close
/// enough that great-circle arcs approximate straight chords, which is
/// the case for consecutive track points.
///
/// When the chord endpoints coincide the base is zero and the height is
/// undefined; by convention the result is then the distance from the
/// point to the coincident endpoints.
///
/// Floating error can drive Heron's radicand slightly negative for
/// near-collinear points, so it is floored at zero.
///
/// # Example
///
/// ```
/// # use geofmt::perpendicular_distance;
/// // Point half a degree north of the midpoint of a 2 degree chord
/// // on the equator, roughly 55.6 km
/// let d = perpendicular_distance(0.0, 0.0, 2.0, 0.0, 1.0, 0.5);
/// assert!((d - 55.6).abs() < 0.5);
///
/// // Degenerate chord: distance to the endpoint
/// let d = perpendicular_distance(0.0, 0.0, 0.0, 0.0, 1.0, 0.0);
/// assert!(d > 100.0);
/// ```
pub fn perpendicular_distance(
    lng1: f64,
    lat1: f64,
    lng2: f64,
    lat2: f64,
    lng0: f64,
    lat0: f64,
) -> f64 {
    let a = distance(lng0, lat0, lng1, lat1);
    let b = distance(lng1, lat1, lng2, lat2);
    let c = distance(lng2, lat2, lng0, lat0);

    if b == 0.0 {
        return a;
    }

    let s = (a + b + c) / 2.0;
    let area = (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt();

    area * 2.0 / b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_symmetry() {
        let cases = [
            ((-0.427093, 51.273458), (-0.400305, 51.286216)),
            ((0.0, 0.0), (1.0, 1.0)),
            ((170.0, 45.0), (-170.0, 45.0)),
            ((-6.26, 53.35), (-0.13, 51.51)),
        ];

        for ((x1, y1), (x2, y2)) in cases {
            let forward = distance(x1, y1, x2, y2);
            let backward = distance(x2, y2, x1, y1);
            assert_eq!(forward, backward);
            assert!(forward >= 0.0);
        }
    }

    #[test]
    fn test_distance_coincident() {
        for (x, y) in [(0.0, 0.0), (-0.4, 51.3), (179.9, -89.0)] {
            assert_eq!(distance(x, y, x, y), 0.0);
        }
    }

    #[test]
    fn test_distance_known_value() {
        // Independent flat-Earth cross-check: dy = 0.012758 deg ~ 1.419 km,
        // dx = 0.026788 deg * cos(51.28) ~ 1.863 km, norm ~ 2.34 km.
        let d = distance(-0.427093, 51.273458, -0.400305, 51.286216);
        assert!((d - 2.3).abs() < 0.1, "{}", d);
    }

    #[test]
    fn test_distance_equator_degree() {
        // One degree of longitude on the equator, 2 * pi * R / 360
        let d = distance(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.195).abs() < 0.01, "{}", d);
    }

    #[test]
    fn test_perpendicular_distance_collinear() {
        // Points on the equator are on a single great circle. Heron's
        // formula amplifies rounding near degeneracy, so allow a meter.
        let d = perpendicular_distance(0.0, 0.0, 2.0, 0.0, 1.0, 0.0);
        assert!(d.abs() < 1e-3, "{}", d);

        // Points on a meridian likewise
        let d = perpendicular_distance(10.0, 40.0, 10.0, 42.0, 10.0, 41.0);
        assert!(d.abs() < 1e-3, "{}", d);
    }

    #[test]
    fn test_perpendicular_distance_offset() {
        // 0.1 degree of latitude is ~11.1 km whatever the chord longitude
        let d = perpendicular_distance(0.0, 0.0, 1.0, 0.0, 0.5, 0.1);
        assert!((d - 11.12).abs() < 0.1, "{}", d);
    }

    #[test]
    fn test_perpendicular_distance_degenerate_chord() {
        let d = perpendicular_distance(0.0, 0.0, 0.0, 0.0, 1.0, 0.0);
        let e = distance(0.0, 0.0, 1.0, 0.0);
        assert_eq!(d, e);
    }
}
