#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Names the axis of a coordinate component.
///
/// Used for cardinal-letter formatting ([`Axis::Latitude`] maps the sign to
/// `N`/`S`, [`Axis::Longitude`] to `E`/`W`) and in error reporting.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        };
        f.write_str(s)
    }
}

/// Represents a position on the Earth, a latitude and longitude pair
/// in decimal degrees (WGS84).
///
/// This is the canonical form at every boundary of the crate: the format
/// detector and codec produce it, the encoder consumes it.
///
/// # Example
///
/// ```
/// # use geofmt::Point;
/// let point = Point::new(51.5074, -0.1278);
/// assert_eq!(point.latitude(), &51.5074);
/// assert_eq!(point.longitude(), &-0.1278);
/// ```
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// The latitude \[deg\] of the point
    pub(crate) latitude: f64,
    /// The longitude \[deg\] of the point
    pub(crate) longitude: f64,
}

impl From<(f64, f64)> for Point {
    /// see [`Point::new()`]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl Point {
    /// Makes a [`Point`].
    ///
    /// This does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use geofmt::Point;
    /// let point = Point::new(51.5074, -0.1278);
    /// assert_eq!(point.latitude(), &51.5074);
    /// assert_eq!(point.longitude(), &-0.1278);
    /// ```
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Makes a [`Point`] with checking.
    ///
    /// # Errors
    ///
    /// If `latitude` and/or `longitude` is out-of-range,
    /// `latitude` must satisfy -90.0 <= and <= 90.0
    /// and `longitude` does -180.0 <= and <= 180.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use geofmt::Point;
    /// assert!(Point::try_new(51.5074, -0.1278).is_ok());
    /// assert!(Point::try_new(91.0, 0.0).is_err());
    /// assert!(Point::try_new(0.0, 181.0).is_err());
    /// assert!(Point::try_new(f64::NAN, 0.0).is_err());
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if latitude.is_nan() {
            return Err(Error::new_nan_position(Axis::Latitude));
        };
        if latitude.lt(&-90.) || 90.0.lt(&latitude) {
            return Err(Error::new_out_of_range_position(Axis::Latitude, -90., 90.));
        };
        if longitude.is_nan() {
            return Err(Error::new_nan_position(Axis::Longitude));
        };
        if longitude.lt(&-180.) || 180.0.lt(&longitude) {
            return Err(Error::new_out_of_range_position(
                Axis::Longitude,
                -180.,
                180.,
            ));
        };

        Ok(Self::new(latitude, longitude))
    }

    /// Returns the latitude of `self`.
    pub fn latitude(&self) -> &f64 {
        &self.latitude
    }

    /// Returns the longitude of `self`.
    pub fn longitude(&self) -> &f64 {
        &self.longitude
    }

    /// Makes a [`Point`] from `self` with both components clipped
    /// to their legal ranges.
    ///
    /// The clip is silent, out-of-range input is not an error here.
    /// Encoding always clamps before projecting or formatting.
    ///
    /// # Example
    ///
    /// ```
    /// # use geofmt::Point;
    /// assert_eq!(Point::new(95.0, 200.0).clamp(), Point::new(90.0, 180.0));
    /// assert_eq!(Point::new(-95.0, -200.0).clamp(), Point::new(-90.0, -180.0));
    /// assert_eq!(Point::new(51.5, -0.1).clamp(), Point::new(51.5, -0.1));
    /// ```
    pub fn clamp(&self) -> Self {
        Self {
            latitude: self.latitude.clamp(-90.0, 90.0),
            longitude: self.longitude.clamp(-180.0, 180.0),
        }
    }
}

/// Tests that a latitude/longitude pair lies in the legal WGS84 range.
///
/// # Example
///
/// ```
/// # use geofmt::point::validate_coordinate;
/// assert!(validate_coordinate(51.5074, -0.1278));
/// assert!(!validate_coordinate(90.5, 0.0));
/// assert!(!validate_coordinate(0.0, -180.5));
/// ```
pub fn validate_coordinate(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

/// Tests that every point of a track lies in the legal WGS84 range.
pub fn validate_coordinates(points: &[Point]) -> bool {
    points
        .iter()
        .all(|p| validate_coordinate(p.latitude, p.longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let cases = [
            ((0.0, 0.0), (0.0, 0.0)),
            ((90.0, 180.0), (90.0, 180.0)),
            ((-90.0, -180.0), (-90.0, -180.0)),
            ((90.1, 0.0), (90.0, 0.0)),
            ((-90.1, 0.0), (-90.0, 0.0)),
            ((0.0, 180.1), (0.0, 180.0)),
            ((0.0, -180.1), (0.0, -180.0)),
            ((1000.0, -1000.0), (90.0, -180.0)),
        ];

        for ((lat, lng), (elat, elng)) in cases {
            assert_eq!(Point::new(lat, lng).clamp(), Point::new(elat, elng));
        }
    }

    #[test]
    fn test_try_new() {
        assert!(Point::try_new(90.0, 180.0).is_ok());
        assert!(Point::try_new(-90.0, -180.0).is_ok());
        assert!(Point::try_new(90.000001, 0.0).is_err());
        assert!(Point::try_new(0.0, -180.000001).is_err());
        assert!(Point::try_new(f64::NAN, 0.0).is_err());
        assert!(Point::try_new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        let track = vec![Point::new(51.0, -1.0), Point::new(51.1, -1.1)];
        assert!(validate_coordinates(&track));

        let track = vec![Point::new(51.0, -1.0), Point::new(91.0, -1.1)];
        assert!(!validate_coordinates(&track));

        assert!(validate_coordinates(&[]));
    }
}
