//! Provides degree/minute/second decomposition and recomposition.
//!
//! The decompositions carry the absolute magnitude only; the sign of a
//! coordinate travels either in the original degree value or in a
//! cardinal letter, never in both. Rounding is fixed-precision (six
//! decimal places of a minute, three of a second, 1e-8 of a degree) so
//! that a decimal-DMS-decimal round trip reproduces the input to within
//! 1e-8 degrees for realistic coordinate magnitudes.

/// Degree and decimal-minute decomposition of an angle's magnitude.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Dm {
    /// Whole degrees, non-negative
    pub degree: f64,
    /// Decimal minutes, rounded to six decimal places
    pub minute: f64,
}

/// Degree, minute and decimal-second decomposition of an angle's magnitude.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Dms {
    /// Whole degrees, non-negative
    pub degree: f64,
    /// Whole minutes
    pub minute: f64,
    /// Decimal seconds, rounded to three decimal places
    pub second: f64,
}

/// Returns the degree/decimal-minute decomposition of `t`'s magnitude.
///
/// # Example
///
/// ```
/// # use geofmt::dms::to_dm;
/// let dm = to_dm(51.273458);
/// assert_eq!(dm.degree, 51.0);
/// assert_eq!(dm.minute, 16.40748);
///
/// // The sign is dropped
/// assert_eq!(to_dm(-51.273458), dm);
/// ```
pub fn to_dm(t: f64) -> Dm {
    let t = t.abs();
    let degree = t.floor();
    let minute = ((t - degree) * 60_000_000.0).round() / 1_000_000.0;
    Dm { degree, minute }
}

/// Returns the degree/minute/decimal-second decomposition of `t`'s
/// magnitude, derived from [`to_dm`].
///
/// # Example
///
/// ```
/// # use geofmt::dms::to_dms;
/// let dms = to_dms(51.273458);
/// assert_eq!(dms.degree, 51.0);
/// assert_eq!(dms.minute, 16.0);
/// assert_eq!(dms.second, 24.449);
/// ```
pub fn to_dms(t: f64) -> Dms {
    let dm = to_dm(t);
    let minute = dm.minute.floor();
    let second = ((dm.minute - minute) * 60_000.0).round() / 1_000.0;
    Dms {
        degree: dm.degree,
        minute,
        second,
    }
}

/// Recomposes decimal degrees from degree/minute/second components and
/// an optional cardinal letter.
///
/// Missing minutes and seconds count as zero. The result is negated
/// when the cardinal is `S` or `W` (either case) or when the raw degree
/// value itself was negative, and rounded to 1e-8 degrees.
///
/// # Example
///
/// ```
/// # use geofmt::dms::from_dms;
/// let v = from_dms(51.0, Some(16.0), Some(24.449), None);
/// assert!((v - 51.273458).abs() < 1e-6);
///
/// assert_eq!(from_dms(51.5, None, None, Some('S')), -51.5);
/// assert_eq!(from_dms(-0.1278, None, None, None), -0.1278);
/// ```
pub fn from_dms(degree: f64, minute: Option<f64>, second: Option<f64>, cardinal: Option<char>) -> f64 {
    let magnitude =
        degree.abs() + minute.unwrap_or(0.0) / 60.0 + second.unwrap_or(0.0) / 3600.0;
    let value = round8(magnitude);

    let negative = degree < 0.0 || matches!(cardinal, Some('S' | 's' | 'W' | 'w'));
    if negative {
        -value
    } else {
        value
    }
}

/// Rounds to 1e-8 degrees, the canonical coordinate resolution.
pub(crate) fn round8(t: f64) -> f64 {
    (t * 100_000_000.0).round() / 100_000_000.0
}
