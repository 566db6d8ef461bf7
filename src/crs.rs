//! Provides the coordinate reference systems the codec projects
//! between.
//!
//! The projection mathematics itself is delegated to the external
//! engine ([`proj4rs`]); this module owns only the choice of system,
//! its published datum parameters, and the degree/radian bookkeeping
//! the engine expects at geographic endpoints.

use proj4rs::proj::Proj;

use crate::{Error, Result};

/// A coordinate reference system the codec can project between.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Crs {
    /// WGS84 geographic degrees, [EPSG:4326](https://epsg.io/4326)
    Wgs84,
    /// OSGB 1936 / British National Grid, [EPSG:27700](https://epsg.io/27700)
    Osgb36,
    /// TM65 / Irish Grid, [EPSG:29902](https://epsg.io/29902)
    IrishGrid,
    /// IRENET95 / Irish Transverse Mercator, [EPSG:2157](https://epsg.io/2157)
    IrishTm,
}

impl Crs {
    /// Returns the EPSG code of `self`.
    pub const fn epsg(&self) -> u32 {
        match self {
            Crs::Wgs84 => 4326,
            Crs::Osgb36 => 27700,
            Crs::IrishGrid => 29902,
            Crs::IrishTm => 2157,
        }
    }

    /// Returns the proj definition string of `self`, with the
    /// published datum shift parameters.
    pub const fn proj_string(&self) -> &'static str {
        match self {
            Crs::Wgs84 => "+proj=longlat +datum=WGS84 +no_defs",
            Crs::Osgb36 => {
                "+proj=tmerc +lat_0=49 +lon_0=-2 +k=0.9996012717 +x_0=400000 +y_0=-100000 \
                 +ellps=airy +towgs84=446.448,-125.157,542.06,0.15,0.247,0.842,-20.489 \
                 +units=m +no_defs"
            }
            Crs::IrishGrid => {
                "+proj=tmerc +lat_0=53.5 +lon_0=-8 +k=1.000035 +x_0=200000 +y_0=250000 \
                 +ellps=mod_airy +towgs84=482.5,-130.6,564.6,-1.042,-0.214,-0.631,8.15 \
                 +units=m +no_defs"
            }
            Crs::IrishTm => {
                "+proj=tmerc +lat_0=53.5 +lon_0=-8 +k=0.99982 +x_0=600000 +y_0=750000 \
                 +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs"
            }
        }
    }

    const fn is_geographic(&self) -> bool {
        matches!(self, Crs::Wgs84)
    }
}

/// Transforms a coordinate pair from `src` to `dst`.
///
/// The pair is `(x, y)`, i.e. easting/northing in meters for the
/// projected systems and longitude/latitude in degrees for
/// [`Crs::Wgs84`]; the radian convention of the engine is handled
/// here.
///
/// # Errors
///
/// Returns [`Error`] when the engine rejects the definition strings or
/// the input coordinates.
///
/// # Example
///
/// ```
/// # use geofmt::crs::{transform, Crs};
/// # fn main() -> geofmt::Result<()> {
/// // Charing Cross, from British National Grid to WGS84
/// let (lng, lat) = transform(Crs::Osgb36, Crs::Wgs84, 530305.0, 180372.0)?;
/// assert!((lat - 51.5074).abs() < 0.01);
/// assert!((lng + 0.1278).abs() < 0.01);
/// # Ok(())}
/// ```
pub fn transform(src: Crs, dst: Crs, x: f64, y: f64) -> Result<(f64, f64)> {
    let from = Proj::from_proj_string(src.proj_string())
        .map_err(|_| Error::new_projection(src, dst))?;
    let to =
        Proj::from_proj_string(dst.proj_string()).map_err(|_| Error::new_projection(src, dst))?;

    let mut point = if src.is_geographic() {
        (x.to_radians(), y.to_radians(), 0.0)
    } else {
        (x, y, 0.0)
    };

    proj4rs::transform::transform(&from, &to, &mut point)
        .map_err(|_| Error::new_projection(src, dst))?;

    if dst.is_geographic() {
        Ok((point.0.to_degrees(), point.1.to_degrees()))
    } else {
        Ok((point.0, point.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osgb_round_trip() {
        let (x, y) = transform(Crs::Wgs84, Crs::Osgb36, -0.1276, 51.5074).unwrap();
        // central London falls in the TQ square
        assert!((528000.0..533000.0).contains(&x), "{}", x);
        assert!((178000.0..183000.0).contains(&y), "{}", y);

        let (lng, lat) = transform(Crs::Osgb36, Crs::Wgs84, x, y).unwrap();
        assert!((lng + 0.1276).abs() < 1e-6, "{}", lng);
        assert!((lat - 51.5074).abs() < 1e-6, "{}", lat);
    }

    #[test]
    fn test_irish_grid_round_trip() {
        let (x, y) = transform(Crs::Wgs84, Crs::IrishGrid, -6.2603, 53.3498).unwrap();
        // central Dublin falls in the O square
        assert!((300000.0..330000.0).contains(&x), "{}", x);
        assert!((220000.0..250000.0).contains(&y), "{}", y);

        let (lng, lat) = transform(Crs::IrishGrid, Crs::Wgs84, x, y).unwrap();
        assert!((lng + 6.2603).abs() < 1e-6, "{}", lng);
        assert!((lat - 53.3498).abs() < 1e-6, "{}", lat);
    }

    #[test]
    fn test_itm_round_trip() {
        let (x, y) = transform(Crs::Wgs84, Crs::IrishTm, -6.2603, 53.3498).unwrap();
        assert!((700000.0..730000.0).contains(&x), "{}", x);
        assert!((720000.0..750000.0).contains(&y), "{}", y);

        let (lng, lat) = transform(Crs::IrishTm, Crs::Wgs84, x, y).unwrap();
        assert!((lng + 6.2603).abs() < 1e-6, "{}", lng);
        assert!((lat - 53.3498).abs() < 1e-6, "{}", lat);
    }

    #[test]
    fn test_epsg_codes() {
        assert_eq!(Crs::Wgs84.epsg(), 4326);
        assert_eq!(Crs::Osgb36.epsg(), 27700);
        assert_eq!(Crs::IrishGrid.epsg(), 29902);
        assert_eq!(Crs::IrishTm.epsg(), 2157);
    }
}
