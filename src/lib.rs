//! Parse, convert and format geographic coordinates in the notations
//! people actually paste.
//!
//! This crate turns free-form location text into canonical WGS 84
//! degrees and back. It recognizes twelve notations, tried in a fixed
//! order from the most distinctive to the most permissive: Open
//! Location Codes, the British and Irish lettered grid references,
//! Irish Transverse Mercator pairs, map-service query strings, the
//! degree-minute-second family and plain decimal pairs. On the way
//! out, a small template language renders any DMS style and the grid
//! notations are produced through real datum transformations.
//!
//! It also ships a geodesic Ramer-Douglas-Peucker simplifier whose
//! tolerance is a distance over the sphere in kilometers, so a single
//! figure means the same thing in Lapland as on the equator.
//!
//! # Examples
//!
//! Parsing free-form text:
//!
//! ```
//! use geofmt::parse_location_text;
//!
//! let point = parse_location_text("N 51\u{00b0} 30' 45\" W 0\u{00b0} 7' 30\"").unwrap();
//! assert_eq!(point.latitude(), &51.5125);
//! assert_eq!(point.longitude(), &-0.125);
//!
//! // a lettered British grid reference resolves through EPSG:27700
//! let point = parse_location_text("TQ 30305 80372").unwrap();
//! assert!((point.latitude() - 51.5074).abs() < 0.01);
//! ```
//!
//! Formatting:
//!
//! ```
//! use geofmt::convert_to_format;
//!
//! assert_eq!(
//!     convert_to_format(51.5, -0.25, "%d\u{00b0}%M\u{2032}%S\u{2033}%c", "lat-lng"),
//!     "51\u{00b0}30\u{2032}00\u{2033}N 0\u{00b0}15\u{2032}00\u{2033}W",
//! );
//! ```
//!
//! Simplifying a track:
//!
//! ```
//! use geofmt::simplify;
//!
//! let track = [[0.0, 0.0], [0.5, 0.0001], [1.0, 0.0]];
//! assert_eq!(simplify(&track, 0.05), vec![[0.0, 0.0], [1.0, 0.0]]);
//! ```
//!
//! # Features
//!
//! - `serde`: enables serialization and deserialization of [`Point`]
//!   by the [`serde` crate](https://crates.io/crates/serde).
//!
//! ```
//! # #[cfg(feature = "serde")] {
//! use geofmt::Point;
//!
//! let json = serde_json::to_string(&Point::new(51.5074, -0.1278)).unwrap();
//! assert_eq!(json, r#"{"latitude":51.5074,"longitude":-0.1278}"#);
//!
//! let point: Point = serde_json::from_str(&json).unwrap();
//! assert_eq!(point, Point::new(51.5074, -0.1278));
//! # }
//! ```

pub mod codec;
pub mod crs;
pub mod detect;
pub mod dms;
pub mod error;
pub mod geodesic;
pub mod grid;
pub mod point;
pub mod simplify;

#[doc(inline)]
pub use crate::codec::{convert_to_format, parse_location_text};
#[doc(inline)]
pub use crate::detect::{classify, NotationKind};
#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::geodesic::{distance, perpendicular_distance};
#[doc(inline)]
pub use crate::point::{Axis, Point};
#[doc(inline)]
pub use crate::simplify::simplify;
