//! Provides the per-notation codec.
//!
//! Decoding turns the raw fields of a classified notation into a
//! canonical [`Point`]; encoding renders a point in a named grid
//! notation or through a caller-supplied format template. Both
//! directions absorb every failure at this boundary: decoding is total
//! and signals failure by absence, grid encoding falls back to a bare
//! numeric pair or an `Error` marker. Nothing here panics or raises.

use crate::crs::{self, Crs};
use crate::detect::{self, NotationKind, RawAngle, RawFields};
use crate::dms;
use crate::grid;
use crate::point::{Axis, Point};

/// Open Location Code length requested from the geocode collaborator,
/// its full precision.
const PLUS_CODE_LENGTH: usize = 10;

/// Parses free-form location text into a canonical [`Point`].
///
/// Classification and decoding in one step; [`None`] means no
/// confident parse, never an error.
///
/// # Example
///
/// ```
/// # use geofmt::parse_location_text;
/// let p = parse_location_text("N 51\u{00b0} 30' 45\" W 0\u{00b0} 7' 30\"").unwrap();
/// assert_eq!(p.latitude(), &51.5125);
/// assert_eq!(p.longitude(), &-0.125);
///
/// assert!(parse_location_text("no position here").is_none());
/// ```
pub fn parse_location_text(text: &str) -> Option<Point> {
    let (kind, fields) = detect::classify(text)?;
    decode(kind, &fields)
}

/// Decodes the raw fields of a classified notation into a [`Point`].
///
/// Grid notations resolve their letter prefix through the grid tables
/// and project to geographic degrees; the plus-code notation takes the
/// center of the decoded area; the DMS and decimal families recompose
/// through [`dms::from_dms`]. Any projection failure, geocode failure
/// or missing field yields [`None`].
pub fn decode(kind: NotationKind, fields: &RawFields) -> Option<Point> {
    match kind {
        NotationKind::PlusCode => {
            let code = fields.group(1)?;
            let coord = pluscodes::decode(code).ok()?;
            Some(Point::new(
                dms::round8(coord.latitude),
                dms::round8(coord.longitude),
            ))
        }
        NotationKind::Osgb36 => {
            let (x, y) = if let Some(letters) = fields.group(1) {
                grid::assemble_osgb(letters, fields.group(2)?, fields.group(3)?)?
            } else {
                (
                    fields.group(4)?.parse().ok()?,
                    fields.group(5)?.parse().ok()?,
                )
            };
            project_to_wgs84(Crs::Osgb36, x, y)
        }
        NotationKind::IrishGrid => {
            let (x, y) = if let Some(letter) = fields.group(1) {
                grid::assemble_irish(letter, fields.group(2)?, fields.group(3)?)?
            } else {
                (
                    fields.group(4)?.parse().ok()?,
                    fields.group(5)?.parse().ok()?,
                )
            };
            project_to_wgs84(Crs::IrishGrid, x, y)
        }
        NotationKind::IrishTm => {
            let x = fields.group(1)?.parse().ok()?;
            let y = fields.group(2)?.parse().ok()?;
            project_to_wgs84(Crs::IrishTm, x, y)
        }
        _ => {
            let latitude = angle_to_degrees(fields.latitude())?;
            let longitude = angle_to_degrees(fields.longitude())?;
            Some(Point::new(latitude, longitude))
        }
    }
}

fn angle_to_degrees(angle: RawAngle) -> Option<f64> {
    Some(dms::from_dms(
        angle.degree?,
        angle.minute,
        angle.second,
        angle.cardinal,
    ))
}

fn project_to_wgs84(src: Crs, x: f64, y: f64) -> Option<Point> {
    let (lng, lat) = crs::transform(src, Crs::Wgs84, x, y).ok()?;
    Some(Point::new(dms::round8(lat), dms::round8(lng)))
}

/// Renders a coordinate pair in the requested format.
///
/// `format` selects a named notation (`plus+code`, `osgb36`,
/// `IrishGrid`, `ITM`) or is taken as a per-axis template (see
/// [`format_coordinate`]); template output is joined by the position
/// `style` (`lat,lng` when empty, or `lat-lng`, `lng-lat`, `lng,lat`).
///
/// Both components are silently clamped to their legal ranges before
/// any encoding. A projection failure encodes as the `Error` marker, a
/// geocode failure as the empty string.
///
/// # Example
///
/// ```
/// # use geofmt::convert_to_format;
/// assert_eq!(convert_to_format(51.5, -0.25, "%i%d", ""), "51.5,-0.25");
/// assert_eq!(
///     convert_to_format(51.5, -0.25, "%d\u{00b0}%M\u{2032}%S\u{2033}%c", "lat-lng"),
///     "51\u{00b0}30\u{2032}00\u{2033}N 0\u{00b0}15\u{2032}00\u{2033}W",
/// );
/// ```
pub fn convert_to_format(lat: f64, lng: f64, format: &str, style: &str) -> String {
    let point = Point::new(lat, lng).clamp();
    let (lat, lng) = (point.latitude, point.longitude);

    match format {
        "plus+code" => encode_plus_code(lat, lng),
        "osgb36" => encode_grid(lat, lng, Crs::Osgb36),
        "IrishGrid" => encode_grid(lat, lng, Crs::IrishGrid),
        "ITM" => encode_grid(lat, lng, Crs::IrishTm),
        _ => {
            let style = if style.is_empty() { "lat,lng" } else { style };
            format_position(
                &format_coordinate(lat, format, Axis::Latitude),
                &format_coordinate(lng, format, Axis::Longitude),
                style,
            )
        }
    }
}

fn encode_plus_code(lat: f64, lng: f64) -> String {
    let coord = pluscodes::Coordinate {
        latitude: lat,
        longitude: lng,
    };
    pluscodes::encode(&coord, PLUS_CODE_LENGTH).unwrap_or_default()
}

fn encode_grid(lat: f64, lng: f64, dst: Crs) -> String {
    let (x, y) = match crs::transform(Crs::Wgs84, dst, lng, lat) {
        Ok(pair) => pair,
        Err(_) => return "Error".to_string(),
    };
    let n = y.round() as i64;
    let xs = format!("{:06}", x.round() as i64);
    let ys = format!("{:06}", n);

    // Northings from 1,000,000 m carry seven digits; their squares are
    // indexed N plus the second northing digit.
    let northing_head = if n >= 1_000_000 { &ys[2..] } else { &ys[1..] };

    let mut out = match dst {
        Crs::Osgb36 => {
            let index = if n >= 1_000_000 {
                format!("N{}{}", &xs[..1], &ys[1..2])
            } else {
                format!("{}{}", &xs[..1], &ys[..1])
            };
            match grid::osgb_square(&index) {
                Some(square) => format!("{} {} {} / OSGB36 ", square, &xs[1..], northing_head),
                None => String::new(),
            }
        }
        Crs::IrishGrid => {
            let index = format!("{}{}", &xs[..1], &ys[..1]);
            match grid::irish_square(&index) {
                Some(square) => format!("{} {} {} / IG ", square, &xs[1..], northing_head),
                None => "IG ".to_string(),
            }
        }
        _ => "ITM ".to_string(),
    };

    out.push_str(&xs);
    out.push_str(", ");
    out.push_str(&ys);
    out
}

/// Renders one coordinate component through a format template.
///
/// The template is a sequence of literal characters and two-character
/// tokens: `%d` degrees, `%D` zero-padded degrees, `%m`/`%M` minutes,
/// `%s`/`%S` seconds, `%c` the cardinal letter for `axis`, `%i` a
/// minus sign for negative values, `%p` an explicit sign, `%%` a
/// literal percent.
///
/// Which decomposition feeds the tokens depends on the template: any
/// second token selects full DMS, else any minute token selects DM,
/// else the degree token carries the full absolute decimal value
/// rather than a truncated whole degree. That keeps unit templates
/// like `%i%d` exact.
///
/// # Example
///
/// ```
/// # use geofmt::{codec::format_coordinate, point::Axis};
/// assert_eq!(format_coordinate(-0.1278, "%i%d", Axis::Longitude), "-0.1278");
/// assert_eq!(format_coordinate(-0.1278, "%d%c", Axis::Longitude), "0.1278W");
/// assert_eq!(
///     format_coordinate(51.5125, "%d %m %s", Axis::Latitude),
///     "51 30 45",
/// );
/// ```
pub fn format_coordinate(value: f64, template: &str, axis: Axis) -> String {
    let tokens = tokenize(template);
    let has = |t: &str| tokens.iter().any(|e| e == t);

    let (degree, minute, second) = if has("%s") || has("%S") {
        let d = dms::to_dms(value);
        (d.degree, Some(d.minute), Some(d.second))
    } else if has("%m") || has("%M") {
        let d = dms::to_dm(value);
        (d.degree, Some(d.minute), None)
    } else {
        (value.abs(), None, None)
    };

    let mut out = String::new();
    for token in &tokens {
        match token.as_str() {
            "%%" => out.push('%'),
            "%d" => out.push_str(&number(degree)),
            "%D" => out.push_str(&zero_padded(degree)),
            "%m" => out.push_str(&minute.map(number).unwrap_or_default()),
            "%M" => out.push_str(&minute.map(zero_padded).unwrap_or_default()),
            "%s" => out.push_str(&second.map(number).unwrap_or_default()),
            "%S" => out.push_str(&second.map(zero_padded).unwrap_or_default()),
            "%c" => out.push(cardinal(value, axis)),
            "%i" => {
                if value < 0.0 {
                    out.push('-');
                }
            }
            "%p" => out.push(if value < 0.0 { '-' } else { '+' }),
            literal => out.push_str(literal),
        }
    }
    out
}

/// Splits a template into literal characters and `%`-tokens.
fn tokenize(template: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.next() {
                Some(next) => tokens.push(format!("%{}", next)),
                // a trailing % is a literal
                None => tokens.push("%".to_string()),
            }
        } else {
            tokens.push(c.to_string());
        }
    }
    tokens
}

fn number(value: f64) -> String {
    format!("{}", value)
}

fn zero_padded(value: f64) -> String {
    if value < 10.0 {
        format!("0{}", value)
    } else {
        number(value)
    }
}

fn cardinal(value: f64, axis: Axis) -> char {
    match axis {
        Axis::Latitude => {
            if value < 0.0 {
                'S'
            } else {
                'N'
            }
        }
        Axis::Longitude => {
            if value < 0.0 {
                'W'
            } else {
                'E'
            }
        }
    }
}

/// Joins two formatted components in the requested display order.
///
/// Styles are `lat,lng`, `lng-lat`, `lng,lat` and `lat-lng`; an empty
/// style means `lat-lng` and anything else concatenates the two.
pub fn format_position(lat: &str, lng: &str, style: &str) -> String {
    match style {
        "lat,lng" => format!("{},{}", lat, lng),
        "lng-lat" => format!("{} {}", lng, lat),
        "lng,lat" => format!("{},{}", lng, lat),
        "" | "lat-lng" => format!("{} {}", lat, lng),
        _ => format!("{}{}", lat, lng),
    }
}
