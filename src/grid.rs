//! Provides the national-grid letter tables.
//!
//! Both the Ordnance Survey (OSGB36) and Irish Grid notations name a
//! 100 km square with letters and locate a point inside it with an
//! easting/northing digit pair. The tables here map square letters to
//! the leading digits of the full metric coordinates and back; the two
//! directions are exact inverses of each other.
//!
//! OSGB36 squares north of the 1000 km line (Shetland) carry a three
//! character `N`-prefixed index; their northing gains an extra
//! 1 000 000 m.

/// OSGB36 100 km square letters and their easting/northing index.
static OSGB_SQUARES: [(&str, &str); 55] = [
    ("HP", "N42"),
    ("HT", "N31"),
    ("HU", "N41"),
    ("HW", "N10"),
    ("HX", "N20"),
    ("HY", "N30"),
    ("HZ", "N40"),
    ("NA", "09"),
    ("NB", "19"),
    ("NC", "29"),
    ("ND", "39"),
    ("NF", "08"),
    ("NG", "18"),
    ("NH", "28"),
    ("NJ", "38"),
    ("NK", "48"),
    ("NL", "07"),
    ("NM", "17"),
    ("NN", "27"),
    ("NO", "37"),
    ("NR", "16"),
    ("NS", "26"),
    ("NT", "36"),
    ("NU", "46"),
    ("NW", "15"),
    ("NX", "25"),
    ("NY", "35"),
    ("NZ", "45"),
    ("SC", "24"),
    ("SD", "34"),
    ("SE", "44"),
    ("TA", "54"),
    ("SH", "23"),
    ("SJ", "33"),
    ("SK", "43"),
    ("TF", "53"),
    ("TG", "63"),
    ("SM", "12"),
    ("SN", "22"),
    ("SO", "32"),
    ("SP", "42"),
    ("TL", "52"),
    ("TM", "62"),
    ("SR", "11"),
    ("SS", "21"),
    ("ST", "31"),
    ("SU", "41"),
    ("TQ", "51"),
    ("TR", "61"),
    ("SV", "00"),
    ("SW", "10"),
    ("SX", "20"),
    ("SY", "30"),
    ("SZ", "40"),
    ("TV", "50"),
];

/// Irish Grid 100 km square letters and their easting/northing index.
static IRISH_SQUARES: [(&str, &str); 25] = [
    ("A", "04"),
    ("B", "14"),
    ("C", "24"),
    ("D", "34"),
    ("E", "44"),
    ("F", "03"),
    ("G", "13"),
    ("H", "23"),
    ("J", "33"),
    ("K", "43"),
    ("L", "02"),
    ("M", "12"),
    ("N", "22"),
    ("O", "32"),
    ("P", "42"),
    ("Q", "01"),
    ("R", "11"),
    ("S", "21"),
    ("T", "31"),
    ("U", "41"),
    ("V", "00"),
    ("W", "10"),
    ("X", "20"),
    ("Y", "30"),
    ("Z", "40"),
];

/// Returns the digit index of an OSGB36 square, e.g. `TQ` to `51`.
pub fn osgb_index(letters: &str) -> Option<&'static str> {
    OSGB_SQUARES
        .iter()
        .find(|(sq, _)| *sq == letters)
        .map(|(_, i)| *i)
}

/// Returns the OSGB36 square for a digit index, e.g. `51` to `TQ`.
pub fn osgb_square(index: &str) -> Option<&'static str> {
    OSGB_SQUARES
        .iter()
        .find(|(_, i)| *i == index)
        .map(|(sq, _)| *sq)
}

/// Returns the digit index of an Irish Grid square, e.g. `O` to `32`.
pub fn irish_index(letter: &str) -> Option<&'static str> {
    IRISH_SQUARES
        .iter()
        .find(|(sq, _)| *sq == letter)
        .map(|(_, i)| *i)
}

/// Returns the Irish Grid square for a digit index, e.g. `32` to `O`.
pub fn irish_square(index: &str) -> Option<&'static str> {
    IRISH_SQUARES
        .iter()
        .find(|(_, i)| *i == index)
        .map(|(sq, _)| *sq)
}

/// A 3 to 5 digit reference fragment right-padded to full 100 km
/// square resolution, e.g. `304` to 30400.
fn pad_fragment(digits: &str) -> Option<f64> {
    format!("{:0<5}", digits).parse().ok()
}

fn digit(c: u8) -> f64 {
    f64::from(c - b'0')
}

/// Assembles full OSGB36 metric coordinates from square letters and
/// easting/northing fragments.
///
/// Returns [`None`] for unknown letters or malformed fragments.
///
/// # Example
///
/// ```
/// # use geofmt::grid::assemble_osgb;
/// assert_eq!(assemble_osgb("TQ", "30305", "80372"), Some((530305.0, 180372.0)));
/// // Shetland, north of the 1000 km line
/// assert_eq!(assemble_osgb("HP", "60900", "13600"), Some((460900.0, 1213600.0)));
/// assert_eq!(assemble_osgb("XX", "123", "456"), None);
/// ```
pub fn assemble_osgb(letters: &str, easting: &str, northing: &str) -> Option<(f64, f64)> {
    let index = osgb_index(letters)?;
    let e = pad_fragment(easting)?;
    let n = pad_fragment(northing)?;

    let idx = index.as_bytes();
    if idx.len() == 3 {
        let x = e + digit(idx[1]) * 100_000.0;
        let y = n + digit(idx[2]) * 100_000.0 + 1_000_000.0;
        Some((x, y))
    } else {
        let x = e + digit(idx[0]) * 100_000.0;
        let y = n + digit(idx[1]) * 100_000.0;
        Some((x, y))
    }
}

/// Assembles full Irish Grid metric coordinates from a square letter
/// and easting/northing fragments.
///
/// # Example
///
/// ```
/// # use geofmt::grid::assemble_irish;
/// assert_eq!(assemble_irish("O", "15904", "34671"), Some((315904.0, 234671.0)));
/// assert_eq!(assemble_irish("I", "15904", "34671"), None);
/// ```
pub fn assemble_irish(letter: &str, easting: &str, northing: &str) -> Option<(f64, f64)> {
    let index = irish_index(letter)?;
    let e = pad_fragment(easting)?;
    let n = pad_fragment(northing)?;

    let idx = index.as_bytes();
    let x = e + digit(idx[0]) * 100_000.0;
    let y = n + digit(idx[1]) * 100_000.0;
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_inverses() {
        for (letters, index) in OSGB_SQUARES {
            assert_eq!(osgb_index(letters), Some(index));
            assert_eq!(osgb_square(index), Some(letters));
        }
        for (letter, index) in IRISH_SQUARES {
            assert_eq!(irish_index(letter), Some(index));
            assert_eq!(irish_square(index), Some(letter));
        }
    }

    #[test]
    fn test_indices_unique() {
        for (n, (_, index)) in OSGB_SQUARES.iter().enumerate() {
            assert!(
                OSGB_SQUARES.iter().skip(n + 1).all(|(_, i)| i != index),
                "{}",
                index
            );
        }
        for (n, (_, index)) in IRISH_SQUARES.iter().enumerate() {
            assert!(
                IRISH_SQUARES.iter().skip(n + 1).all(|(_, i)| i != index),
                "{}",
                index
            );
        }
    }

    #[test]
    fn test_fragment_padding() {
        // 3-5 digit fragments address the square at falling resolution
        assert_eq!(assemble_osgb("TQ", "303", "803"), Some((530300.0, 180300.0)));
        assert_eq!(
            assemble_osgb("TQ", "3030", "8037"),
            Some((530300.0, 180370.0))
        );
        assert_eq!(
            assemble_osgb("TQ", "30305", "80372"),
            Some((530305.0, 180372.0))
        );
    }

    #[test]
    fn test_unknown_square() {
        assert_eq!(assemble_osgb("AA", "123", "456"), None);
        assert_eq!(assemble_irish("I", "123", "456"), None);
        assert_eq!(osgb_square("99"), None);
        assert_eq!(irish_square("99"), None);
    }
}
