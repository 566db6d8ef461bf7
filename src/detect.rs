//! Provides format detection for free-form location text.
//!
//! Detection is an ordered cascade: each notation owns one pattern and
//! the patterns are tried strictly in priority order, first match wins.
//! The order is a behavioral contract. The most visually distinctive
//! notations come first (plus codes, then the letter-prefixed national
//! grids, then the `ITM`-prefixed metric grid, then map-service query
//! strings), followed by the DMS family from strictest punctuation to
//! loosest, and finally the decimal pairs from strictest labeling to
//! loosest. Reordering the cascade changes which notation wins on
//! ambiguous input, so the list below must never be re-sorted.

use once_cell::sync::Lazy;
use regex::Regex;

/// The notations the detector can classify, in priority order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum NotationKind {
    /// Open Location Code, optionally inside a URL
    PlusCode,
    /// British National Grid letter pair or bare metric pair
    Osgb36,
    /// Irish Grid letter or `ING`/`IG`/`TM65`-prefixed metric pair
    IrishGrid,
    /// `ITM`-prefixed Irish Transverse Mercator metric pair
    IrishTm,
    /// `q=lat,lng` map-service query string
    GoogleMapsQuery,
    /// DMS with leading cardinal letters, e.g. `N 51° 30' 45" W 0° 7' 30"`
    CardinalFirstDms,
    /// DMS with trailing cardinal letters, e.g. `51° 30' 45" N 0° 7' 30" W`
    CardinalLastDms,
    /// QLandkarte-style degrees and decimal minutes, e.g. `N51d30.000' W000d07.500'`
    QlandkartDm,
    /// proj4-style DMS with the longitude first, e.g. `0d07'30"W 51d30'45"N`
    Proj4Dms,
    /// Labeled decimal pair, e.g. `lat=51.5 lng=-0.125`
    LatLngLabeled,
    /// Separator-delimited decimal pair, e.g. `51.5, -0.125`
    LatLngBare,
    /// Any two signed numbers with non-digit filler between them
    LatLngLoose,
}

/// Capture-group indices of the angle components a pattern supplies.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FieldMap {
    pub(crate) lat_deg: Option<usize>,
    pub(crate) lat_min: Option<usize>,
    pub(crate) lat_sec: Option<usize>,
    pub(crate) lat_cardinal: Option<usize>,
    pub(crate) lng_deg: Option<usize>,
    pub(crate) lng_min: Option<usize>,
    pub(crate) lng_sec: Option<usize>,
    pub(crate) lng_cardinal: Option<usize>,
}

struct Pattern {
    kind: NotationKind,
    regex: Regex,
    fields: FieldMap,
}

// Punctuation accepted after a degree, minute or second figure. The
// classes cover the ASCII markers plus the Unicode ring, prime and
// quote lookalikes people paste from GPS software.
const DEG_MARK: &str = "[-\\s_\u{00b0}\u{00ba}Dd\u{02da}\u{030a}\u{0325}\u{2070}\u{2218}\u{309a}\u{309c}]";
const MIN_MARK: &str = "[-\\s'_\u{05f3}\u{02b9}\u{02bc}\u{02c8}\u{0301}\u{2018}\u{2019}\u{201a}\u{201b}\u{2032}\u{2035}\u{a78c}]";
const SEC_MARK: &str = "[-\\s\"_\u{02ba}\u{030b}\u{030e}\u{05f4}\u{201c}\u{201d}\u{201e}\u{201f}\u{2033}\u{2036}\u{3003}]";
const Q_DEG_MARK: &str = "[d_\u{00b0}\u{00ba}\u{02da}\u{030a}\u{0325}\u{309c}\u{309a}\u{2070}\u{2218}]";
const Q_MIN_MARK: &str = "[-\\s'_\u{2032}\u{2035}\u{02b9}]";

/// One DMS angle: degrees with optional minutes and seconds, each
/// followed by its optional punctuation mark.
fn dms_angle() -> String {
    format!(
        "([.\\d]+)\\s?(?:{DEG_MARK}\\s?(?:([.\\d]+)\\s?{MIN_MARK}?\\s?(?:([.\\d]+)\\s?{SEC_MARK}?\\s?)?)?)?"
    )
}

fn map(
    lat: (Option<usize>, Option<usize>, Option<usize>, Option<usize>),
    lng: (Option<usize>, Option<usize>, Option<usize>, Option<usize>),
) -> FieldMap {
    FieldMap {
        lat_deg: lat.0,
        lat_min: lat.1,
        lat_sec: lat.2,
        lat_cardinal: lat.3,
        lng_deg: lng.0,
        lng_min: lng.1,
        lng_sec: lng.2,
        lng_cardinal: lng.3,
    }
}

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    let angle = dms_angle();

    vec![
        Pattern {
            kind: NotationKind::PlusCode,
            regex: Regex::new(
                r"^(?:https?://.*/)?([23456789CFGHJMPQRVWXcfghjmpqrvwx]{8}\+[23456789CFGHJMPQRVWXcfghjmpqrvwx]{2,3})$",
            )
            .unwrap(),
            fields: FieldMap::default(),
        },
        Pattern {
            kind: NotationKind::Osgb36,
            regex: Regex::new(
                r"^(?:BNG|OSGB|OSGB36)?\s*(?:(HP|HT|HU|HW|HX|HY|HZ|NA|NB|NC|ND|NF|NG|NH|NJ|NK|NL|NM|NN|NO|NR|NS|NT|NU|NW|NX|NY|NZ|SC|SD|SE|TA|SH|SJ|SK|TF|TG|SM|SN|SO|SP|TL|TM|SR|SS|ST|SU|TQ|TR|SV|SW|SX|SY|SZ|TV)\s*(\d{3,5})\s*(\d{3,5})|(\d{6})[,\s]+(\d{6,7}))$",
            )
            .unwrap(),
            fields: FieldMap::default(),
        },
        Pattern {
            kind: NotationKind::IrishGrid,
            regex: Regex::new(
                r"^(?:ING|IG|TM65)?\s*(?:([A-HJ-Z])\s*(\d{3,5})\s*(\d{3,5})|(?:ING|IG|TM65)\s*(\d{6})[,\s]+(\d{6}))$",
            )
            .unwrap(),
            fields: FieldMap::default(),
        },
        Pattern {
            kind: NotationKind::IrishTm,
            regex: Regex::new(
                r"^ITM\s*(?:E\s)?(\d{6}(?:\.\d{0,3})?)m?[,\s]+(?:N\s)?(\d{6}(?:\.\d{0,3})?)m?$",
            )
            .unwrap(),
            fields: FieldMap::default(),
        },
        Pattern {
            kind: NotationKind::GoogleMapsQuery,
            regex: Regex::new(r"q=(?:loc:)?(-?[.\d]+),(-?[.\d]+)").unwrap(),
            fields: map(
                (Some(1), None, None, None),
                (Some(2), None, None, None),
            ),
        },
        Pattern {
            kind: NotationKind::CardinalFirstDms,
            regex: Regex::new(&format!(
                "([NSns])\\s?{angle}[-_\\s,]*([WEwe])\\s?{angle}"
            ))
            .unwrap(),
            fields: map(
                (Some(2), Some(3), Some(4), Some(1)),
                (Some(6), Some(7), Some(8), Some(5)),
            ),
        },
        Pattern {
            kind: NotationKind::CardinalLastDms,
            regex: Regex::new(&format!("{angle}([NSns])[-_\\s,]*{angle}([WEwe])")).unwrap(),
            fields: map(
                (Some(1), Some(2), Some(3), Some(4)),
                (Some(5), Some(6), Some(7), Some(8)),
            ),
        },
        Pattern {
            kind: NotationKind::QlandkartDm,
            regex: Regex::new(&format!(
                "([NSns])([.\\d]+){Q_DEG_MARK}\\s?([.\\d]+){Q_MIN_MARK}+([WEwe])([.\\d]+){Q_DEG_MARK}\\s?([.\\d]+){Q_MIN_MARK}*"
            ))
            .unwrap(),
            fields: map(
                (Some(2), Some(3), None, Some(1)),
                (Some(5), Some(6), None, Some(4)),
            ),
        },
        Pattern {
            kind: NotationKind::Proj4Dms,
            regex: Regex::new(
                r#"(\d+)d(\d+)'([.\d]+)"([WE])\s+(\d+)d(\d+)'([.\d]+)"([NS])"#,
            )
            .unwrap(),
            fields: map(
                (Some(5), Some(6), Some(7), Some(8)),
                (Some(1), Some(2), Some(3), Some(4)),
            ),
        },
        Pattern {
            kind: NotationKind::LatLngLabeled,
            regex: Regex::new(
                r"m?[Ll](?:at)?[\s=](-?\d+\.?\d*)[&\s,]+m?[Ll](?:on|ng|g)[\s=](-?\d+\.?\d*)",
            )
            .unwrap(),
            fields: map(
                (Some(1), None, None, None),
                (Some(2), None, None, None),
            ),
        },
        Pattern {
            kind: NotationKind::LatLngBare,
            regex: Regex::new(r"(-?\d+\.?\d*)\s?[,\s]+(-?\d+\.?\d*)").unwrap(),
            fields: map(
                (Some(1), None, None, None),
                (Some(2), None, None, None),
            ),
        },
        Pattern {
            kind: NotationKind::LatLngLoose,
            regex: Regex::new(r"(-?\d+\.?\d*)\D+?(-?\d+\.?\d*)").unwrap(),
            fields: map(
                (Some(1), None, None, None),
                (Some(2), None, None, None),
            ),
        },
    ]
});

/// One angle's raw capture fields, still unconverted.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct RawAngle {
    pub(crate) degree: Option<f64>,
    pub(crate) minute: Option<f64>,
    pub(crate) second: Option<f64>,
    pub(crate) cardinal: Option<char>,
}

/// The capture groups of the winning pattern.
///
/// Fields the notation's grammar does not supply are absent, not zero.
#[derive(Debug, Clone)]
pub struct RawFields {
    groups: Vec<Option<String>>,
    fields: FieldMap,
}

impl RawFields {
    /// Returns capture group `i` of the winning pattern.
    pub(crate) fn group(&self, i: usize) -> Option<&str> {
        self.groups.get(i)?.as_deref()
    }

    fn number(&self, index: Option<usize>) -> Option<f64> {
        self.group(index?)?.parse().ok()
    }

    fn cardinal(&self, index: Option<usize>) -> Option<char> {
        self.group(index?)?.chars().next()
    }

    pub(crate) fn latitude(&self) -> RawAngle {
        RawAngle {
            degree: self.number(self.fields.lat_deg),
            minute: self.number(self.fields.lat_min),
            second: self.number(self.fields.lat_sec),
            cardinal: self.cardinal(self.fields.lat_cardinal),
        }
    }

    pub(crate) fn longitude(&self) -> RawAngle {
        RawAngle {
            degree: self.number(self.fields.lng_deg),
            minute: self.number(self.fields.lng_min),
            second: self.number(self.fields.lng_sec),
            cardinal: self.cardinal(self.fields.lng_cardinal),
        }
    }
}

/// Classifies location text into the first notation whose pattern
/// matches, together with the raw capture fields.
///
/// This never attempts a "best" match; priority order decides every
/// ambiguity.
///
/// # Example
///
/// ```
/// # use geofmt::{classify, NotationKind};
/// let (kind, _) = classify("TQ 30305 80372").unwrap();
/// assert_eq!(kind, NotationKind::Osgb36);
///
/// // the query pattern outranks the bare decimal pair it contains
/// let (kind, _) = classify("q=51.5,-0.125").unwrap();
/// assert_eq!(kind, NotationKind::GoogleMapsQuery);
///
/// assert!(classify("no position here").is_none());
/// ```
pub fn classify(text: &str) -> Option<(NotationKind, RawFields)> {
    for pattern in PATTERNS.iter() {
        if let Some(caps) = pattern.regex.captures(text) {
            let groups = (0..caps.len())
                .map(|i| caps.get(i).map(|m| m.as_str().to_owned()))
                .collect();
            return Some((
                pattern.kind,
                RawFields {
                    groups,
                    fields: pattern.fields,
                },
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(text: &str) -> Option<NotationKind> {
        classify(text).map(|(kind, _)| kind)
    }

    #[test]
    fn test_classify_kinds() {
        let cases = [
            ("9C3XGV4C+XV", NotationKind::PlusCode),
            ("https://plus.codes/9C3XGV4C+XV", NotationKind::PlusCode),
            ("TQ 30305 80372", NotationKind::Osgb36),
            ("OSGB36 TQ3030580372", NotationKind::Osgb36),
            ("530305, 180372", NotationKind::Osgb36),
            ("O 15904 34671", NotationKind::IrishGrid),
            ("IG 315904, 234671", NotationKind::IrishGrid),
            ("ITM 715830, 734697", NotationKind::IrishTm),
            ("ITM E 715830m N 734697m", NotationKind::IrishTm),
            ("q=51.5,-0.125", NotationKind::GoogleMapsQuery),
            (
                "https://maps.google.com/maps?q=loc:51.5,-0.125",
                NotationKind::GoogleMapsQuery,
            ),
            (
                "N 51\u{00b0} 30' 45\" W 0\u{00b0} 7' 30\"",
                NotationKind::CardinalFirstDms,
            ),
            (
                "51\u{00b0} 30' 45\" N, 0\u{00b0} 7' 30\" W",
                NotationKind::CardinalLastDms,
            ),
            ("0d07'30.0\"W 51d30'45.0\"N", NotationKind::Proj4Dms),
            ("lat=51.5 lng=-0.125", NotationKind::LatLngLabeled),
            ("51.5, -0.125", NotationKind::LatLngBare),
            ("51.5 at -0.125", NotationKind::LatLngLoose),
        ];

        for (text, expected) in cases {
            assert_eq!(kind(text), Some(expected), "{}", text);
        }
    }

    #[test]
    fn test_classify_none() {
        for text in ["", "no position here", "route"] {
            assert_eq!(kind(text), None, "{}", text);
        }
    }

    #[test]
    fn test_priority_is_fixed() {
        // A labeled pair contains a bare pair; the stricter labeled
        // pattern is earlier and must win.
        assert_eq!(kind("lat 51.5, lng -0.125"), Some(NotationKind::LatLngLabeled));

        // A query string contains a bare pair; the query pattern wins.
        assert_eq!(kind("q=51.5,-0.125"), Some(NotationKind::GoogleMapsQuery));

        // A six-digit pair is a grid reference before it is a decimal
        // pair.
        assert_eq!(kind("530305, 180372"), Some(NotationKind::Osgb36));

        // A space-separated pair satisfies both decimal patterns; the
        // stricter separator pattern is earlier and must win.
        assert_eq!(kind("51.5 -0.125"), Some(NotationKind::LatLngBare));
    }

    #[test]
    fn test_raw_fields() {
        let (_, fields) = classify("N 51\u{00b0} 30' 45\" W 0\u{00b0} 7' 30\"").unwrap();
        let lat = fields.latitude();
        let lng = fields.longitude();
        assert_eq!(lat.degree, Some(51.0));
        assert_eq!(lat.minute, Some(30.0));
        assert_eq!(lat.second, Some(45.0));
        assert_eq!(lat.cardinal, Some('N'));
        assert_eq!(lng.degree, Some(0.0));
        assert_eq!(lng.minute, Some(7.0));
        assert_eq!(lng.second, Some(30.0));
        assert_eq!(lng.cardinal, Some('W'));

        // absent components stay absent
        let (_, fields) = classify("51.5, -0.125").unwrap();
        let lat = fields.latitude();
        assert_eq!(lat.degree, Some(51.5));
        assert_eq!(lat.minute, None);
        assert_eq!(lat.second, None);
        assert_eq!(lat.cardinal, None);
    }
}
