//! # Orbital element tables
//!
//! Lookup of [`SecularElements`] records by [`Body`].
//!
//! Two data sets are built in, both taken from the JPL "Approximate Positions of the
//! Planets" note and selected with [`ElementSet`]:
//!
//! | Set | Validity | Periodic terms |
//! |-----|----------|----------------|
//! | [`ElementSet::ShortRange`] | 1800 AD – 2050 AD | none |
//! | [`ElementSet::LongRange`] | 3000 BC – 3000 AD | `b, c, s, f` for Jupiter – Pluto |
//!
//! Any other set of elements can be loaded from a CSV file into an [`ElementTable`].
//! All of them implement the [`ElementSource`] trait, which is what the rest of the
//! crate consumes.
//!
//! The validity window is informational: elements can be evaluated outside of it,
//! with a precision that degrades quickly.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::{orbit_type::secular_element::SecularElements, planetpos_errors::PlanetPosError};

pub mod long_range;
pub mod short_range;

/// Solar-system bodies covered by the JPL approximate elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Mercury,
    Venus,
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// Every body, ordered by increasing semi-major axis.
    pub const ALL: [Body; 9] = [
        Body::Mercury,
        Body::Venus,
        Body::EarthMoonBarycenter,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::EarthMoonBarycenter => "EM Bary",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = PlanetPosError;

    /// Parse a body name, ignoring case, spaces, dashes and underscores.
    ///
    /// The Earth–Moon barycenter is accepted as `"EM Bary"`, `"emb"`, `"earth"`,
    /// `"earth-moon barycenter"` or `"EarthMoonBarycenter"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "mercury" => Ok(Body::Mercury),
            "venus" => Ok(Body::Venus),
            "earth" | "emb" | "embary" | "earthmoonbarycenter" | "earthmoonbary" => {
                Ok(Body::EarthMoonBarycenter)
            }
            "mars" => Ok(Body::Mars),
            "jupiter" => Ok(Body::Jupiter),
            "saturn" => Ok(Body::Saturn),
            "uranus" => Ok(Body::Uranus),
            "neptune" => Ok(Body::Neptune),
            "pluto" => Ok(Body::Pluto),
            _ => Err(PlanetPosError::UnknownBody(s.to_string())),
        }
    }
}

/// Time span, in calendar years, over which a set of elements is meant to be used.
///
/// Years follow the astronomical numbering: 3000 BC is `-2999`, rounded here to
/// `-3000` as in the JPL note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityWindow {
    pub start_year: i32,
    pub end_year: i32,
}

impl ValidityWindow {
    pub const fn new(start_year: i32, end_year: i32) -> Self {
        ValidityWindow {
            start_year,
            end_year,
        }
    }

    /// `true` if `year` lies within the window, bounds included.
    pub fn contains_year(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }
}

impl fmt::Display for ValidityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt_year = |y: i32| {
            if y < 0 {
                format!("{} BC", -y)
            } else {
                format!("{y} AD")
            }
        };
        write!(f, "{} – {}", fmt_year(self.start_year), fmt_year(self.end_year))
    }
}

/// Anything able to provide orbital elements for a body.
pub trait ElementSource {
    /// Human readable name of the data set, used in error messages.
    fn name(&self) -> &str;

    /// Elements of `body`, or `None` if the source does not cover it.
    fn elements(&self, body: Body) -> Option<SecularElements>;

    /// Recommended time span of the elements, if known.
    fn validity(&self) -> Option<ValidityWindow> {
        None
    }

    /// Same as [`ElementSource::elements`], with a missing body turned into
    /// [`PlanetPosError::BodyNotInElementSet`].
    fn require(&self, body: Body) -> Result<SecularElements, PlanetPosError> {
        self.elements(body)
            .ok_or_else(|| PlanetPosError::BodyNotInElementSet {
                body: body.to_string(),
                source_name: self.name().to_string(),
            })
    }
}

/// The two element sets published by JPL.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementSet {
    /// Table 1, 1800 AD – 2050 AD
    #[default]
    ShortRange,
    /// Tables 2a and 2b, 3000 BC – 3000 AD
    LongRange,
}

impl ElementSet {
    pub const ALL: [ElementSet; 2] = [ElementSet::ShortRange, ElementSet::LongRange];
}

impl ElementSource for ElementSet {
    fn name(&self) -> &str {
        match self {
            ElementSet::ShortRange => "JPL approximate elements 1800 AD - 2050 AD",
            ElementSet::LongRange => "JPL approximate elements 3000 BC - 3000 AD",
        }
    }

    fn elements(&self, body: Body) -> Option<SecularElements> {
        let elements = match self {
            ElementSet::ShortRange => match body {
                Body::Mercury => short_range::MERCURY,
                Body::Venus => short_range::VENUS,
                Body::EarthMoonBarycenter => short_range::EARTH_MOON_BARYCENTER,
                Body::Mars => short_range::MARS,
                Body::Jupiter => short_range::JUPITER,
                Body::Saturn => short_range::SATURN,
                Body::Uranus => short_range::URANUS,
                Body::Neptune => short_range::NEPTUNE,
                Body::Pluto => short_range::PLUTO,
            },
            ElementSet::LongRange => match body {
                Body::Mercury => long_range::MERCURY,
                Body::Venus => long_range::VENUS,
                Body::EarthMoonBarycenter => long_range::EARTH_MOON_BARYCENTER,
                Body::Mars => long_range::MARS,
                Body::Jupiter => long_range::JUPITER,
                Body::Saturn => long_range::SATURN,
                Body::Uranus => long_range::URANUS,
                Body::Neptune => long_range::NEPTUNE,
                Body::Pluto => long_range::PLUTO,
            },
        };
        Some(elements)
    }

    fn validity(&self) -> Option<ValidityWindow> {
        match self {
            ElementSet::ShortRange => Some(ValidityWindow::new(1800, 2050)),
            ElementSet::LongRange => Some(ValidityWindow::new(-3000, 3000)),
        }
    }
}

impl fmt::Display for ElementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementSet {
    type Err = PlanetPosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "short" | "shortrange" | "sr" | "18002050" | "1800ad2050ad" | "table1" => {
                Ok(ElementSet::ShortRange)
            }
            "long" | "longrange" | "lr" | "3000bc3000ad" | "table2" => Ok(ElementSet::LongRange),
            _ => Err(PlanetPosError::UnknownElementSet(s.to_string())),
        }
    }
}

/// One row of a CSV element table.
#[derive(Debug, Deserialize)]
struct ElementRecord {
    body: String,
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    mean_longitude: f64,
    longitude_of_periapsis: f64,
    ascending_node_longitude: f64,
    semi_major_axis_rate: f64,
    eccentricity_rate: f64,
    inclination_rate: f64,
    mean_longitude_rate: f64,
    longitude_of_periapsis_rate: f64,
    ascending_node_longitude_rate: f64,
    #[serde(default)]
    b: f64,
    #[serde(default)]
    c: f64,
    #[serde(default)]
    s: f64,
    #[serde(default)]
    f: f64,
}

impl From<ElementRecord> for SecularElements {
    fn from(r: ElementRecord) -> Self {
        SecularElements::new(
            r.semi_major_axis,
            r.eccentricity,
            r.inclination,
            r.mean_longitude,
            r.longitude_of_periapsis,
            r.ascending_node_longitude,
            r.semi_major_axis_rate,
            r.eccentricity_rate,
            r.inclination_rate,
            r.mean_longitude_rate,
            r.longitude_of_periapsis_rate,
            r.ascending_node_longitude_rate,
        )
        .with_periodic_terms(r.b, r.c, r.s, r.f)
    }
}

/// A user supplied set of elements.
///
/// The CSV format has a header line with a `body` column followed by the field
/// names of [`SecularElements`]. The periodic columns `b`, `c`, `s`, `f` are
/// optional. Lines starting with `#` are skipped and fields are trimmed.
///
/// ```text
/// body,semi_major_axis,eccentricity,inclination,mean_longitude,longitude_of_periapsis,ascending_node_longitude,semi_major_axis_rate,eccentricity_rate,inclination_rate,mean_longitude_rate,longitude_of_periapsis_rate,ascending_node_longitude_rate
/// Mars,1.52371034,0.09339410,1.84969142,-4.55343205,-23.94362959,49.55953891,0.00001847,0.00007882,-0.00813131,19140.30268499,0.44441088,-0.29257343
/// ```
///
/// A body listed twice keeps its last row.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTable {
    name: String,
    validity: Option<ValidityWindow>,
    elements: BTreeMap<Body, SecularElements>,
}

impl ElementTable {
    /// Empty table.
    pub fn new(name: impl Into<String>) -> Self {
        ElementTable {
            name: name.into(),
            validity: None,
            elements: BTreeMap::new(),
        }
    }

    pub fn with_validity(mut self, validity: ValidityWindow) -> Self {
        self.validity = Some(validity);
        self
    }

    /// Add or replace the elements of a body, returning the previous record.
    pub fn insert(&mut self, body: Body, elements: SecularElements) -> Option<SecularElements> {
        self.elements.insert(body, elements)
    }

    /// Bodies present in the table, in [`Body::ALL`] order.
    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.elements.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Read a table from any CSV source.
    ///
    /// Return
    /// ------
    /// * [`PlanetPosError::Csv`] if a row is malformed or a numeric column cannot be parsed,
    /// * [`PlanetPosError::UnknownBody`] if a body name is not recognized.
    pub fn from_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self, PlanetPosError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut table = ElementTable::new(name);
        for row in csv_reader.deserialize::<ElementRecord>() {
            let record = row?;
            let body = Body::from_str(&record.body)?;
            if table.insert(body, record.into()).is_some() {
                tracing::debug!(%body, table = %table.name, "duplicate body row, keeping the last one");
            }
        }

        tracing::debug!(table = %table.name, bodies = table.len(), "element table loaded");
        Ok(table)
    }

    /// Read a table from a CSV file. The table is named after the file stem.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PlanetPosError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file = std::fs::File::open(path)?;
        Self::from_reader(name, file)
    }
}

impl From<ElementSet> for ElementTable {
    fn from(set: ElementSet) -> Self {
        let mut table = ElementTable::new(set.name());
        table.validity = set.validity();
        for body in Body::ALL {
            if let Some(elements) = set.elements(body) {
                table.insert(body, elements);
            }
        }
        table
    }
}

impl ElementSource for ElementTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn elements(&self, body: Body) -> Option<SecularElements> {
        self.elements.get(&body).copied()
    }

    fn validity(&self) -> Option<ValidityWindow> {
        self.validity
    }
}

#[cfg(test)]
mod element_tables_test {
    use super::*;

    const HEADER: &str = "body,semi_major_axis,eccentricity,inclination,mean_longitude,\
longitude_of_periapsis,ascending_node_longitude,semi_major_axis_rate,eccentricity_rate,\
inclination_rate,mean_longitude_rate,longitude_of_periapsis_rate,ascending_node_longitude_rate";

    #[test]
    fn test_body_from_str() {
        assert_eq!("mars".parse::<Body>().unwrap(), Body::Mars);
        assert_eq!("  JUPITER ".parse::<Body>().unwrap(), Body::Jupiter);
        assert_eq!("earth".parse::<Body>().unwrap(), Body::EarthMoonBarycenter);
        assert_eq!("EMB".parse::<Body>().unwrap(), Body::EarthMoonBarycenter);
        assert_eq!("EM Bary".parse::<Body>().unwrap(), Body::EarthMoonBarycenter);
        assert_eq!(
            "Earth-Moon barycenter".parse::<Body>().unwrap(),
            Body::EarthMoonBarycenter
        );
        assert_eq!(
            "vulcan".parse::<Body>().unwrap_err(),
            PlanetPosError::UnknownBody("vulcan".into())
        );
    }

    #[test]
    fn test_body_display_roundtrip() {
        for body in Body::ALL {
            assert_eq!(body.to_string().parse::<Body>().unwrap(), body);
        }
    }

    #[test]
    fn test_element_set_from_str() {
        assert_eq!("short".parse::<ElementSet>().unwrap(), ElementSet::ShortRange);
        assert_eq!("1800-2050".parse::<ElementSet>().unwrap(), ElementSet::ShortRange);
        assert_eq!("long".parse::<ElementSet>().unwrap(), ElementSet::LongRange);
        assert_eq!(
            "3000BC-3000AD".parse::<ElementSet>().unwrap(),
            ElementSet::LongRange
        );
        assert!(matches!(
            "medium".parse::<ElementSet>(),
            Err(PlanetPosError::UnknownElementSet(_))
        ));
    }

    #[test]
    fn test_builtin_sets_cover_every_body() {
        for set in ElementSet::ALL {
            for body in Body::ALL {
                let elements = set.require(body).unwrap();
                assert!(elements.semi_major_axis > 0.0);
                assert!((0.0..1.0).contains(&elements.eccentricity));
            }
        }
    }

    #[test]
    fn test_periodic_terms_only_in_long_range() {
        for body in Body::ALL {
            assert!(!ElementSet::ShortRange
                .require(body)
                .unwrap()
                .has_periodic_terms());
        }

        let outer = [
            Body::Jupiter,
            Body::Saturn,
            Body::Uranus,
            Body::Neptune,
            Body::Pluto,
        ];
        for body in Body::ALL {
            let lr = ElementSet::LongRange.require(body).unwrap();
            assert_eq!(lr.has_periodic_terms(), outer.contains(&body), "{body}");
        }

        let saturn = ElementSet::LongRange.require(Body::Saturn).unwrap();
        assert_eq!(saturn.f, 38.35125);
        assert_eq!(saturn.s, 0.87320147);
    }

    #[test]
    fn test_validity() {
        let sr = ElementSet::ShortRange.validity().unwrap();
        assert!(sr.contains_year(2025));
        assert!(sr.contains_year(2050));
        assert!(!sr.contains_year(2051));
        assert_eq!(sr.to_string(), "1800 AD – 2050 AD");

        let lr = ElementSet::LongRange.validity().unwrap();
        assert!(lr.contains_year(-2500));
        assert_eq!(lr.to_string(), "3000 BC – 3000 AD");
    }

    #[test]
    fn test_table_from_reader() {
        let csv = format!(
            "{HEADER}\n\
# inner planets\n\
Mars, 1.52371034,0.09339410,1.84969142,-4.55343205,-23.94362959,49.55953891,0.00001847,0.00007882,-0.00813131,19140.30268499,0.44441088,-0.29257343\n\
earth,1.00000261,0.01671123,-0.00001531,100.46457166,102.93768193,0.0,0.00000562,-0.00004392,-0.01294668,35999.37244981,0.32327364,0.0\n"
        );

        let table = ElementTable::from_reader("inner", csv.as_bytes()).unwrap();
        assert_eq!(table.name(), "inner");
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.bodies().collect::<Vec<_>>(),
            vec![Body::EarthMoonBarycenter, Body::Mars]
        );
        assert_eq!(table.validity(), None);

        let mars = table.require(Body::Mars).unwrap();
        assert_eq!(mars, ElementSet::ShortRange.require(Body::Mars).unwrap());

        assert_eq!(
            table.require(Body::Venus).unwrap_err(),
            PlanetPosError::BodyNotInElementSet {
                body: "Venus".into(),
                source_name: "inner".into()
            }
        );
    }

    #[test]
    fn test_table_periodic_columns() {
        let csv = format!(
            "{HEADER},b,c,s,f\n\
Jupiter,5.20248019,0.04853590,1.29861416,34.33479152,14.27495244,100.29282654,-0.00002864,0.00018026,-0.00322699,3034.90371757,0.18199196,0.13024619,-0.00012452,0.06064060,-0.35635438,38.35125000\n"
        );
        let table = ElementTable::from_reader("outer", csv.as_bytes()).unwrap();
        assert_eq!(
            table.require(Body::Jupiter).unwrap(),
            ElementSet::LongRange.require(Body::Jupiter).unwrap()
        );
    }

    #[test]
    fn test_table_errors() {
        let csv = format!("{HEADER}\nVulcan,0.1,0,0,0,0,0,0,0,0,0,0,0\n");
        assert_eq!(
            ElementTable::from_reader("bad", csv.as_bytes()).unwrap_err(),
            PlanetPosError::UnknownBody("Vulcan".into())
        );

        let csv = format!("{HEADER}\nMars,abc,0,0,0,0,0,0,0,0,0,0,0\n");
        assert!(matches!(
            ElementTable::from_reader("bad", csv.as_bytes()),
            Err(PlanetPosError::Csv(_))
        ));

        assert!(matches!(
            ElementTable::from_path("/definitely/not/here.csv"),
            Err(PlanetPosError::Io(_))
        ));
    }

    #[test]
    fn test_table_from_element_set() {
        let table = ElementTable::from(ElementSet::LongRange);
        assert_eq!(table.len(), Body::ALL.len());
        assert_eq!(table.name(), ElementSet::LongRange.name());
        assert_eq!(table.validity(), ElementSet::LongRange.validity());
        for body in Body::ALL {
            assert_eq!(table.elements(body), ElementSet::LongRange.elements(body));
        }
    }
}
