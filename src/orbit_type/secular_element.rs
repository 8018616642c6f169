use serde::{Deserialize, Serialize};

use crate::{
    constants::{AstronomicalUnit, DaysSinceJ2000, Degree, JulianCenturies},
    orbit_type::osculating_element::OsculatingElements,
    time::centuries_since_j2000,
};

/// Orbital elements at epoch J2000 together with their secular drift.
///
/// This is the record format of the JPL "Approximate Positions of the Planets"
/// tables. Every `*_rate` field is a linear coefficient against the number of
/// Julian centuries elapsed since J2000. The periodic terms `b`, `c`, `s` and `f`
/// only appear for Jupiter–Pluto in the long-range table and default to zero.
///
/// Units:
/// * `semi_major_axis`: AU, rate in AU/century
/// * `eccentricity`: unitless, rate per century
/// * `inclination`, `mean_longitude`, `longitude_of_periapsis`,
///   `ascending_node_longitude`: degrees, rates in degrees/century
/// * `b`: degrees/century², `c` and `s`: degrees, `f`: degrees/century
///
/// A record is never mutated: [`SecularElements::at_centuries`] derives a new
/// [`OsculatingElements`] value instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecularElements {
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub mean_longitude: Degree,
    pub longitude_of_periapsis: Degree,
    pub ascending_node_longitude: Degree,

    pub semi_major_axis_rate: f64,
    pub eccentricity_rate: f64,
    pub inclination_rate: f64,
    pub mean_longitude_rate: f64,
    pub longitude_of_periapsis_rate: f64,
    pub ascending_node_longitude_rate: f64,

    #[serde(default)]
    pub b: f64,
    #[serde(default)]
    pub c: f64,
    #[serde(default)]
    pub s: f64,
    #[serde(default)]
    pub f: f64,
}

impl SecularElements {
    /// Build a record without periodic correction terms.
    ///
    /// Arguments are given in the column order of the JPL tables: the six
    /// elements `(a, e, I, L, ϖ, Ω)` followed by their six rates.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        semi_major_axis: AstronomicalUnit,
        eccentricity: f64,
        inclination: Degree,
        mean_longitude: Degree,
        longitude_of_periapsis: Degree,
        ascending_node_longitude: Degree,
        semi_major_axis_rate: f64,
        eccentricity_rate: f64,
        inclination_rate: f64,
        mean_longitude_rate: f64,
        longitude_of_periapsis_rate: f64,
        ascending_node_longitude_rate: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            mean_longitude,
            longitude_of_periapsis,
            ascending_node_longitude,
            semi_major_axis_rate,
            eccentricity_rate,
            inclination_rate,
            mean_longitude_rate,
            longitude_of_periapsis_rate,
            ascending_node_longitude_rate,
            b: 0.0,
            c: 0.0,
            s: 0.0,
            f: 0.0,
        }
    }

    /// Return a copy of the record with the periodic correction terms set.
    pub const fn with_periodic_terms(self, b: f64, c: f64, s: f64, f: f64) -> Self {
        Self { b, c, s, f, ..self }
    }

    /// `true` if any of the periodic correction terms is non zero.
    pub fn has_periodic_terms(&self) -> bool {
        self.b != 0.0 || self.c != 0.0 || self.s != 0.0 || self.f != 0.0
    }

    /// Project the elements to `centuries` Julian centuries after J2000.
    ///
    /// Every element is advanced linearly with its rate:
    ///
    /// ```text
    /// x(T) = x + xdot · T
    /// ```
    pub fn at_centuries(&self, centuries: JulianCenturies) -> OsculatingElements {
        OsculatingElements {
            centuries,
            semi_major_axis: self.semi_major_axis + self.semi_major_axis_rate * centuries,
            eccentricity: self.eccentricity + self.eccentricity_rate * centuries,
            inclination: self.inclination + self.inclination_rate * centuries,
            mean_longitude: self.mean_longitude + self.mean_longitude_rate * centuries,
            longitude_of_periapsis: self.longitude_of_periapsis
                + self.longitude_of_periapsis_rate * centuries,
            ascending_node_longitude: self.ascending_node_longitude
                + self.ascending_node_longitude_rate * centuries,
        }
    }

    /// Same as [`SecularElements::at_centuries`] with a time given in days since J2000.
    pub fn at_days(&self, days_since_j2000: DaysSinceJ2000) -> OsculatingElements {
        self.at_centuries(centuries_since_j2000(days_since_j2000))
    }

    /// Periodic correction to the mean anomaly, in degrees.
    ///
    /// ```text
    /// b·T² + c·cos(f·T) + s·sin(f·T)
    /// ```
    ///
    /// `f·T` is an angle in degrees. Returns exactly `0.0` for records without
    /// correction terms.
    pub fn periodic_correction(&self, centuries: JulianCenturies) -> Degree {
        let ft = (self.f * centuries).to_radians();
        self.b * centuries * centuries + self.c * ft.cos() + self.s * ft.sin()
    }
}
