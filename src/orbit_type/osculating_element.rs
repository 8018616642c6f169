use crate::constants::{AstronomicalUnit, Degree, JulianCenturies};

/// Instantaneous orbital elements, obtained from
/// [`SecularElements::at_centuries`](crate::orbit_type::secular_element::SecularElements::at_centuries).
///
/// Angles are kept in degrees and are **not** reduced: the mean longitude of an
/// inner planet grows by tens of thousands of degrees per century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OsculatingElements {
    /// Julian centuries since J2000 at which the elements were evaluated
    pub centuries: JulianCenturies,
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub mean_longitude: Degree,
    pub longitude_of_periapsis: Degree,
    pub ascending_node_longitude: Degree,
}

impl OsculatingElements {
    /// Argument of periapsis `ω = ϖ − Ω`, in degrees.
    pub fn argument_of_periapsis(&self) -> Degree {
        self.longitude_of_periapsis - self.ascending_node_longitude
    }

    /// `√(1 − e²)`, the ratio between the semi-minor and semi-major axis.
    ///
    /// NaN when `e > 1`; no clamping is applied.
    pub fn axis_ratio(&self) -> f64 {
        (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }
}
