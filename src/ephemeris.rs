//! # Approximate heliocentric ephemeris
//!
//! Chains the whole pipeline for one body at one instant:
//!
//! ```text
//! SecularElements ──► OsculatingElements(T) ──► M ──► E (Kepler) ──► ν ──► λ
//!                                                     │
//!                                                     └──► (x, y)_orbit ──► ecliptic J2000 ──► ICRF
//! ```
//!
//! [`ApproxEphemeris`] carries the solver configuration; the free functions of this
//! module are shortcuts using [`KeplerParams::default`].
//!
//! Time is always given as a number of days since J2000.0, see [`crate::time`].
//!
//! ## Example
//!
//! ```rust
//! use planetpos::element_tables::{Body, ElementSet, ElementSource};
//! use planetpos::ephemeris::position_ecliptic;
//! use planetpos::time::date_to_days_since_j2000;
//!
//! let mars = ElementSet::ShortRange.require(Body::Mars).unwrap();
//! let days = date_to_days_since_j2000("2025-01-16T00:00:00 UTC").unwrap();
//! let pos = position_ecliptic(&mars, days);
//! assert!((pos.norm() - 1.626).abs() < 1e-3);
//! ```
use nalgebra::Vector3;

use crate::{
    anomaly::{longitude_from_true_anomaly, mean_anomaly_deg, true_anomaly_from_eccentric},
    constants::{AstronomicalUnit, DaysSinceJ2000, JulianCenturies, Radian},
    kepler::{
        principal_value,
        solver::{solve_kepler_equation, KeplerSolution},
        KeplerParams,
    },
    orbit_type::{osculating_element::OsculatingElements, secular_element::SecularElements},
    ref_system::{ecliptic_to_icrf, orbital_plane_position, perifocal_to_ecliptic},
};

/// Every intermediate quantity of one evaluation of the ephemeris.
///
/// Angles are in radians, normalized to (−π, π].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Julian centuries since J2000
    pub centuries: JulianCenturies,
    /// Elements projected to `centuries`
    pub osculating: OsculatingElements,
    /// Mean anomaly, periodic terms included
    pub mean_anomaly: Radian,
    /// Output of the Kepler solver, holds the eccentric anomaly
    pub kepler: KeplerSolution,
    pub true_anomaly: Radian,
    /// Orbital longitude `ϖ + ν`
    pub longitude: Radian,
}

impl OrbitState {
    pub fn eccentric_anomaly(&self) -> Radian {
        self.kepler.eccentric_anomaly
    }

    /// Sun–body distance `r = a·(1 − e·cos E)`, in AU.
    pub fn heliocentric_distance(&self) -> AstronomicalUnit {
        self.osculating.semi_major_axis
            * (1.0 - self.osculating.eccentricity * self.eccentric_anomaly().cos())
    }

    /// Position in the orbital plane, x axis towards periapsis, in AU.
    pub fn orbital_plane_position(&self) -> Vector3<f64> {
        orbital_plane_position(&self.osculating, self.eccentric_anomaly())
    }

    /// Heliocentric position in the J2000 ecliptic frame, in AU.
    pub fn position_ecliptic(&self) -> Vector3<f64> {
        perifocal_to_ecliptic(&self.osculating) * self.orbital_plane_position()
    }

    /// Heliocentric position in the ICRF (J2000 equatorial frame), in AU.
    pub fn position_equatorial(&self) -> Vector3<f64> {
        ecliptic_to_icrf() * self.position_ecliptic()
    }
}

/// Approximate ephemeris from secular elements, with a configurable Kepler solver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ApproxEphemeris {
    params: KeplerParams,
}

impl ApproxEphemeris {
    pub fn new(params: KeplerParams) -> Self {
        ApproxEphemeris { params }
    }

    pub fn params(&self) -> &KeplerParams {
        &self.params
    }

    /// Evaluate the elements at `days` since J2000 and keep every intermediate.
    ///
    /// Arguments
    /// ---------
    /// * `elements`: tabulated elements of the body.
    /// * `days`: days since J2000.0, negative before the epoch.
    ///
    /// Remarks
    /// -------
    /// * Never fails. If the solver runs out of iterations the state is built from
    ///   its last iterate and `kepler.converged` is `false`.
    /// * `e ≥ 1` is not supported and yields NaN.
    pub fn state(&self, elements: &SecularElements, days: DaysSinceJ2000) -> OrbitState {
        let osculating = elements.at_days(days);
        let mean_anomaly = principal_value(mean_anomaly_deg(elements, &osculating).to_radians());

        let kepler = solve_kepler_equation(mean_anomaly, osculating.eccentricity, &self.params);
        let true_anomaly =
            true_anomaly_from_eccentric(kepler.eccentric_anomaly, osculating.eccentricity);
        let longitude =
            longitude_from_true_anomaly(osculating.longitude_of_periapsis, true_anomaly);

        OrbitState {
            centuries: osculating.centuries,
            osculating,
            mean_anomaly,
            kepler,
            true_anomaly,
            longitude,
        }
    }

    /// Eccentric anomaly `E`, in (−π, π].
    pub fn eccentric_anomaly(&self, elements: &SecularElements, days: DaysSinceJ2000) -> Radian {
        self.state(elements, days).eccentric_anomaly()
    }

    /// True anomaly `ν`, in (−π, π].
    pub fn true_anomaly(&self, elements: &SecularElements, days: DaysSinceJ2000) -> Radian {
        self.state(elements, days).true_anomaly
    }

    /// Orbital longitude `λ = ϖ + ν`, in (−π, π].
    ///
    /// This is the longitude measured in the orbit plane. It differs from the
    /// ecliptic longitude of [`ApproxEphemeris::position_ecliptic`] by a term of
    /// order `sin²(I/2)`.
    pub fn ecliptic_longitude(&self, elements: &SecularElements, days: DaysSinceJ2000) -> Radian {
        self.state(elements, days).longitude
    }

    /// Heliocentric position in the J2000 ecliptic frame, in AU.
    pub fn position_ecliptic(
        &self,
        elements: &SecularElements,
        days: DaysSinceJ2000,
    ) -> Vector3<f64> {
        self.state(elements, days).position_ecliptic()
    }

    /// Heliocentric position in the ICRF, in AU.
    pub fn position_equatorial(
        &self,
        elements: &SecularElements,
        days: DaysSinceJ2000,
    ) -> Vector3<f64> {
        self.state(elements, days).position_equatorial()
    }
}

/// Eccentric anomaly with the default solver parameters.
pub fn eccentric_anomaly(elements: &SecularElements, days: DaysSinceJ2000) -> Radian {
    ApproxEphemeris::default().eccentric_anomaly(elements, days)
}

/// True anomaly with the default solver parameters.
pub fn true_anomaly(elements: &SecularElements, days: DaysSinceJ2000) -> Radian {
    ApproxEphemeris::default().true_anomaly(elements, days)
}

/// Orbital longitude `ϖ + ν` with the default solver parameters.
pub fn ecliptic_longitude(elements: &SecularElements, days: DaysSinceJ2000) -> Radian {
    ApproxEphemeris::default().ecliptic_longitude(elements, days)
}

/// Ecliptic J2000 position with the default solver parameters.
pub fn position_ecliptic(elements: &SecularElements, days: DaysSinceJ2000) -> Vector3<f64> {
    ApproxEphemeris::default().position_ecliptic(elements, days)
}

/// ICRF position with the default solver parameters.
pub fn position_equatorial(elements: &SecularElements, days: DaysSinceJ2000) -> Vector3<f64> {
    ApproxEphemeris::default().position_equatorial(elements, days)
}
