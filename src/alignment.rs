//! Longitude comparisons between two bodies.
//!
//! All angles here are **heliocentric**. Two bodies with the same heliocentric
//! longitude are in heliocentric conjunction: seen from the inner one, the outer
//! one is at opposition. Two bodies 180° apart are in heliocentric opposition:
//! seen from one of them, the other one is in conjunction with the Sun.
use crate::{
    constants::{DaysSinceJ2000, Radian},
    element_tables::{Body, ElementSource},
    ephemeris::ApproxEphemeris,
    kepler::angle_diff,
    planetpos_errors::PlanetPosError,
};
use std::f64::consts::PI;

/// Heliocentric configuration of two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Same longitude, both bodies on the same side of the Sun
    Conjunction,
    /// Longitudes 180° apart, the Sun lies between the two bodies
    Opposition,
}

/// Angular distance between two longitudes, in [0, π].
///
/// The difference is taken across the ±π cut, so `longitude_separation(3.1, -3.1)`
/// is about `0.083` and not `6.2`.
pub fn longitude_separation(a: Radian, b: Radian) -> Radian {
    angle_diff(a, b).abs()
}

/// Classify two heliocentric longitudes.
///
/// Arguments
/// ---------
/// * `a`, `b`: longitudes in radians, any range.
/// * `tolerance`: maximum distance to the exact configuration, in radians.
///
/// Return
/// ------
/// * `Some(Alignment::Conjunction)` if the separation is at most `tolerance`,
/// * `Some(Alignment::Opposition)` if it is within `tolerance` of π,
/// * `None` otherwise.
pub fn classify_alignment(a: Radian, b: Radian, tolerance: Radian) -> Option<Alignment> {
    let separation = longitude_separation(a, b);
    if separation <= tolerance {
        Some(Alignment::Conjunction)
    } else if PI - separation <= tolerance {
        Some(Alignment::Opposition)
    } else {
        None
    }
}

/// Separation between the orbital longitudes `ϖ + ν` of two bodies, in [0, π].
///
/// Return
/// ------
/// * [`PlanetPosError::BodyNotInElementSet`] if `source` lacks one of the bodies.
pub fn heliocentric_separation<S: ElementSource + ?Sized>(
    source: &S,
    body1: Body,
    body2: Body,
    days: DaysSinceJ2000,
) -> Result<Radian, PlanetPosError> {
    let ephem = ApproxEphemeris::default();
    let lon1 = ephem.ecliptic_longitude(&source.require(body1)?, days);
    let lon2 = ephem.ecliptic_longitude(&source.require(body2)?, days);
    Ok(longitude_separation(lon1, lon2))
}
