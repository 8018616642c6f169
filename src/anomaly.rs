//! Conversions between mean, eccentric and true anomaly, and the orbital longitude.
//!
//! Every angle returned in radians is normalized to (−π, π].
use crate::{
    constants::{Degree, Radian},
    kepler::{principal_value, reduce_degrees},
    orbit_type::{osculating_element::OsculatingElements, secular_element::SecularElements},
};

/// Mean anomaly of the body, in degrees reduced to [−180°, 180°).
///
/// ```text
/// M = L(T) − ϖ(T) + b·T² + c·cos(f·T) + s·sin(f·T)
/// ```
///
/// Arguments
/// ---------
/// * `elements`: the tabulated record, source of the periodic terms.
/// * `osculating`: the same record projected to `T` with
///   [`SecularElements::at_centuries`].
pub fn mean_anomaly_deg(elements: &SecularElements, osculating: &OsculatingElements) -> Degree {
    let mean_anomaly = osculating.mean_longitude - osculating.longitude_of_periapsis
        + elements.periodic_correction(osculating.centuries);
    reduce_degrees(mean_anomaly)
}

/// True anomaly from the eccentric anomaly.
///
/// ```text
/// ν = atan2(√(1 − e²)·sin(E), cos(E) − e)
/// ```
///
/// The square root is not clamped: for `e > 1` the result is NaN.
pub fn true_anomaly_from_eccentric(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let y = (1.0 - eccentricity * eccentricity).sqrt() * eccentric_anomaly.sin();
    let x = eccentric_anomaly.cos() - eccentricity;
    principal_value(y.atan2(x))
}

/// Orbital longitude `λ = ϖ + ν`.
///
/// The longitude of periapsis already contains the node longitude (`ϖ = Ω + ω`),
/// so adding the true anomaly gives the angle of the body measured from the
/// vernal equinox, along the ecliptic up to the node and then along the orbit.
pub fn longitude_from_true_anomaly(
    longitude_of_periapsis: Degree,
    true_anomaly: Radian,
) -> Radian {
    principal_value(longitude_of_periapsis.to_radians() + true_anomaly)
}
