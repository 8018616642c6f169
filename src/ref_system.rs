use nalgebra::{Rotation3, Vector3};

use crate::{
    constants::{Radian, DPI, OBLIQUITY_J2000_DEG},
    orbit_type::osculating_element::OsculatingElements,
};

/// Reference frames in which heliocentric positions are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefSystem {
    // Orbital plane of the body, x axis towards periapsis
    Perifocal,
    // Mean ecliptic and equinox of J2000
    EclipticJ2000,
    // Equator and equinox of J2000, aligned with the ICRF
    EquatorialIcrf,
}

/// Elementary rotation of angle `alpha` around one of the coordinate axes.
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians, counter-clockwise when looking down the axis.
/// * `k`: axis index, `0 = x`, `1 = y`, `2 = z`.
///
/// The rotation is **applied to the vector** in a fixed frame:
///
/// ```text
/// rotmt(a, 0) = | 1    0       0    |
///               | 0  cos a  −sin a  |
///               | 0  sin a   cos a  |
/// ```
///
/// # Panics
///
/// Panics if `k > 2`, as only axes 0–2 are valid.
pub fn rotmt(alpha: Radian, k: usize) -> Rotation3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha)
}

/// Position of the body in its orbital plane, in AU.
///
/// ```text
/// x = a·(cos E − e)
/// y = a·√(1 − e²)·sin E
/// z = 0
/// ```
///
/// The x axis points towards periapsis.
pub fn orbital_plane_position(
    osculating: &OsculatingElements,
    eccentric_anomaly: Radian,
) -> Vector3<f64> {
    let a = osculating.semi_major_axis;
    Vector3::new(
        a * (eccentric_anomaly.cos() - osculating.eccentricity),
        a * osculating.axis_ratio() * eccentric_anomaly.sin(),
        0.0,
    )
}

/// Rotation from the perifocal frame to the J2000 ecliptic frame.
///
/// Standard 3-1-3 sequence built from the argument of periapsis `ω`, the inclination
/// `I` and the longitude of the ascending node `Ω`:
///
/// ```text
/// R = Rz(Ω) · Rx(I) · Rz(ω)
/// ```
///
/// Applied to an orbital-plane vector `(x, y, 0)` this gives
///
/// ```text
/// x_ecl = (cosω cosΩ − sinω sinΩ cosI)·x + (−sinω cosΩ − cosω sinΩ cosI)·y
/// y_ecl = (cosω sinΩ + sinω cosΩ cosI)·x + (−sinω sinΩ + cosω cosΩ cosI)·y
/// z_ecl = (sinω sinI)·x + (cosω sinI)·y
/// ```
pub fn perifocal_to_ecliptic(osculating: &OsculatingElements) -> Rotation3<f64> {
    let node = osculating.ascending_node_longitude.to_radians();
    let incl = osculating.inclination.to_radians();
    let peri = osculating.argument_of_periapsis().to_radians();

    rotmt(node, 2) * rotmt(incl, 0) * rotmt(peri, 2)
}

/// Rotation from the J2000 ecliptic frame to an equatorial frame, given the obliquity.
///
/// ```text
/// x_eq = x_ecl
/// y_eq = cosε·y_ecl − sinε·z_ecl
/// z_eq = sinε·y_ecl + cosε·z_ecl
/// ```
pub fn ecliptic_to_equatorial(obliquity: Radian) -> Rotation3<f64> {
    rotmt(obliquity, 0)
}

/// Rotation from the J2000 ecliptic frame to the ICRF, with the fixed J2000
/// obliquity of 23.43928°.
pub fn ecliptic_to_icrf() -> Rotation3<f64> {
    ecliptic_to_equatorial(OBLIQUITY_J2000_DEG.to_radians())
}

/// Compute the rotation between two reference systems.
///
/// The result `rot` satisfies `x₂ = rot · x₁`, where `x₁` is a vector in `ref_sys1`
/// and `x₂` the same vector in `ref_sys2`. The path always goes through the J2000
/// ecliptic frame. The perifocal frame depends on the orbit, so `osculating` is
/// required as soon as one side is [`RefSystem::Perifocal`]; it is ignored otherwise.
///
/// Return
/// ------
/// * `None` if the perifocal frame is involved and no elements were given.
pub fn rotpn(
    ref_sys1: RefSystem,
    ref_sys2: RefSystem,
    osculating: Option<&OsculatingElements>,
) -> Option<Rotation3<f64>> {
    let to_ecliptic = |rsys: RefSystem| -> Option<Rotation3<f64>> {
        match rsys {
            RefSystem::EclipticJ2000 => Some(Rotation3::identity()),
            RefSystem::EquatorialIcrf => Some(ecliptic_to_icrf().inverse()),
            RefSystem::Perifocal => osculating.map(perifocal_to_ecliptic),
        }
    };

    if ref_sys1 == ref_sys2 {
        return Some(Rotation3::identity());
    }

    let first = to_ecliptic(ref_sys1)?;
    let second = to_ecliptic(ref_sys2)?;
    Some(second.inverse() * first)
}

/// Convert a 3D Cartesian position vector to spherical coordinates.
///
/// In the ecliptic frame this gives ecliptic longitude and latitude; in the
/// equatorial frame, right ascension and declination.
///
/// Returns
/// --------
/// * Tuple `(λ, β, r)`:
///     - `λ`: longitude in radians, in the range [0, 2π).
///     - `β`: latitude in radians, in the range [−π/2, +π/2].
///     - `r`: Euclidean norm of the vector.
///
/// If the input vector has zero norm, the result is `(0.0, 0.0, 0.0)`.
pub fn cartesian_to_spherical(cartesian_position: &Vector3<f64>) -> (Radian, Radian, f64) {
    let pos_norm = cartesian_position.norm();
    if pos_norm == 0. {
        return (0.0, 0.0, pos_norm);
    }

    let latitude = (cartesian_position.z / pos_norm).asin();
    let longitude = cartesian_position.y.atan2(cartesian_position.x);
    let longitude = if longitude < 0.0 {
        longitude + DPI
    } else {
        longitude
    };
    (longitude, latitude, pos_norm)
}
