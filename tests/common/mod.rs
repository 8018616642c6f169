#![allow(dead_code)]

use approx::assert_relative_eq;
use hifitime::Epoch;
use planetpos::alignment::{classify_alignment, heliocentric_separation, Alignment};
use planetpos::element_tables::{Body, ElementSet};
use planetpos::time::days_since_j2000;
use planetpos::SecularElements;

/// Tolerance used for every documented alignment: 1 degree.
pub const ALIGNMENT_TOLERANCE_DEG: f64 = 1.0;

pub fn utc(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> f64 {
    days_since_j2000(&Epoch::from_gregorian_utc_hms(year, month, day, hour, minute, 0))
}

/// Heliocentric separation in degrees between the Earth–Moon barycenter and `body`.
pub fn separation_from_earth_deg(set: ElementSet, body: Body, days: f64) -> f64 {
    heliocentric_separation(&set, Body::EarthMoonBarycenter, body, days)
        .unwrap()
        .to_degrees()
}

/// The Earth and `body` share the same heliocentric longitude: `body` is at
/// opposition (outer planet) or inferior conjunction (inner planet) seen from the Earth.
pub fn assert_same_longitude(set: ElementSet, body: Body, days: f64) {
    let sep = separation_from_earth_deg(set, body, days);
    assert!(
        sep < ALIGNMENT_TOLERANCE_DEG,
        "{body} with {set:?} at {days}: separation {sep}°"
    );
    assert_eq!(
        classify_alignment(
            0.0,
            sep.to_radians(),
            ALIGNMENT_TOLERANCE_DEG.to_radians()
        ),
        Some(Alignment::Conjunction)
    );
}

/// The Earth and `body` are on opposite sides of the Sun: `body` is in
/// conjunction with the Sun seen from the Earth.
pub fn assert_opposite_longitude(set: ElementSet, body: Body, days: f64) {
    let sep = separation_from_earth_deg(set, body, days);
    assert!(
        (180.0 - sep).abs() < ALIGNMENT_TOLERANCE_DEG,
        "{body} with {set:?} at {days}: separation {sep}°"
    );
    assert_eq!(
        classify_alignment(
            0.0,
            sep.to_radians(),
            ALIGNMENT_TOLERANCE_DEG.to_radians()
        ),
        Some(Alignment::Opposition)
    );
}

pub fn assert_elements_close(actual: &SecularElements, expected: &SecularElements, epsilon: f64) {
    assert_relative_eq!(
        actual.semi_major_axis,
        expected.semi_major_axis,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.eccentricity,
        expected.eccentricity,
        epsilon = epsilon
    );
    assert_relative_eq!(actual.inclination, expected.inclination, epsilon = epsilon);
    assert_relative_eq!(
        actual.mean_longitude,
        expected.mean_longitude,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.longitude_of_periapsis,
        expected.longitude_of_periapsis,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.ascending_node_longitude,
        expected.ascending_node_longitude,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.mean_longitude_rate,
        expected.mean_longitude_rate,
        epsilon = epsilon
    );
}
