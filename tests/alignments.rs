//! Documented oppositions and conjunctions, checked against both element sets.
mod common;

use approx::assert_relative_eq;
use planetpos::element_tables::{Body, ElementSet};

use crate::common::{assert_opposite_longitude, assert_same_longitude, utc};

#[test]
fn test_mars_opposition_2025() {
    for set in ElementSet::ALL {
        assert_same_longitude(set, Body::Mars, utc(2025, 1, 16, 0, 0));
        assert_same_longitude(set, Body::Mars, utc(2025, 1, 16, 12, 0));
    }
}

#[test]
fn test_outer_planet_oppositions() {
    let oppositions = [
        (Body::Uranus, utc(2024, 11, 17, 12, 0)),
        (Body::Jupiter, utc(2024, 12, 7, 12, 0)),
        (Body::Saturn, utc(2025, 9, 21, 12, 0)),
        (Body::Neptune, utc(2025, 9, 23, 12, 0)),
        (Body::Uranus, utc(2025, 11, 21, 12, 0)),
    ];

    for set in ElementSet::ALL {
        for (body, days) in oppositions {
            assert_same_longitude(set, body, days);
        }
    }
}

#[test]
fn test_mars_conjunction_2019() {
    for set in ElementSet::ALL {
        assert_opposite_longitude(set, Body::Mars, utc(2019, 9, 2, 0, 0));
    }
}

#[test]
fn test_solar_conjunctions_2025() {
    let conjunctions = [
        (Body::Saturn, utc(2025, 3, 12, 3, 19)),
        (Body::Neptune, utc(2025, 3, 19, 16, 16)),
        (Body::Uranus, utc(2025, 5, 17, 16, 23)),
        (Body::Jupiter, utc(2025, 6, 24, 8, 5)),
    ];

    for set in ElementSet::ALL {
        for (body, days) in conjunctions {
            assert_opposite_longitude(set, body, days);
        }
    }
}

#[test]
fn test_venus_inferior_conjunction_2025() {
    for set in ElementSet::ALL {
        assert_same_longitude(set, Body::Venus, utc(2025, 3, 22, 18, 2));
    }
}

#[test]
fn test_dates_from_strings() {
    let days = planetpos::time::date_to_days_since_j2000("2025-01-16T00:00:00 UTC").unwrap();
    assert_relative_eq!(days, utc(2025, 1, 16, 0, 0), epsilon = 1e-9);
    assert_same_longitude(ElementSet::ShortRange, Body::Mars, days);
}
