//! Approximate heliocentric positions of the major planets from the JPL secular
//! orbital elements ("Approximate Positions of the Planets", E. M. Standish).
//!
//! ```rust
//! use planetpos::{ElementSet, ElementSource, Body, ApproxEphemeris};
//!
//! let earth = ElementSet::ShortRange.require(Body::EarthMoonBarycenter).unwrap();
//! let state = ApproxEphemeris::default().state(&earth, 0.0);
//! assert!((state.heliocentric_distance() - 0.983).abs() < 1e-3);
//! ```
pub mod alignment;
pub mod anomaly;
pub mod constants;
pub mod element_tables;
pub mod ephemeris;
pub mod kepler;
pub mod orbit_type;
pub mod planetpos_errors;
pub mod ref_system;
pub mod time;

pub use element_tables::{Body, ElementSet, ElementSource, ElementTable};
pub use ephemeris::{ApproxEphemeris, OrbitState};
pub use kepler::KeplerParams;
pub use orbit_type::secular_element::SecularElements;
pub use planetpos_errors::PlanetPosError;
