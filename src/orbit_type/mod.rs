//! # Orbital element representations
//!
//! Two element sets are used by the approximate-position model:
//!
//! - [`secular_element`](crate::orbit_type::secular_element): the tabulated record: osculating
//!   elements at J2000 `(a, e, I, L, ϖ, Ω)`, their linear rates per Julian century, and the
//!   periodic correction terms `(b, c, s, f)` of the outer planets.
//! - [`osculating_element`](crate::orbit_type::osculating_element): the instantaneous elements
//!   obtained by projecting a record to a given time.
//!
//! ## Typical workflow
//!
//! ```rust
//! use planetpos::element_tables::{Body, ElementSet, ElementSource};
//!
//! let mars = ElementSet::ShortRange.elements(Body::Mars).unwrap();
//!
//! // 2025-01-16T00:00:00 UTC
//! let osc = mars.at_days(9146.5);
//! println!("e = {}, ω = {}°", osc.eccentricity, osc.argument_of_periapsis());
//! ```

/// Tabulated elements at J2000 and their secular rates.
pub mod secular_element;

/// Instantaneous elements at a given time.
pub mod osculating_element;
