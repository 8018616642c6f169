//! # Constants and type definitions for planetpos
//!
//! This module centralizes the **reference epoch**, **unit conversions**, the
//! **default numerical tolerances** of the Kepler solver and the **type aliases**
//! used throughout the crate.
//!
//! ## Overview
//!
//! - Reference epoch J2000 and time-span conversions (days ↔ Julian centuries)
//! - Unit conversions (degrees ↔ radians)
//! - Fixed obliquity of the J2000 ecliptic used for the ecliptic → ICRF rotation
//! - Default convergence threshold and iteration budget of the Kepler solver
//! - Angle and distance type aliases

// -------------------------------------------------------------------------------------------------
// Epoch and time spans
// -------------------------------------------------------------------------------------------------

/// Julian date of the J2000.0 epoch (2000-01-01 12:00:00)
pub const JD_J2000: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

// -------------------------------------------------------------------------------------------------
// Angles
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Obliquity of the J2000 ecliptic with respect to the ICRF equator, in degrees
pub const OBLIQUITY_J2000_DEG: Degree = 23.43928;

// -------------------------------------------------------------------------------------------------
// Kepler solver defaults
// -------------------------------------------------------------------------------------------------

/// Default convergence threshold on the Kepler residual: 1e-6 degree, in radians
pub const KEPLER_EPSILON: Radian = 1e-6 * RADEG;

/// Default iteration budget of the Newton-Raphson Kepler solver
pub const KEPLER_MAX_ITERATIONS: usize = 100;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Time elapsed since J2000.0, in days
pub type DaysSinceJ2000 = f64;
/// Time elapsed since J2000.0, in Julian centuries
pub type JulianCenturies = f64;
