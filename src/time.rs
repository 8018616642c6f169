//! # Time adapters
//!
//! The propagation engine only understands a single continuous scalar: the number of
//! days elapsed since the J2000.0 epoch (2000-01-01 12:00:00). This module converts
//! calendar instants into that scalar using [hifitime](https://docs.rs/hifitime).
//!
//! Days are counted on the UTC Julian day scale, so that
//! `2000-01-01T12:00:00 UTC` maps to `0.0`.
use hifitime::Epoch;
use std::str::FromStr;

use crate::{
    constants::{DaysSinceJ2000, JulianCenturies, DAYS_PER_JULIAN_CENTURY, JD_J2000},
    planetpos_errors::PlanetPosError,
};

/// Number of days between J2000.0 and the given epoch (UTC Julian day scale).
pub fn days_since_j2000(epoch: &Epoch) -> DaysSinceJ2000 {
    epoch.to_jde_utc_days() - JD_J2000
}

/// Transformation from julian date (JD) to days since J2000.
pub fn jd_to_days_since_j2000(jd: f64) -> DaysSinceJ2000 {
    jd - JD_J2000
}

/// Transformation from days since J2000 to julian date (JD).
pub fn days_since_j2000_to_jd(days: DaysSinceJ2000) -> f64 {
    days + JD_J2000
}

/// Julian centuries elapsed since J2000, the time argument of the secular rates.
pub fn centuries_since_j2000(days: DaysSinceJ2000) -> JulianCenturies {
    days / DAYS_PER_JULIAN_CENTURY
}

/// Transformation from a date string to days since J2000.
///
/// Argument
/// --------
/// * `date`: any date accepted by [`hifitime::Epoch::from_str`], for instance
///   `"2025-01-16T00:00:00 UTC"`. A date without time scale is read as UTC.
///
/// Return
/// ------
/// * the number of days since J2000, or [`PlanetPosError::InvalidDate`] if the
///   string cannot be parsed
pub fn date_to_days_since_j2000(date: &str) -> Result<DaysSinceJ2000, PlanetPosError> {
    let epoch = Epoch::from_str(date.trim())?;
    Ok(days_since_j2000(&epoch))
}

/// Days since J2000 of the current system time.
pub fn now_days_since_j2000() -> Result<DaysSinceJ2000, PlanetPosError> {
    let now = Epoch::now()?;
    Ok(days_since_j2000(&now))
}
