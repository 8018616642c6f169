//! # Kepler equation solver
//!
//! This module defines the [`KeplerParams`](crate::kepler::KeplerParams) configuration struct and
//! its builder, the Newton–Raphson solver of Kepler's equation
//! ([`solve_kepler_equation`](crate::kepler::solver::solve_kepler_equation)) and the angle
//! reduction helpers shared by the whole crate.
//!
//! ## Purpose
//!
//! Kepler's equation relates the mean anomaly `M` to the eccentric anomaly `E` of an
//! elliptic orbit:
//!
//! ```text
//! M = E − e·sin(E)
//! ```
//!
//! It has no closed-form inverse, so `E` is found iteratively. The tradeoff between
//! precision and iteration budget is controlled by two parameters:
//!
//! - `epsilon`: threshold on the absolute residual `|E − e·sin(E) − M|` (radians),
//! - `max_iterations`: maximum number of Newton steps.
//!
//! Exhausting the budget is **not** an error: the last iterate is returned and the
//! [`KeplerSolution`](crate::kepler::solver::KeplerSolution) reports `converged == false`.
//!
//! ## Example
//!
//! ```rust
//! use planetpos::kepler::KeplerParams;
//! use planetpos::kepler::solver::solve_kepler_equation;
//!
//! let params = KeplerParams::builder()
//!     .epsilon(1e-12)
//!     .max_iterations(50)
//!     .build()
//!     .unwrap();
//!
//! let solution = solve_kepler_equation(1.0, 0.2, &params);
//! assert!(solution.converged);
//! ```
use serde::{Deserialize, Serialize};
use std::cmp::Ordering::Greater;
use std::f64::consts::PI;
use std::fmt;

use crate::{
    constants::{Degree, Radian, DPI, KEPLER_EPSILON, KEPLER_MAX_ITERATIONS},
    planetpos_errors::PlanetPosError,
};

pub mod solver;

/// Configuration of the Kepler equation solver.
///
/// Fields
/// -----------------
/// * `epsilon` – convergence threshold on `|E − e·sin(E) − M|`, in radians.
/// * `max_iterations` – maximum number of Newton–Raphson steps before the solver
///   gives up and returns its last iterate.
///
/// Defaults
/// -----------------
/// * `epsilon`: 1e-6 degree expressed in radians (≈ 1.745e-8)
/// * `max_iterations`: 100
///
/// These are the values recommended by the JPL approximate-position guide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeplerParams {
    pub epsilon: Radian,
    pub max_iterations: usize,
}

impl KeplerParams {
    /// Construct a new [`KeplerParams`] with the default values.
    ///
    /// This is equivalent to calling [`KeplerParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`KeplerParamsBuilder`] to override the default values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use planetpos::kepler::KeplerParams;
    ///
    /// let params = KeplerParams::builder()
    ///     .max_iterations(10)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.max_iterations, 10);
    /// ```
    pub fn builder() -> KeplerParamsBuilder {
        KeplerParamsBuilder::new()
    }
}

impl Default for KeplerParams {
    fn default() -> Self {
        KeplerParams {
            epsilon: KEPLER_EPSILON,
            max_iterations: KEPLER_MAX_ITERATIONS,
        }
    }
}

/// Builder for [`KeplerParams`], with validation.
#[derive(Debug, Clone)]
pub struct KeplerParamsBuilder {
    params: KeplerParams,
}

impl Default for KeplerParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeplerParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: KeplerParams::default(),
        }
    }

    pub fn epsilon(mut self, v: Radian) -> Self {
        self.params.epsilon = v;
        self
    }

    /// Convenience setter taking the convergence threshold in degrees.
    pub fn epsilon_deg(mut self, v: Degree) -> Self {
        self.params.epsilon = v.to_radians();
        self
    }

    pub fn max_iterations(mut self, v: usize) -> Self {
        self.params.max_iterations = v;
        self
    }

    /// Return true iff x > 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Finalize the builder and produce a [`KeplerParams`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * `epsilon > 0.0` and finite – a zero or NaN threshold can never be met.
    /// * `max_iterations ≥ 1` – at least one Newton step is performed.
    pub fn build(self) -> Result<KeplerParams, PlanetPosError> {
        let p = &self.params;

        if !Self::gt0(p.epsilon) || !p.epsilon.is_finite() {
            return Err(PlanetPosError::InvalidSolverParameter(
                "epsilon must be finite and > 0".into(),
            ));
        }
        if p.max_iterations == 0 {
            return Err(PlanetPosError::InvalidSolverParameter(
                "max_iterations must be >= 1".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for KeplerParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Kepler Solver Parameters")?;
            writeln!(f, "------------------------")?;
            writeln!(
                f,
                "  epsilon        = {:.3e} rad   # {:.3e} deg",
                self.epsilon,
                self.epsilon.to_degrees()
            )?;
            writeln!(f, "  max_iterations = {}", self.max_iterations)
        } else {
            write!(
                f,
                "KeplerParams(epsilon={:.3e} rad, max_iterations={})",
                self.epsilon, self.max_iterations
            )
        }
    }
}

/// Principal value of an angle in radians, in the interval (−π, π].
pub fn principal_value(a: Radian) -> Radian {
    if a > -PI && a <= PI {
        return a;
    }
    let r = PI - (PI - a).rem_euclid(DPI);
    // rem_euclid may round up to 2π for inputs just above π
    if r <= -PI {
        r + DPI
    } else {
        r
    }
}

/// Reduce an angle in degrees to the interval [−180°, 180°).
pub fn reduce_degrees(a: Degree) -> Degree {
    (a + 180.0).rem_euclid(360.0) - 180.0
}

/// Signed difference `a − b` between two angles in radians, in (−π, π].
pub fn angle_diff(a: Radian, b: Radian) -> Radian {
    principal_value(a - b)
}

#[cfg(test)]
mod kepler_params_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_params() {
        let params = KeplerParams::default();
        assert_relative_eq!(params.epsilon, 1.7453292519943295e-8, max_relative = 1e-15);
        assert_eq!(params.max_iterations, 100);
        assert_eq!(KeplerParams::new(), params);
    }

    #[test]
    fn test_builder() {
        let params = KeplerParams::builder()
            .epsilon_deg(1e-3)
            .max_iterations(7)
            .build()
            .unwrap();
        assert_relative_eq!(params.epsilon, 1e-3_f64.to_radians());
        assert_eq!(params.max_iterations, 7);
    }

    #[test]
    fn test_builder_validation() {
        let err = KeplerParams::builder().epsilon(0.0).build().unwrap_err();
        assert_eq!(
            err,
            PlanetPosError::InvalidSolverParameter("epsilon must be finite and > 0".into())
        );

        assert!(KeplerParams::builder().epsilon(f64::NAN).build().is_err());
        assert!(KeplerParams::builder().epsilon(-1e-8).build().is_err());
        assert!(KeplerParams::builder()
            .epsilon(f64::INFINITY)
            .build()
            .is_err());

        let err = KeplerParams::builder().max_iterations(0).build().unwrap_err();
        assert_eq!(
            err,
            PlanetPosError::InvalidSolverParameter("max_iterations must be >= 1".into())
        );
    }

    #[test]
    fn test_display() {
        let params = KeplerParams::default();
        assert_eq!(
            format!("{params}"),
            "KeplerParams(epsilon=1.745e-8 rad, max_iterations=100)"
        );
        let table = format!("{params:#}");
        assert!(table.starts_with("Kepler Solver Parameters"));
        assert!(table.contains("max_iterations = 100"));
    }

    #[test]
    fn test_principal_value() {
        assert_eq!(principal_value(0.0), 0.0);
        assert_eq!(principal_value(-1.2), -1.2);
        assert_eq!(principal_value(PI), PI);
        assert_relative_eq!(principal_value(-PI), PI);
        assert_relative_eq!(principal_value(3.0 * PI), PI, epsilon = 1e-12);
        assert_relative_eq!(principal_value(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(principal_value(-1.5 * PI), 0.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(principal_value(1000.0), 1000.0 - 159.0 * DPI, epsilon = 1e-9);

        for k in -50..=50 {
            let a = k as f64 * 0.37;
            let r = principal_value(a);
            assert!(r > -PI && r <= PI, "{a} -> {r}");
        }
    }

    #[test]
    fn test_reduce_degrees() {
        assert_eq!(reduce_degrees(0.0), 0.0);
        assert_eq!(reduce_degrees(180.0), -180.0);
        assert_eq!(reduce_degrees(-180.0), -180.0);
        assert_eq!(reduce_degrees(190.0), -170.0);
        assert_eq!(reduce_degrees(-190.0), 170.0);
        assert_eq!(reduce_degrees(720.5), 0.5);
        assert_relative_eq!(reduce_degrees(-1000.25), 79.75);
    }

    #[test]
    fn test_angle_diff() {
        assert_relative_eq!(angle_diff(0.1, -0.1), 0.2, epsilon = 1e-15);
        assert_relative_eq!(angle_diff(PI - 0.1, -PI + 0.1), -0.2, epsilon = 1e-12);
        assert_relative_eq!(angle_diff(-PI + 0.1, PI - 0.1), 0.2, epsilon = 1e-12);
    }
}
