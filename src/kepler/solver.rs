use crate::{
    constants::Radian,
    kepler::{principal_value, KeplerParams},
};

/// Outcome of [`solve_kepler_equation`].
///
/// The solver never fails: when the iteration budget is exhausted the last
/// iterate is returned with `converged == false`, and `residual` tells how far
/// it is from satisfying Kepler's equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly in radians, in (−π, π]
    pub eccentric_anomaly: Radian,
    /// Number of Newton steps performed
    pub iterations: usize,
    /// `|E − e·sin(E) − M|` of the returned iterate, before normalization
    pub residual: f64,
    /// `true` if `residual < epsilon`
    pub converged: bool,
}

/// One Newton–Raphson step on `f(E) = E − e·sin(E) − M`.
#[inline]
fn newton_step(ecc_anom: f64, eccentricity: f64, mean_anomaly: f64) -> f64 {
    ecc_anom
        - (ecc_anom - eccentricity * ecc_anom.sin() - mean_anomaly)
            / (1.0 - eccentricity * ecc_anom.cos())
}

#[inline]
fn kepler_residual(ecc_anom: f64, eccentricity: f64, mean_anomaly: f64) -> f64 {
    (ecc_anom - eccentricity * ecc_anom.sin() - mean_anomaly).abs()
}

/// Solve Kepler's equation `M = E − e·sin(E)` for the eccentric anomaly.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in radians (typically reduced to [−π, π)).
/// * `eccentricity`: orbital eccentricity `e`, expected in `[0, 1)`; not validated.
/// * `params`: convergence threshold and iteration budget.
///
/// Return
/// ------
/// * a [`KeplerSolution`] whose `eccentric_anomaly` is normalized to (−π, π].
///
/// Algorithm
/// ---------
/// Newton–Raphson iteration seeded with `E₀ = M + e·sin(M)`:
///
/// ```text
/// E ← E − (E − e·sin(E) − M) / (1 − e·cos(E))
/// ```
///
/// The loop stops as soon as `|E − e·sin(E) − M| < epsilon`. If `max_iterations`
/// steps are performed without meeting the threshold, the last iterate is returned
/// unchanged apart from normalization.
///
/// Remarks
/// -------
/// * Pure function of its inputs, safe to call from several threads.
/// * For `e ≥ 1` the iteration may diverge or produce NaN; this is propagated.
pub fn solve_kepler_equation(
    mean_anomaly: Radian,
    eccentricity: f64,
    params: &KeplerParams,
) -> KeplerSolution {
    let mut ecc_anom = mean_anomaly + eccentricity * mean_anomaly.sin();
    let mut residual = kepler_residual(ecc_anom, eccentricity, mean_anomaly);
    let mut iterations = 0;

    while iterations < params.max_iterations {
        ecc_anom = newton_step(ecc_anom, eccentricity, mean_anomaly);
        iterations += 1;
        residual = kepler_residual(ecc_anom, eccentricity, mean_anomaly);
        if residual < params.epsilon {
            break;
        }
    }

    let converged = residual < params.epsilon;
    if !converged {
        tracing::debug!(
            mean_anomaly,
            eccentricity,
            iterations,
            residual,
            "Kepler solver reached its iteration budget without converging"
        );
    }

    KeplerSolution {
        eccentric_anomaly: principal_value(ecc_anom),
        iterations,
        residual,
        converged,
    }
}
