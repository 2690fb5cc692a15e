//! Solution checks
//!
//! [`verify_reference_solution`] compares against the closed form of
//! [`LinearSystem::reference`](crate::store::LinearSystem::reference) with
//! exact equality: every intermediate value of that system is exactly
//! representable, so any difference is a real defect. General inputs should
//! be checked with [`residual_inf_norm`] and a tolerance instead.

use crate::error::{GaussError, Result};
use ndarray::{Array1, Array2};

/// Expected component `i` of the reference solution of size `n`
pub fn reference_component(i: usize, n: usize) -> f64 {
    if n == 1 {
        // 2 x = 0
        0.0
    } else if i == 0 {
        -0.5
    } else if i == n - 1 {
        0.5
    } else {
        0.0
    }
}

/// Check a solution of the reference system component by component
pub fn verify_reference_solution(x: &Array1<f64>) -> Result<()> {
    let n = x.len();
    for (index, &got) in x.iter().enumerate() {
        let expected = reference_component(index, n);
        if got != expected {
            return Err(GaussError::VerificationFailed {
                index,
                expected,
                got,
            });
        }
    }
    Ok(())
}

/// Infinity norm of the residual `A x - b`
///
/// Returns NaN when any residual component is NaN.
pub fn residual_inf_norm(a: &Array2<f64>, x: &Array1<f64>, b: &Array1<f64>) -> f64 {
    (a.dot(x) - b).iter().fold(0.0_f64, |acc, &r| {
        if acc.is_nan() || r.is_nan() {
            f64::NAN
        } else {
            acc.max(r.abs())
        }
    })
}
