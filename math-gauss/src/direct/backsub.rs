//! Back-substitution on a unit upper-triangular system

use crate::store::LinearSystem;
use ndarray::Array1;

/// Solve the reduced system bottom-up
///
/// Expects the state left by elimination: every diagonal entry is exactly
/// 1.0, so no division is performed. Columns are accumulated from the last
/// one down to `row + 1`.
pub fn back_substitute(system: &LinearSystem) -> Array1<f64> {
    let n = system.dim();
    let matrix = system.matrix();
    let rhs = system.rhs();

    let mut x = Array1::zeros(n);
    for row in (0..n).rev() {
        let coeffs = matrix.row(row);
        let mut value = rhs[row];
        for col in ((row + 1)..n).rev() {
            value -= coeffs[col] * x[col];
        }
        x[row] = value;
    }
    x
}
