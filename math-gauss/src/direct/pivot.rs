//! Partial pivot selection and row normalization

use crate::error::{GaussError, Result};
use crate::store::LinearSystem;
use ndarray::s;

/// Outcome of a single pivot selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotStep {
    /// Elimination step (pivot column)
    pub step: usize,
    /// Row, before the exchange, that supplied the pivot
    pub pivot_row: usize,
    /// Pivot value before normalization
    pub pivot_value: f64,
}

impl PivotStep {
    /// Whether a row exchange took place
    pub fn swapped(&self) -> bool {
        self.pivot_row != self.step
    }
}

/// Select the pivot for step `k`, swap it into row `k` and normalize
///
/// Among rows `k..N` the one with the largest `|A[row][k]|` wins; ties keep
/// the earliest row. A winning magnitude of exactly zero means the column is
/// empty and the system is singular. Singularity is detected by an exact
/// comparison against 0.0; a near-singular matrix passes this check and can
/// produce a meaningless solution.
///
/// After the exchange, row `k` is divided by the pivot from column `k + 1`
/// on, `b[k]` likewise, and `A[k][k]` is set to exactly 1.0.
///
/// # Panics
///
/// Panics if `k` is not a valid row index (`k >= N`).
pub fn select_pivot(system: &mut LinearSystem, k: usize) -> Result<PivotStep> {
    let n = system.dim();
    assert!(k < n, "pivot step {k} out of range for {n} rows");
    let matrix = system.matrix();

    let mut pivot_row = k;
    let mut big = matrix.get(k, k).abs();
    for i in (k + 1)..n {
        let candidate = matrix.get(i, k).abs();
        if candidate > big {
            big = candidate;
            pivot_row = i;
        }
    }

    if big == 0.0 {
        return Err(GaussError::SingularMatrix { step: k });
    }

    if pivot_row != k {
        log::debug!("step {k}: swapping rows {k} and {pivot_row}");
        system.swap_rows(k, pivot_row);
    }

    let (matrix, rhs) = system.parts_mut();
    let mut row = matrix.row_mut(k);
    let pivot_value = row[k];
    if pivot_value != 1.0 {
        row[k] = 1.0;
        row.slice_mut(s![k + 1..]).mapv_inplace(|v| v / pivot_value);
        rhs[k] /= pivot_value;
    }

    Ok(PivotStep {
        step: k,
        pivot_row,
        pivot_value,
    })
}
