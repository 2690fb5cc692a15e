//! Row elimination below a normalized pivot

use crate::parallel::parallel_map_mut;
use crate::store::LinearSystem;
use ndarray::{Array1, Zip, s};

/// Zero column `k` in every row below `k`
///
/// Row `k` must already hold a normalized pivot (see
/// [`select_pivot`](super::select_pivot)). For each row `j > k` the
/// multiplier is `A[j][k]`; the entry itself is set to exactly 0.0 and the
/// trailing columns and `b[j]` are updated with the pivot row.
///
/// With `parallel` set, the rows are updated concurrently. Each row still
/// performs the same operations in the same order, so the result is
/// bit-identical to the sequential path.
pub fn eliminate_below(system: &mut LinearSystem, k: usize, parallel: bool) {
    let n = system.dim();
    if k + 1 >= n {
        return;
    }

    let (matrix, rhs) = system.parts_mut();
    let (head, tail) = matrix.split_rows_mut(k + 1);
    let pivot_row = &head[k];

    let factors = if parallel {
        parallel_map_mut(tail, |row| update_row(row, pivot_row, k))
    } else {
        tail.iter_mut()
            .map(|row| update_row(row, pivot_row, k))
            .collect()
    };

    let pivot_rhs = rhs[k];
    for (offset, factor) in factors.into_iter().enumerate() {
        rhs[k + 1 + offset] -= factor * pivot_rhs;
    }
}

/// Subtract `factor * pivot_row` from `row`, returning the factor used
#[inline]
fn update_row(row: &mut Array1<f64>, pivot_row: &Array1<f64>, k: usize) -> f64 {
    let factor = row[k];
    row[k] = 0.0;
    Zip::from(row.slice_mut(s![k + 1..]))
        .and(pivot_row.slice(s![k + 1..]))
        .for_each(|a, &p| *a -= factor * p);
    factor
}
