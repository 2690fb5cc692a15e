//! Dense matrix and right-hand-side storage
//!
//! The coefficient matrix is kept as a list of independently owned row
//! buffers rather than one contiguous `Array2`. Partial pivoting exchanges
//! whole rows at every step, and with owned rows that exchange only moves
//! two buffer handles instead of copying `2 * N` values.
//!
//! [`LinearSystem`] pairs the matrix with its right-hand side and is the only
//! place where rows are exchanged, so a matrix row swap can never happen
//! without the matching RHS swap.

use crate::error::{GaussError, Result};
use ndarray::{Array1, Array2, ArrayViewMut1};

/// Square matrix stored as owned rows
#[derive(Debug, Clone, PartialEq)]
pub struct RowMatrix {
    rows: Vec<Array1<f64>>,
}

impl RowMatrix {
    /// Create an `n x n` matrix filled with zeros
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: (0..n).map(|_| Array1::zeros(n)).collect(),
        }
    }

    /// Copy a dense square matrix into row storage
    pub fn from_dense(a: &Array2<f64>) -> Result<Self> {
        let n = a.nrows();
        if n != a.ncols() {
            return Err(GaussError::DimensionMismatch {
                expected: n,
                got: a.ncols(),
            });
        }
        Ok(Self {
            rows: a.outer_iter().map(|row| row.to_owned()).collect(),
        })
    }

    /// Copy the rows back into a contiguous matrix
    pub fn to_dense(&self) -> Array2<f64> {
        let n = self.dim();
        Array2::from_shape_fn((n, n), |(i, j)| self.rows[i][j])
    }

    /// Matrix dimension N
    #[inline]
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn row(&self, i: usize) -> &Array1<f64> {
        &self.rows[i]
    }

    /// Mutable view of row `i`; entries can change, the row length cannot
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> ArrayViewMut1<'_, f64> {
        self.rows[i].view_mut()
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    /// Split the rows at `mid`: rows `0..mid` read-only, rows `mid..` mutable
    pub(crate) fn split_rows_mut(
        &mut self,
        mid: usize,
    ) -> (&[Array1<f64>], &mut [Array1<f64>]) {
        let (head, tail) = self.rows.split_at_mut(mid);
        (head, tail)
    }

    /// Exchange two rows by swapping buffer ownership
    fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }
}

/// A dense system `A x = b` owned as a unit
///
/// The solver mutates both parts in place; the original coefficients are
/// destroyed by elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: RowMatrix,
    rhs: Array1<f64>,
}

impl LinearSystem {
    /// Pair a matrix with its right-hand side
    pub fn new(matrix: RowMatrix, rhs: Array1<f64>) -> Result<Self> {
        let n = matrix.dim();
        if n == 0 {
            return Err(GaussError::EmptySystem);
        }
        if rhs.len() != n {
            return Err(GaussError::DimensionMismatch {
                expected: n,
                got: rhs.len(),
            });
        }
        Ok(Self { matrix, rhs })
    }

    /// Build a system from a dense matrix and vector
    pub fn from_dense(a: &Array2<f64>, b: &Array1<f64>) -> Result<Self> {
        Self::new(RowMatrix::from_dense(a)?, b.clone())
    }

    /// Self-test system with a known exact solution
    ///
    /// `A[i][j] = 2 * (min(i, j) + 1)` and `b[i] = i`. For `n >= 2` the
    /// solution is `-0.5` in the first component, `0.5` in the last and zero
    /// elsewhere, and every intermediate value is exactly representable.
    pub fn reference(n: usize) -> Result<Self> {
        let mut matrix = RowMatrix::zeros(n);
        for i in 0..n {
            let mut row = matrix.row_mut(i);
            for j in 0..n {
                row[j] = if j < i {
                    2.0 * (j + 1) as f64
                } else {
                    2.0 * (i + 1) as f64
                };
            }
        }
        let rhs = Array1::from_iter((0..n).map(|i| i as f64));
        Self::new(matrix, rhs)
    }

    /// System dimension N
    #[inline]
    pub fn dim(&self) -> usize {
        self.matrix.dim()
    }

    #[inline]
    pub fn matrix(&self) -> &RowMatrix {
        &self.matrix
    }

    #[inline]
    pub fn rhs(&self) -> &Array1<f64> {
        &self.rhs
    }

    /// Mutable access to both parts at once
    #[inline]
    pub(crate) fn parts_mut(&mut self) -> (&mut RowMatrix, &mut Array1<f64>) {
        (&mut self.matrix, &mut self.rhs)
    }

    /// Exchange rows `a` and `b` of the matrix together with their RHS entries
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.matrix.swap_rows(a, b);
        self.rhs.swap(a, b);
    }

    /// True when every sub-diagonal entry is exactly 0.0 and every diagonal
    /// entry is exactly 1.0
    pub fn is_unit_upper_triangular(&self) -> bool {
        let n = self.dim();
        (0..n).all(|i| {
            let row = self.matrix.row(i);
            row[i] == 1.0 && row.iter().take(i).all(|&v| v == 0.0)
        })
    }
}
