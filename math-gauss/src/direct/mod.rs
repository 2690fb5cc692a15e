//! Direct solver for dense linear systems
//!
//! Gaussian elimination with partial pivoting, split into its stages:
//! - [`select_pivot`]: choose, swap in and normalize the pivot row
//! - [`eliminate_below`]: clear the pivot column under the pivot
//! - [`back_substitute`]: solve the resulting unit upper-triangular system
//! - [`gauss_solve`]: drive the stages and time them

mod backsub;
mod eliminate;
mod gauss;
mod pivot;

pub use backsub::back_substitute;
pub use eliminate::eliminate_below;
pub use gauss::{GaussConfig, GaussSolution, ReductionStats, gauss_solve, reduce, solve_dense};
pub use pivot::{PivotStep, select_pivot};
