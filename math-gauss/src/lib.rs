//! Dense Gaussian elimination with partial pivoting
//!
//! This crate solves `A x = b` for a square dense matrix by Gaussian
//! elimination with maximal-magnitude row pivoting, followed by
//! back-substitution. It doubles as a performance baseline: the solve
//! reports the wall-clock time of the elimination and substitution phases.
//!
//! # Features
//!
//! - **Row storage**: rows are owned buffers, so pivot exchanges are O(1)
//! - **Exact reference system**: a self-test matrix with a known exact solution
//! - **Parallel elimination**: rayon row updates with the `native` feature,
//!   bit-identical to the sequential path
//!
//! Singularity is detected by an exactly zero pivot column. There is no
//! tolerance, so nearly singular inputs are not rejected.
//!
//! # Example
//!
//! ```ignore
//! use math_audio_gauss::{GaussConfig, LinearSystem, gauss_solve, verify_reference_solution};
//!
//! let system = LinearSystem::reference(1024)?;
//! let solution = gauss_solve(system, &GaussConfig::default())?;
//! verify_reference_solution(&solution.x)?;
//! println!("Time: {:.6} seconds", solution.elapsed.as_secs_f64());
//! ```

pub mod direct;
pub mod error;
pub mod parallel;
pub mod store;
pub mod verify;

pub use error::{GaussError, Result};
pub use store::{LinearSystem, RowMatrix};

// Re-export the solver pipeline
pub use direct::{
    GaussConfig, GaussSolution, PivotStep, ReductionStats, back_substitute, eliminate_below,
    gauss_solve, reduce, select_pivot, solve_dense,
};

pub use verify::{reference_component, residual_inf_norm, verify_reference_solution};
