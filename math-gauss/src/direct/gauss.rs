//! Gaussian elimination driver
//!
//! Runs pivot selection and elimination for every step, then
//! back-substitution, and times the whole pipeline.

use super::{back_substitute, eliminate_below, select_pivot};
use crate::error::Result;
use crate::parallel::is_parallel_available;
use crate::store::LinearSystem;
use ndarray::{Array1, Array2};
use std::time::{Duration, Instant};

/// Gaussian elimination configuration
#[derive(Debug, Clone)]
pub struct GaussConfig {
    /// Use the parallel eliminator when at least this many rows lie below
    /// the pivot (0 = always sequential)
    pub parallel_threshold: usize,
    /// Log progress every N elimination steps (0 = no output)
    pub print_interval: usize,
}

impl Default for GaussConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
            print_interval: 0,
        }
    }
}

impl GaussConfig {
    /// Configuration that never takes the parallel path
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: 0,
            ..Self::default()
        }
    }

    fn use_parallel(&self, rows_below: usize) -> bool {
        self.parallel_threshold > 0
            && rows_below >= self.parallel_threshold
            && is_parallel_available()
    }
}

/// Summary of a completed elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReductionStats {
    /// Number of pivot steps that exchanged rows
    pub row_swaps: usize,
}

/// Gaussian elimination result
#[derive(Debug, Clone)]
pub struct GaussSolution {
    /// Solution vector
    pub x: Array1<f64>,
    /// Wall-clock time of elimination plus back-substitution
    pub elapsed: Duration,
    /// System dimension
    pub size: usize,
    /// Number of pivot steps that exchanged rows
    pub row_swaps: usize,
}

/// Reduce the system to unit upper-triangular form in place
///
/// Stops at the first singular pivot column; the system contents are not
/// meaningful after an error.
pub fn reduce(system: &mut LinearSystem, config: &GaussConfig) -> Result<ReductionStats> {
    let n = system.dim();
    let mut stats = ReductionStats::default();

    for k in 0..n {
        let step = select_pivot(system, k)?;
        if step.swapped() {
            stats.row_swaps += 1;
        }

        eliminate_below(system, k, config.use_parallel(n - k - 1));

        if config.print_interval > 0 && (k + 1) % config.print_interval == 0 {
            log::info!(
                "Gauss step {}/{}: pivot {:.3e} from row {}",
                k + 1,
                n,
                step.pivot_value,
                step.pivot_row
            );
        }
    }

    Ok(stats)
}

/// Solve the system, consuming it
///
/// The elapsed time covers elimination and back-substitution only.
pub fn gauss_solve(mut system: LinearSystem, config: &GaussConfig) -> Result<GaussSolution> {
    let size = system.dim();
    let start = Instant::now();

    let stats = reduce(&mut system, config)?;
    let x = back_substitute(&system);

    let elapsed = start.elapsed();
    log::info!(
        "Gauss solve: {} rows, {} row swaps, {:.3}s",
        size,
        stats.row_swaps,
        elapsed.as_secs_f64()
    );

    Ok(GaussSolution {
        x,
        elapsed,
        size,
        row_swaps: stats.row_swaps,
    })
}

/// Solve `A x = b` without modifying the inputs
///
/// This is a convenience function that copies the inputs into a
/// [`LinearSystem`] and runs [`gauss_solve`] with the default configuration.
pub fn solve_dense(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let system = LinearSystem::from_dense(a, b)?;
    Ok(gauss_solve(system, &GaussConfig::default())?.x)
}
