//! End-to-end tests on the reference system
//!
//! The reference matrix `A[i][j] = 2 * (min(i, j) + 1)` with `b[i] = i`
//! solves to `[-0.5, 0, ..., 0, 0.5]` exactly, for any size.

use math_audio_gauss::{
    GaussConfig, GaussError, LinearSystem, gauss_solve, reduce, verify_reference_solution,
};

fn solve_reference(n: usize, config: &GaussConfig) -> ndarray::Array1<f64> {
    let system = LinearSystem::reference(n).expect("reference system");
    gauss_solve(system, config)
        .expect("reference system is nonsingular")
        .x
}

#[test]
fn test_reference_small_sizes() {
    for n in 2..=16 {
        let x = solve_reference(n, &GaussConfig::sequential());
        assert_eq!(x[0], -0.5, "n = {n}");
        assert_eq!(x[n - 1], 0.5, "n = {n}");
        for i in 1..n - 1 {
            assert_eq!(x[i], 0.0, "n = {n}, i = {i}");
        }
    }
}

#[test]
fn test_reference_1024() {
    let x = solve_reference(1024, &GaussConfig::default());
    verify_reference_solution(&x).expect("closed-form solution");
}

#[test]
fn test_reference_single_unknown() {
    let x = solve_reference(1, &GaussConfig::default());
    assert_eq!(x.len(), 1);
    assert_eq!(x[0], 0.0);
    verify_reference_solution(&x).expect("closed-form solution");
}

#[test]
fn test_reference_needs_no_swaps() {
    let system = LinearSystem::reference(64).expect("reference system");
    let solution = gauss_solve(system, &GaussConfig::default()).expect("nonsingular");
    assert_eq!(solution.row_swaps, 0);
    assert_eq!(solution.size, 64);
}

#[test]
fn test_reduced_reference_is_unit_upper_triangular() {
    let mut system = LinearSystem::reference(32).expect("reference system");
    reduce(&mut system, &GaussConfig::default()).expect("nonsingular");
    assert!(system.is_unit_upper_triangular());
}

#[test]
fn test_parallel_elimination_is_bit_identical() {
    let n = 96;
    let sequential = solve_reference(n, &GaussConfig::sequential());
    let parallel = solve_reference(
        n,
        &GaussConfig {
            parallel_threshold: 1,
            print_interval: 16,
        },
    );

    for (s, p) in sequential.iter().zip(parallel.iter()) {
        assert_eq!(s.to_bits(), p.to_bits());
    }
}

#[test]
fn test_singular_zero_column() {
    let a = ndarray::array![[0.0, 1.0, 2.0], [0.0, 3.0, 4.0], [0.0, 5.0, 7.0]];
    let b = ndarray::array![1.0, 2.0, 3.0];
    let system = LinearSystem::from_dense(&a, &b).expect("valid system");

    let err = gauss_solve(system, &GaussConfig::default()).unwrap_err();
    assert_eq!(err, GaussError::SingularMatrix { step: 0 });
}

#[test]
fn test_singular_late_step() {
    // Second row is twice the first
    let a = ndarray::array![[2.0, 1.0, 1.0], [4.0, 2.0, 2.0], [1.0, 3.0, 1.0]];
    let b = ndarray::array![1.0, 2.0, 3.0];
    let mut system = LinearSystem::from_dense(&a, &b).expect("valid system");

    let err = reduce(&mut system, &GaussConfig::sequential()).unwrap_err();
    assert_eq!(err, GaussError::SingularMatrix { step: 2 });
}
