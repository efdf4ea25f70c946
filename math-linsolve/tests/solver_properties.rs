//! Integration tests for the dense solvers
//!
//! Checks the algebraic properties every solver must satisfy on fixed and
//! randomly generated systems.

use approx::assert_relative_eq;
use math_linsolve::matrix::permute_rows;
use math_linsolve::{
    ArrayStopAt, LinsolveError, StopCondition, StopCriteria, StopReason, TridiagonalMatrix,
    array_stop_at, gauss_seidel, gauss_solve, invert, jacobi, jacobi_preconditioned, lu_factorize,
    lu_solve, sor, stop_at,
};
use ndarray::{Array1, Array2, array};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Random system whose diagonal dominates every row
fn dominant_system(n: usize, seed: u64) -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut a: Array2<f64> = Array2::from_shape_fn((n, n), |_| rng.random_range(-1.0..1.0));
    for i in 0..n {
        let off: f64 = a.row(i).iter().map(|v: &f64| v.abs()).sum();
        a[[i, i]] = off + rng.random_range(1.0..2.0);
    }
    let b = Array1::from_shape_fn(n, |_| rng.random_range(-10.0..10.0));
    (a, b)
}

/// Random dense system, well conditioned with overwhelming probability
fn general_system(n: usize, seed: u64) -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = Array2::from_shape_fn((n, n), |_| rng.random_range(-5.0..5.0));
    let b = Array1::from_shape_fn(n, |_| rng.random_range(-5.0..5.0));
    (a, b)
}

/// Stop condition that records every iterate it is shown
fn recording<'a>(
    trace: &'a RefCell<Vec<Array1<f64>>>,
    stop: &'a ArrayStopAt<f64>,
) -> impl Fn(&Array1<f64>, &Array1<f64>, usize) -> bool + 'a {
    move |before: &Array1<f64>, after: &Array1<f64>, iteration: usize| {
        trace.borrow_mut().push(after.clone());
        stop.should_stop(before, after, iteration)
    }
}

fn assert_matrix_close(actual: &Array2<f64>, expected: &Array2<f64>, epsilon: f64) {
    assert_eq!(actual.dim(), expected.dim());
    for (x, y) in actual.iter().zip(expected.iter()) {
        assert_relative_eq!(*x, *y, epsilon = epsilon);
    }
}

#[test]
fn test_gauss_round_trip() {
    init_logger();
    for seed in 0..8 {
        let (a, b) = general_system(12, seed);
        let x = gauss_solve(&a, &b, true).expect("Gauss solve should succeed");
        let ax = a.dot(&x);
        for i in 0..b.len() {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-8);
        }
    }
}

#[test]
fn test_lu_consistency() {
    init_logger();
    for seed in 0..8 {
        let (a, _) = general_system(10, seed);
        let lu = lu_factorize(&a, true).expect("LU should succeed");

        let mut pa = a.clone();
        permute_rows(&mut pa, &lu.perm).expect("Permutation has the right size");
        assert_matrix_close(&lu.lower().dot(&lu.upper()), &pa, 1e-10);
    }
}

#[test]
fn test_lu_matches_gauss() {
    let (a, b) = general_system(15, 42);
    let lu = lu_factorize(&a, true).expect("LU should succeed");
    let x_lu = lu_solve(&lu.lu, &lu.perm, &b).expect("Substitution should succeed");
    let x_gauss = gauss_solve(&a, &b, true).expect("Gauss solve should succeed");
    for i in 0..b.len() {
        assert_relative_eq!(x_lu[i], x_gauss[i], epsilon = 1e-9);
    }
}

#[test]
fn test_inverse_idempotence() {
    let (a, _) = dominant_system(6, 7);
    let once = invert(&a, false).expect("Inversion should succeed");
    let twice = invert(&once.matrix, false).expect("Inversion should succeed");
    assert_matrix_close(&twice.matrix, &a, 1e-10);

    let (a, _) = general_system(6, 11);
    let once = invert(&a, true).expect("Inversion should succeed");
    let twice = invert(&once.matrix, true).expect("Inversion should succeed");
    assert_matrix_close(&twice.matrix, &a, 1e-8);
}

#[test]
fn test_singular_detection() {
    let a = array![[1.0_f64, 2.0, 3.0], [0.0, 0.0, 0.0], [4.0, 5.0, 6.0]];
    let b = array![1.0_f64, 2.0, 3.0];

    for pivot in [false, true] {
        assert!(matches!(
            gauss_solve(&a, &b, pivot),
            Err(LinsolveError::SingularMatrix { .. })
        ));
        assert!(matches!(
            lu_factorize(&a, pivot),
            Err(LinsolveError::SingularMatrix { .. })
        ));
    }
}

#[test]
fn test_reference_example() {
    let a = array![[2.0_f64, 1.0], [5.0, 7.0]];
    let b = array![11.0_f64, 13.0];

    for pivot in [false, true] {
        let x = gauss_solve(&a, &b, pivot).expect("Gauss solve should succeed");
        assert_relative_eq!(x[0], 7.111_111_111, epsilon = 1e-9);
        assert_relative_eq!(x[1], -3.222_222_222, epsilon = 1e-9);

        let lu = lu_factorize(&a, pivot).expect("LU should succeed");
        let x = lu_solve(&lu.lu, &lu.perm, &b).expect("Substitution should succeed");
        assert_relative_eq!(x[0], 7.111_111_111, epsilon = 1e-9);
        assert_relative_eq!(x[1], -3.222_222_222, epsilon = 1e-9);
    }
}

#[test]
fn test_iterative_convergence() {
    init_logger();
    let a = array![[4.0_f64, 1.0], [1.0, 3.0]];
    let b = array![1.0_f64, 2.0];
    let stop = StopCriteria::<f64>::default().array();

    let direct = gauss_solve(&a, &b, true).expect("Gauss solve should succeed");
    let jac = jacobi(&a, &b, None, &stop).expect("Jacobi should run");
    let gs = gauss_seidel(&a, &b, None, &stop).expect("Gauss-Seidel should run");

    assert!(jac.converged && gs.converged);
    for i in 0..2 {
        assert_relative_eq!(jac.x[i], direct[i], epsilon = 1e-6);
        assert_relative_eq!(gs.x[i], direct[i], epsilon = 1e-6);
    }
    assert!(gs.iterations <= jac.iterations);
}

#[test]
fn test_iterative_random_dominant() {
    init_logger();
    let stop = array_stop_at(1e-12, 0.0, 2000);
    for seed in 0..4 {
        let (a, b) = dominant_system(20, seed);
        let direct = gauss_solve(&a, &b, true).expect("Gauss solve should succeed");

        let solutions = [
            jacobi(&a, &b, None, &stop),
            gauss_seidel(&a, &b, None, &stop),
            sor(&a, &b, None, &stop, 0.9),
            jacobi_preconditioned(&a, &b, None, &stop, false),
        ];
        for solution in solutions {
            let solution = solution
                .and_then(|s| s.into_converged())
                .expect("Dominant systems converge");
            for i in 0..b.len() {
                assert_relative_eq!(solution.x[i], direct[i], epsilon = 1e-8);
            }
        }
    }
}

#[test]
fn test_sor_unit_factor_matches_gauss_seidel() {
    let (a, b) = dominant_system(8, 3);
    let stop = StopCriteria::new(0.0, 0.0, 15).array();
    let gs_trace = RefCell::new(Vec::new());
    let sor_trace = RefCell::new(Vec::new());

    gauss_seidel(&a, &b, None, &recording(&gs_trace, &stop)).expect("Gauss-Seidel should run");
    sor(&a, &b, None, &recording(&sor_trace, &stop), 1.0).expect("SOR should run");

    let gs_trace = gs_trace.into_inner();
    let sor_trace = sor_trace.into_inner();
    assert_eq!(gs_trace.len(), 16);
    assert_eq!(gs_trace.len(), sor_trace.len());
    for (g, s) in gs_trace.iter().zip(&sor_trace) {
        for i in 0..b.len() {
            assert_relative_eq!(g[i], s[i], epsilon = 1e-12);
        }
    }
}

#[test]
fn test_iteration_ceiling_reported() {
    init_logger();
    // spectral radius of the Jacobi matrix is 2, so the iterates diverge
    let a = array![[1.0_f64, 2.0], [2.0, 1.0]];
    let b = array![1.0_f64, 1.0];
    let stop = array_stop_at(1e-12, 0.0, 25);

    let solution = jacobi(&a, &b, None, &stop).expect("Jacobi should run");
    assert_eq!(solution.iterations, 25);
    assert_eq!(solution.stop_reason, StopReason::IterationLimit);
    assert_eq!(
        solution.into_converged().map(|s| s.iterations),
        Err(LinsolveError::NonConvergence { iterations: 25 })
    );
}

#[test]
fn test_stop_at_zero_ceiling() {
    let stop = stop_at(0.0_f64, 0.0, 0);
    assert!(!stop.should_stop(&1.0, &2.0, 0));
    assert!(stop.should_stop(&1.0, &2.0, 1));

    let stop = array_stop_at(0.0_f64, 0.0, 0);
    let v = array![1.0_f64, 2.0];
    assert!(!stop.should_stop(&v, &v, 0));
    assert!(stop.should_stop(&v, &v, 1));
}

#[test]
fn test_tridiagonal_matches_dense() {
    let mut rng = StdRng::seed_from_u64(5);
    let n = 30;
    let lower = Array1::from_shape_fn(n - 1, |_| rng.random_range(-1.0..1.0));
    let upper = Array1::from_shape_fn(n - 1, |_| rng.random_range(-1.0..1.0));
    let diagonal = Array1::from_shape_fn(n, |_| rng.random_range(3.0..4.0));
    let b = Array1::from_shape_fn(n, |_| rng.random_range(-1.0..1.0));

    let tri = TridiagonalMatrix::new(lower, diagonal, upper).expect("Valid tridiagonal bands");
    let x = tri.solve(&b).expect("Tridiagonal solve should succeed");
    let dense = gauss_solve(&tri.to_dense(), &b, true).expect("Gauss solve should succeed");
    for i in 0..n {
        assert_relative_eq!(x[i], dense[i], epsilon = 1e-10);
    }
}
