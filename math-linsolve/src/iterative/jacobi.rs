//! Jacobi iteration
//!
//! With `A = L + D + U`, iterates `D·x_new = b - (L + U)·x_old`. Every component of
//! the new iterate depends only on the previous one, so a step is a single
//! matrix-vector product. Converges for strictly diagonally dominant matrices,
//! though dominance is not necessary.

use super::fixed_point::{IterativeSolution, Splitting, initial_guess, iterate};
use crate::error::Result;
use crate::preconditioners::JacobiPreconditioner;
use crate::traits::{Real, StopCondition, SystemPreconditioner};
use ndarray::linalg::general_mat_vec_mul;
use ndarray::{Array1, Array2};

/// Solve Ax = b with the Jacobi method
///
/// # Arguments
/// * `a` - Square coefficient matrix with a non-zero diagonal
/// * `b` - Right-hand side vector
/// * `x0` - Initial guess; `b` itself is used when `None`
/// * `stop` - Stop condition comparing successive iterates
pub fn jacobi<R, S>(
    a: &Array2<R>,
    b: &Array1<R>,
    x0: Option<&Array1<R>>,
    stop: &S,
) -> Result<IterativeSolution<R>>
where
    R: Real,
    S: StopCondition<Array1<R>> + ?Sized,
{
    let split = Splitting::new(a, b)?;
    let x0 = initial_guess(b, x0)?;

    Ok(iterate("Jacobi", a, b, x0, stop, |prev, next| {
        next.assign(b);
        general_mat_vec_mul(-R::one(), &split.off_diagonal, prev, R::one(), next);
        *next *= &split.inv_diag;
    }))
}

/// Solve Ax = b with the Jacobi method on the Jacobi-preconditioned system
///
/// The system is scaled once to a unit diagonal (after partial pivoting when
/// `pivot` is set), so each step is `x_new = b' - (A' - I)·x_old` without any
/// division. As for [`jacobi`], the initial guess defaults to the caller's `b`.
pub fn jacobi_preconditioned<R, S>(
    a: &Array2<R>,
    b: &Array1<R>,
    x0: Option<&Array1<R>>,
    stop: &S,
    pivot: bool,
) -> Result<IterativeSolution<R>>
where
    R: Real,
    S: StopCondition<Array1<R>> + ?Sized,
{
    let x0 = initial_guess(b, x0)?;
    let system = JacobiPreconditioner { pivot }.precondition(a, b)?;
    let mut off_diagonal = system.a;
    off_diagonal.diag_mut().fill(R::zero());

    Ok(iterate("Preconditioned Jacobi", a, b, x0, stop, |prev, next| {
        next.assign(&system.b);
        general_mat_vec_mul(-R::one(), &off_diagonal, prev, R::one(), next);
    }))
}
