//! Gauss-Seidel and successive relaxation
//!
//! Gauss-Seidel uses the same splitting as Jacobi but sweeps the components in
//! order, so `x_new[i]` already sees the updated `x_new[j]` for `j < i`. It usually
//! converges faster than Jacobi, at a slight cost in stability.
//!
//! Successive relaxation moves `alpha` times the Gauss-Seidel step:
//! - `alpha > 1`: over-relaxation (SOR), faster but less stable
//! - `alpha == 1`: plain Gauss-Seidel
//! - `0 < alpha < 1`: under-relaxation, slower but more stable
//! - `alpha <= 0`: does not converge

use super::fixed_point::{IterativeSolution, Splitting, initial_guess, iterate};
use crate::error::Result;
use crate::traits::{Real, StopCondition};
use ndarray::{Array1, Array2, Zip};

/// One forward sweep over `x`, updating it in place
fn sweep<R: Real>(split: &Splitting<R>, b: &Array1<R>, x: &mut Array1<R>) {
    for i in 0..x.len() {
        let sum = split.off_diagonal.row(i).dot(&*x);
        x[i] = (b[i] - sum) * split.inv_diag[i];
    }
}

/// Solve Ax = b with the Gauss-Seidel method
///
/// # Arguments
/// * `a` - Square coefficient matrix with a non-zero diagonal
/// * `b` - Right-hand side vector
/// * `x0` - Initial guess; `b` itself is used when `None`
/// * `stop` - Stop condition comparing successive iterates
pub fn gauss_seidel<R, S>(
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

    Ok(iterate("Gauss-Seidel", a, b, x0, stop, |prev, next| {
        next.assign(prev);
        sweep(&split, b, next);
    }))
}

/// Solve Ax = b by successive relaxation with factor `alpha`
///
/// Each step computes the Gauss-Seidel iterate `x_gs` from `x_old` and moves to
/// `x_old + alpha·(x_gs - x_old)`.
pub fn sor<R, S>(
    a: &Array2<R>,
    b: &Array1<R>,
    x0: Option<&Array1<R>>,
    stop: &S,
    alpha: R,
) -> Result<IterativeSolution<R>>
where
    R: Real,
    S: StopCondition<Array1<R>> + ?Sized,
{
    let split = Splitting::new(a, b)?;
    let x0 = initial_guess(b, x0)?;

    if alpha <= R::zero() || alpha >= R::from_literal(2.0) {
        log::warn!("Relaxation factor {alpha} is outside (0, 2); SOR will not converge");
    }

    Ok(iterate("SOR", a, b, x0, stop, |prev, next| {
        next.assign(prev);
        sweep(&split, b, next);
        Zip::from(next)
            .and(prev)
            .for_each(|x, &old| *x = old + alpha * (*x - old));
    }))
}
