//! Fixed-point iteration skeleton shared by the stationary methods
//!
//! Every method splits `A = L + D + U` and repeats `x_new = G(x_old)` until the
//! injected [`StopCondition`] fires on two successive iterates.

use crate::error::{LinsolveError, Result};
use crate::matrix::{is_diagonally_dominant, square_dim};
use crate::stop::StopReason;
use crate::traits::{Real, StopCondition};
use crate::vector_ops::relative_residual;
use ndarray::{Array1, Array2};

/// Iterative solver result
#[derive(Debug, Clone)]
pub struct IterativeSolution<R: Real> {
    /// Solution vector
    pub x: Array1<R>,
    /// Number of iterations
    pub iterations: usize,
    /// Final relative residual ||b - Ax|| / ||b||
    pub residual: R,
    /// Why the iteration stopped
    pub stop_reason: StopReason,
    /// Whether convergence was achieved (stopped for any reason but the iteration ceiling)
    pub converged: bool,
}

impl<R: Real> IterativeSolution<R> {
    /// Treat stopping on the iteration ceiling as a failure
    pub fn into_converged(self) -> Result<Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(LinsolveError::NonConvergence {
                iterations: self.iterations,
            })
        }
    }
}

/// `A = (L + U) + D`, with `D` kept as its inverse
#[derive(Debug, Clone)]
pub(crate) struct Splitting<R: Real> {
    /// `L + U`: `A` with a zeroed diagonal
    pub off_diagonal: Array2<R>,
    /// `1 / A_ii`
    pub inv_diag: Array1<R>,
}

impl<R: Real> Splitting<R> {
    pub fn new(a: &Array2<R>, b: &Array1<R>) -> Result<Self> {
        let n = square_dim(a)?;
        LinsolveError::check_len(n, b.len())?;

        if let Some(step) = a.diag().iter().position(|d| d.is_zero_pivot()) {
            return Err(LinsolveError::SingularMatrix { step });
        }
        if !is_diagonally_dominant(a) {
            log::warn!("Matrix is not diagonally dominant; stationary iteration may diverge");
        }

        let inv_diag = a.diag().mapv(|d| d.recip());
        let mut off_diagonal = a.clone();
        off_diagonal.diag_mut().fill(R::zero());

        Ok(Self {
            off_diagonal,
            inv_diag,
        })
    }
}

/// Caller's guess, or `b` when none is given
pub(crate) fn initial_guess<R: Real>(b: &Array1<R>, x0: Option<&Array1<R>>) -> Result<Array1<R>> {
    match x0 {
        Some(x0) => {
            LinsolveError::check_len(b.len(), x0.len())?;
            Ok(x0.clone())
        }
        None => Ok(b.clone()),
    }
}

/// Run `step(previous, next)` until `stop` fires.
///
/// `step` must overwrite every entry of `next`. The residual is reported against
/// the caller's original `(a, b)`.
pub(crate) fn iterate<R, S, F>(
    method: &str,
    a: &Array2<R>,
    b: &Array1<R>,
    x0: Array1<R>,
    stop: &S,
    mut step: F,
) -> IterativeSolution<R>
where
    R: Real,
    S: StopCondition<Array1<R>> + ?Sized,
    F: FnMut(&Array1<R>, &mut Array1<R>),
{
    let mut previous = Array1::zeros(x0.len());
    let mut current = x0;
    let mut iterations = 0;

    let stop_reason = loop {
        if let Some(reason) = stop.check(&previous, &current, iterations) {
            break reason;
        }
        std::mem::swap(&mut previous, &mut current);
        step(&previous, &mut current);
        iterations += 1;
        log::trace!("{method} iteration {iterations}: x = {current}");
    };

    let residual = relative_residual(a, &current, b);
    let converged = stop_reason.is_converged();
    if converged {
        log::debug!(
            "{method} stopped after {iterations} iterations ({stop_reason:?}), relative residual = {:.6e}",
            residual.to_f64().unwrap_or(f64::NAN)
        );
    } else {
        log::warn!(
            "{method} reached the iteration ceiling after {iterations} iterations, relative residual = {:.6e}",
            residual.to_f64().unwrap_or(f64::NAN)
        );
    }

    IterativeSolution {
        x: current,
        iterations,
        residual,
        stop_reason,
        converged,
    }
}
