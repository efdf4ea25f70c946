//! Diagonal (Jacobi) preconditioner
//!
//! Scales every equation by the inverse of its diagonal entry, so that the
//! preconditioned matrix `M^(-1)·A` has a unit diagonal with `M = diag(A)`.
//!
//! The pivoting variant first reorders the equations by partial pivoting so that
//! the largest available entry of each column lands on the diagonal, which avoids
//! dividing by a zero or tiny diagonal entry.

use super::PreconditionedSystem;
use crate::direct::pivot_row;
use crate::error::{LinsolveError, Result};
use crate::matrix::{Permutation, scale_rows, square_dim, swap_rows};
use crate::traits::{Real, SystemPreconditioner};
use ndarray::{Array1, Array2};

/// Diagonal (Jacobi) preconditioner
///
/// M = diag(P·A), so M^(-1) scales row i by 1/(P·A)_ii
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JacobiPreconditioner {
    /// Reorder rows by partial pivoting before scaling
    pub pivot: bool,
}

impl JacobiPreconditioner {
    /// Plain diagonal scaling
    pub fn new() -> Self {
        Self { pivot: false }
    }

    /// Diagonal scaling after partial pivoting
    pub fn with_pivoting() -> Self {
        Self { pivot: true }
    }
}

impl<R: Real> SystemPreconditioner<R> for JacobiPreconditioner {
    fn precondition(&self, a: &Array2<R>, b: &Array1<R>) -> Result<PreconditionedSystem<R>> {
        jacobi_precondition(a, b, self.pivot)
    }
}

/// Precondition `(a, b)` in place.
///
/// On success `a` has a unit diagonal and the returned permutation records the
/// row interchanges. Dimension and zero-diagonal errors are raised before any
/// value is scaled; with `pivot` the rows may already have been reordered.
pub fn jacobi_precondition_in_place<R: Real>(
    a: &mut Array2<R>,
    b: &mut Array1<R>,
    pivot: bool,
) -> Result<Permutation> {
    let n = square_dim(a)?;
    LinsolveError::check_len(n, b.len())?;

    let mut perm = Permutation::identity(n);
    if pivot {
        // scaling row i never changes the rows below it, so every swap can run first
        for i in 0..n {
            let row = pivot_row(a, i);
            if row != i {
                swap_rows(a, row, i);
                swap_rows(b, row, i);
                perm.swap(row, i);
            }
        }
    }

    if let Some(step) = a.diag().iter().position(|d| d.is_zero_pivot()) {
        return Err(LinsolveError::SingularMatrix { step });
    }

    let inv_diag: Vec<R> = a.diag().iter().map(|d| d.recip()).collect();
    scale_rows(a, &inv_diag)?;
    scale_rows(b, &inv_diag)?;
    a.diag_mut().fill(R::one());

    Ok(perm)
}

/// Precondition copies of `(a, b)`; the inputs are left untouched
pub fn jacobi_precondition<R: Real>(
    a: &Array2<R>,
    b: &Array1<R>,
    pivot: bool,
) -> Result<PreconditionedSystem<R>> {
    let mut a = a.clone();
    let mut b = b.clone();
    let perm = jacobi_precondition_in_place(&mut a, &mut b, pivot)?;
    Ok(PreconditionedSystem { a, b, perm })
}
