//! Gauss-Jordan elimination
//!
//! Reduces `A` to the identity by row operations applied jointly to a block of
//! right-hand sides `B`, which ends up holding `A^(-1)·B`. With `B = I` the same
//! pass yields the inverse.

use super::{pivot_row, sub_scaled_row};
use crate::error::{LinsolveError, Result};
use crate::matrix::{Permutation, square_dim, swap_rows};
use crate::traits::Real;
use ndarray::{Array1, Array2, Axis};

/// Eliminate in place.
///
/// On success `a` is overwritten with the identity, `b` with `A^(-1)·B`, and the
/// returned permutation records the row interchanges (identity when `pivot` is
/// false). On error both arguments hold partially reduced values.
///
/// Without pivoting a zero on the diagonal met mid-computation fails even when
/// `A` is non-singular; with pivoting only singular matrices fail.
pub fn eliminate_in_place<R: Real>(
    a: &mut Array2<R>,
    b: &mut Array2<R>,
    pivot: bool,
) -> Result<Permutation> {
    let n = square_dim(a)?;
    LinsolveError::check_len(n, b.nrows())?;

    let mut perm = Permutation::identity(n);

    // Forward pass: upper triangular
    for i in 0..n {
        if pivot {
            let row = pivot_row(a, i);
            if row != i {
                swap_rows(a, row, i);
                swap_rows(b, row, i);
                perm.swap(row, i);
            }
        }

        let p = a[[i, i]];
        if p.is_zero_pivot() {
            return Err(LinsolveError::SingularMatrix { step: i });
        }

        for j in (i + 1)..n {
            let factor = a[[j, i]] / p;
            if factor == R::zero() {
                continue;
            }
            sub_scaled_row(a, j, i, i, factor);
            sub_scaled_row(b, j, i, 0, factor);
        }
    }

    // Backward pass: identity
    for i in (0..n).rev() {
        let p = a[[i, i]];
        b.row_mut(i).mapv_inplace(|v| v / p);
        a.row_mut(i).mapv_inplace(|v| v / p);
        a[[i, i]] = R::one();

        for j in 0..i {
            let factor = a[[j, i]];
            if factor == R::zero() {
                continue;
            }
            sub_scaled_row(b, j, i, 0, factor);
            sub_scaled_row(a, j, i, i, factor);
        }
    }

    Ok(perm)
}

/// Eliminate on private copies and return `A^(-1)·B`; the inputs are left untouched
pub fn eliminate<R: Real>(a: &Array2<R>, b: &Array2<R>, pivot: bool) -> Result<Array2<R>> {
    let mut a = a.clone();
    let mut b = b.clone();
    eliminate_in_place(&mut a, &mut b, pivot)?;
    Ok(b)
}

/// Solve `A·x = b` by Gauss-Jordan elimination
pub fn gauss_solve<R: Real>(a: &Array2<R>, b: &Array1<R>, pivot: bool) -> Result<Array1<R>> {
    let n = square_dim(a)?;
    LinsolveError::check_len(n, b.len())?;

    let mut rhs = b.clone().insert_axis(Axis(1));
    eliminate_in_place(&mut a.clone(), &mut rhs, pivot)?;

    log::debug!("Gauss elimination solved a {n}x{n} system (pivot = {pivot})");
    Ok(rhs.remove_axis(Axis(1)))
}

/// Solve `A·X = B` for every column of `B` in a single elimination
pub fn gauss_solve_multi<R: Real>(a: &Array2<R>, b: &Array2<R>, pivot: bool) -> Result<Array2<R>> {
    let x = eliminate(a, b, pivot)?;
    log::debug!(
        "Gauss elimination solved a {}x{} system for {} right-hand sides",
        a.nrows(),
        a.ncols(),
        b.ncols()
    );
    Ok(x)
}

/// Inverse produced by [`invert`].
///
/// `matrix` is `A^(-1)`: the row interchanges chosen while pivoting were applied
/// to the identity block along with `A`, so they are already accounted for.
/// `perm` records them for inspection.
#[derive(Debug, Clone)]
pub struct Inverse<R: Real> {
    /// `A^(-1)`
    pub matrix: Array2<R>,
    /// Row permutation applied during elimination
    pub perm: Permutation,
}

impl<R: Real> Inverse<R> {
    /// Solve `A·x = b` with the precomputed inverse
    pub fn solve(&self, b: &Array1<R>) -> Result<Array1<R>> {
        LinsolveError::check_len(self.matrix.nrows(), b.len())?;
        Ok(self.matrix.dot(b))
    }
}

/// Invert `A` by Gauss-Jordan elimination against the identity
pub fn invert<R: Real>(a: &Array2<R>, pivot: bool) -> Result<Inverse<R>> {
    let n = square_dim(a)?;
    let mut work = a.clone();
    let mut matrix = Array2::eye(n);
    let perm = eliminate_in_place(&mut work, &mut matrix, pivot)?;

    log::debug!("Inverted a {n}x{n} matrix (pivot = {pivot})");
    Ok(Inverse { matrix, perm })
}
