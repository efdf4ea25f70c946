//! Forward and backward substitution on triangular factors

use crate::error::{LinsolveError, Result};
use crate::matrix::{Permutation, permute_rows, square_dim};
use crate::traits::Real;
use ndarray::{Array1, Array2, s};

/// Forward substitution `L·c = x`, overwriting `x` with `c`.
///
/// Only the strictly lower triangle of `l` is read when `unit_diagonal` is set,
/// so a compact LU store can be passed directly.
pub(crate) fn forward_in_place<R: Real>(
    l: &Array2<R>,
    x: &mut Array1<R>,
    unit_diagonal: bool,
) -> Result<()> {
    for i in 0..x.len() {
        let sum = l.slice(s![i, ..i]).dot(&x.slice(s![..i]));
        let mut ci = x[i] - sum;
        if !unit_diagonal {
            let d = l[[i, i]];
            if d.is_zero_pivot() {
                return Err(LinsolveError::SingularMatrix { step: i });
            }
            ci /= d;
        }
        x[i] = ci;
    }
    Ok(())
}

/// Backward substitution `U·x = c`, overwriting `x` (holding `c`) with the solution.
///
/// Only the upper triangle of `u`, diagonal included, is read.
pub(crate) fn backward_in_place<R: Real>(u: &Array2<R>, x: &mut Array1<R>) -> Result<()> {
    for i in (0..x.len()).rev() {
        let sum = u.slice(s![i, i + 1..]).dot(&x.slice(s![i + 1..]));
        let d = u[[i, i]];
        if d.is_zero_pivot() {
            return Err(LinsolveError::SingularMatrix { step: i });
        }
        x[i] = (x[i] - sum) / d;
    }
    Ok(())
}

/// Solve `L·x = b` for lower triangular `L`
pub fn solve_lower_triangular<R: Real>(
    l: &Array2<R>,
    b: &Array1<R>,
    unit_diagonal: bool,
) -> Result<Array1<R>> {
    let n = square_dim(l)?;
    LinsolveError::check_len(n, b.len())?;
    let mut x = b.clone();
    forward_in_place(l, &mut x, unit_diagonal)?;
    Ok(x)
}

/// Solve `U·x = b` for upper triangular `U`
pub fn solve_upper_triangular<R: Real>(u: &Array2<R>, b: &Array1<R>) -> Result<Array1<R>> {
    let n = square_dim(u)?;
    LinsolveError::check_len(n, b.len())?;
    let mut x = b.clone();
    backward_in_place(u, &mut x)?;
    Ok(x)
}

/// Solve `A·x = b` from explicit factors with `P·A = L·U`.
///
/// `L` may carry any non-zero diagonal; it is divided out during forward substitution.
pub fn solve_factors<R: Real>(
    l: &Array2<R>,
    u: &Array2<R>,
    perm: &Permutation,
    b: &Array1<R>,
) -> Result<Array1<R>> {
    let n = square_dim(l)?;
    LinsolveError::check_len(n, square_dim(u)?)?;
    LinsolveError::check_len(n, perm.len())?;
    LinsolveError::check_len(n, b.len())?;

    let mut x = b.clone();
    permute_rows(&mut x, perm)?;
    forward_in_place(l, &mut x, false)?;
    backward_in_place(u, &mut x)?;
    Ok(x)
}
