//! LU decomposition solver
//!
//! Factorizes `P·A = L·U` and stores both factors in a single matrix: the strictly
//! lower triangle holds the multipliers of `L` (whose unit diagonal is implied) and
//! the upper triangle, diagonal included, holds `U`.

use super::substitution::{backward_in_place, forward_in_place};
use super::{pivot_row, sub_scaled_row};
use crate::error::{LinsolveError, Result};
use crate::matrix::{Permutation, permute_rows, square_dim, swap_rows};
use crate::traits::Real;
use ndarray::{Array1, Array2};

/// LU factorization result
///
/// Stores L and U factors along with the row permutation
#[derive(Debug, Clone)]
pub struct LuFactorization<R: Real> {
    /// Combined L and U matrices (L is unit lower triangular, stored below diagonal)
    pub lu: Array2<R>,
    /// Row `i` of `L·U` is row `perm[i]` of the original matrix
    pub perm: Permutation,
    /// Matrix dimension
    pub n: usize,
}

impl<R: Real> LuFactorization<R> {
    /// Solve Ax = b using the pre-computed LU factorization
    pub fn solve(&self, b: &Array1<R>) -> Result<Array1<R>> {
        let mut x = b.clone();
        self.solve_in_place(&mut x)?;
        Ok(x)
    }

    /// Solve Ax = b, overwriting `b` with the solution
    pub fn solve_in_place(&self, b: &mut Array1<R>) -> Result<()> {
        LinsolveError::check_len(self.n, square_dim(&self.lu)?)?;
        LinsolveError::check_len(self.n, b.len())?;
        permute_rows(b, &self.perm)?;
        forward_in_place(&self.lu, b, true)?;
        backward_in_place(&self.lu, b)
    }

    /// Solve AX = B column by column
    pub fn solve_multi(&self, b: &Array2<R>) -> Result<Array2<R>> {
        LinsolveError::check_len(self.n, b.nrows())?;
        let mut x = b.clone();
        for mut column in x.columns_mut() {
            let mut col = column.to_owned();
            self.solve_in_place(&mut col)?;
            column.assign(&col);
        }
        Ok(x)
    }

    /// Unit lower triangular factor
    pub fn lower(&self) -> Array2<R> {
        Array2::from_shape_fn((self.n, self.n), |(i, j)| {
            if i > j {
                self.lu[[i, j]]
            } else if i == j {
                R::one()
            } else {
                R::zero()
            }
        })
    }

    /// Upper triangular factor
    pub fn upper(&self) -> Array2<R> {
        Array2::from_shape_fn((self.n, self.n), |(i, j)| {
            if i <= j { self.lu[[i, j]] } else { R::zero() }
        })
    }

    /// det(A) = sign(P) · Π U_ii
    pub fn determinant(&self) -> R {
        let sign = if self.perm.sign() > 0 {
            R::one()
        } else {
            -R::one()
        };
        self.lu.diag().iter().fold(sign, |acc, &d| acc * d)
    }
}

/// Factorize in place.
///
/// `a` is overwritten with the compact LU store; the returned permutation is the
/// identity when `pivot` is false. On error `a` holds a partial factorization.
pub fn lu_factorize_in_place<R: Real>(a: &mut Array2<R>, pivot: bool) -> Result<Permutation> {
    let n = square_dim(a)?;
    let mut perm = Permutation::identity(n);

    for i in 0..n {
        if pivot {
            // whole-row swap: stored multipliers follow their row
            let row = pivot_row(a, i);
            if row != i {
                swap_rows(a, row, i);
                perm.swap(row, i);
            }
        }

        let p = a[[i, i]];
        if p.is_zero_pivot() {
            return Err(LinsolveError::SingularMatrix { step: i });
        }

        for j in (i + 1)..n {
            let mult = a[[j, i]] / p;
            a[[j, i]] = mult;
            if mult != R::zero() {
                sub_scaled_row(a, j, i, i + 1, mult);
            }
        }
    }

    Ok(perm)
}

/// Compute the compact LU factorization of a copy of `a`
pub fn lu_factorize<R: Real>(a: &Array2<R>, pivot: bool) -> Result<LuFactorization<R>> {
    let mut lu = a.clone();
    let perm = lu_factorize_in_place(&mut lu, pivot)?;
    let n = lu.nrows();
    log::debug!("LU factorized a {n}x{n} matrix (pivot = {pivot})");
    Ok(LuFactorization { lu, perm, n })
}

/// Solve Ax = b from a compact LU store and its permutation
pub fn lu_solve<R: Real>(lu: &Array2<R>, perm: &Permutation, b: &Array1<R>) -> Result<Array1<R>> {
    let n = square_dim(lu)?;
    LinsolveError::check_len(n, perm.len())?;
    LinsolveError::check_len(n, b.len())?;

    let mut x = b.clone();
    permute_rows(&mut x, perm)?;
    forward_in_place(lu, &mut x, true)?;
    backward_in_place(lu, &mut x)?;
    Ok(x)
}
