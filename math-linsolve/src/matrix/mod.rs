//! Dense matrix primitives consumed by the solvers
//!
//! - [`Permutation`]: validated row ordering produced by pivoting
//! - Reordering: [`swap_rows`], [`permute_rows`], [`undo_permute_rows`] and their
//!   column and axis-generic counterparts
//! - [`scale_rows`]: per-row scalar multiply

mod permutation;
mod reorder;

pub use permutation::Permutation;
pub use reorder::{
    permute_axis, permute_cols, permute_rows, scale_rows, swap_axis, swap_cols, swap_rows,
    undo_permute_axis, undo_permute_cols, undo_permute_rows,
};

use crate::error::{LinsolveError, Result};
use crate::traits::Real;
use ndarray::{ArrayBase, Data, Ix2};

/// Check that `a` is square and return its dimension
pub(crate) fn square_dim<S: Data>(a: &ArrayBase<S, Ix2>) -> Result<usize> {
    let n = a.nrows();
    LinsolveError::check_len(n, a.ncols())?;
    Ok(n)
}

/// Whether every row satisfies `|a_ii| > Σ_{j≠i} |a_ij|`.
///
/// Strict diagonal dominance is sufficient (not necessary) for Jacobi and
/// Gauss-Seidel to converge. Non-square matrices are never dominant.
pub fn is_diagonally_dominant<R, S>(a: &ArrayBase<S, Ix2>) -> bool
where
    R: Real,
    S: Data<Elem = R>,
{
    if a.nrows() != a.ncols() {
        return false;
    }
    a.rows().into_iter().enumerate().all(|(i, row)| {
        let off_diagonal = row
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(R::zero(), |acc, (_, v)| acc + v.abs());
        row[i].abs() > off_diagonal
    })
}
