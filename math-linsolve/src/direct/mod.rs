//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers, all O(n³) except the
//! tridiagonal one:
//! - [`gauss_solve`]: Gauss-Jordan elimination, optionally with partial pivoting
//! - [`invert`]: matrix inverse through the same elimination
//! - [`lu_factorize`] / [`lu_solve`]: compact LU decomposition and substitution
//! - [`TridiagonalMatrix`]: O(n) factorization for tridiagonal systems
//!
//! Every copying entry point has an `*_in_place` counterpart that overwrites its
//! argument instead of allocating a working copy.

mod gauss;
mod lu;
mod substitution;
mod tridiagonal;

pub use gauss::{
    Inverse, eliminate, eliminate_in_place, gauss_solve, gauss_solve_multi, invert,
};
pub use lu::{LuFactorization, lu_factorize, lu_factorize_in_place, lu_solve};
pub use substitution::{solve_factors, solve_lower_triangular, solve_upper_triangular};
pub use tridiagonal::{TridiagonalLu, TridiagonalMatrix};

use crate::traits::Real;
use ndarray::{Array2, s};

/// Row `r >= col` holding the largest `|a[r, col]|`; the first one wins on ties
pub(crate) fn pivot_row<R: Real>(a: &Array2<R>, col: usize) -> usize {
    let mut best = col;
    let mut best_val = a[[col, col]].abs();
    for r in (col + 1)..a.nrows() {
        let val = a[[r, col]].abs();
        if val > best_val {
            best_val = val;
            best = r;
        }
    }
    best
}

/// `m[target, from..] -= factor * m[source, from..]`
///
/// `target` and `source` must differ.
pub(crate) fn sub_scaled_row<R: Real>(
    m: &mut Array2<R>,
    target: usize,
    source: usize,
    from: usize,
    factor: R,
) {
    let (src, mut dst) = m.multi_slice_mut((s![source, from..], s![target, from..]));
    dst.scaled_add(-factor, &src);
}
