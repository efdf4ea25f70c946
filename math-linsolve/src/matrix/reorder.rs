//! Row and column reordering primitives
//!
//! All operations mutate their argument in place and work along any axis of an
//! array of any dimension, so the same calls reorder matrices, right-hand side
//! vectors and blocks of right-hand sides.

use super::Permutation;
use crate::error::{LinsolveError, Result};
use ndarray::{ArrayBase, Axis, DataMut, RemoveAxis, Zip};
use std::ops::MulAssign;

/// Exchange the `i`-th and `j`-th subviews along `axis`
///
/// # Panics
///
/// Panics if `axis` or either index is out of bounds.
pub fn swap_axis<A, S, D>(m: &mut ArrayBase<S, D>, axis: Axis, i: usize, j: usize)
where
    S: DataMut<Elem = A>,
    D: RemoveAxis,
{
    let len = m.len_of(axis);
    assert!(
        i < len && j < len,
        "swap index out of bounds: ({i}, {j}) with length {len}"
    );
    if i == j {
        return;
    }
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let (mut head, mut tail) = m.view_mut().split_at(axis, hi);
    Zip::from(head.index_axis_mut(axis, lo))
        .and(tail.index_axis_mut(axis, 0))
        .for_each(std::mem::swap);
}

/// Exchange rows `i` and `j`
pub fn swap_rows<A, S, D>(m: &mut ArrayBase<S, D>, i: usize, j: usize)
where
    S: DataMut<Elem = A>,
    D: RemoveAxis,
{
    swap_axis(m, Axis(0), i, j);
}

/// Exchange columns `i` and `j`
pub fn swap_cols<A, S, D>(m: &mut ArrayBase<S, D>, i: usize, j: usize)
where
    S: DataMut<Elem = A>,
    D: RemoveAxis,
{
    swap_axis(m, Axis(1), i, j);
}

/// Reorder along `axis` so that position `i` receives the subview previously at `perm[i]`
pub fn permute_axis<A, S, D>(m: &mut ArrayBase<S, D>, axis: Axis, perm: &Permutation) -> Result<()>
where
    A: Clone,
    S: DataMut<Elem = A>,
    D: RemoveAxis,
{
    LinsolveError::check_len(m.len_of(axis), perm.len())?;
    let reordered = m.select(axis, perm.as_slice());
    m.assign(&reordered);
    Ok(())
}

/// Inverse of [`permute_axis`]: the subview at position `i` goes back to `perm[i]`
pub fn undo_permute_axis<A, S, D>(
    m: &mut ArrayBase<S, D>,
    axis: Axis,
    perm: &Permutation,
) -> Result<()>
where
    A: Clone,
    S: DataMut<Elem = A>,
    D: RemoveAxis,
{
    permute_axis(m, axis, &perm.inverse())
}

/// `M ← P·M`: row `i` becomes the original row `perm[i]`
pub fn permute_rows<A, S, D>(m: &mut ArrayBase<S, D>, perm: &Permutation) -> Result<()>
where
    A: Clone,
    S: DataMut<Elem = A>,
    D: RemoveAxis,
{
    permute_axis(m, Axis(0), perm)
}

/// `M ← Pᵀ·M`: undo [`permute_rows`]
pub fn undo_permute_rows<A, S, D>(m: &mut ArrayBase<S, D>, perm: &Permutation) -> Result<()>
where
    A: Clone,
    S: DataMut<Elem = A>,
    D: RemoveAxis,
{
    undo_permute_axis(m, Axis(0), perm)
}

/// `M ← M·Pᵀ`: column `i` becomes the original column `perm[i]`
pub fn permute_cols<A, S, D>(m: &mut ArrayBase<S, D>, perm: &Permutation) -> Result<()>
where
    A: Clone,
    S: DataMut<Elem = A>,
    D: RemoveAxis,
{
    permute_axis(m, Axis(1), perm)
}

/// `M ← M·P`: undo [`permute_cols`]
pub fn undo_permute_cols<A, S, D>(m: &mut ArrayBase<S, D>, perm: &Permutation) -> Result<()>
where
    A: Clone,
    S: DataMut<Elem = A>,
    D: RemoveAxis,
{
    undo_permute_axis(m, Axis(1), perm)
}

/// Multiply row `i` by `factors[i]`
pub fn scale_rows<A, S, D>(m: &mut ArrayBase<S, D>, factors: &[A]) -> Result<()>
where
    A: Copy + MulAssign,
    S: DataMut<Elem = A>,
    D: RemoveAxis,
{
    LinsolveError::check_len(m.len_of(Axis(0)), factors.len())?;
    for (mut row, &factor) in m.axis_iter_mut(Axis(0)).zip(factors) {
        row.map_inplace(|v| *v *= factor);
    }
    Ok(())
}
