//! Preconditioners for iterative solvers
//!
//! A preconditioner turns `A·x = b` into the equivalent `M^(-1)·A·x = M^(-1)·b`, where
//! `M` is cheap to invert and `M^(-1)·A` is better conditioned than `A` alone.
//!
//! # Available Preconditioners
//!
//! - **JacobiPreconditioner**: diagonal scaling, optionally after partial pivoting

mod jacobi;

pub use jacobi::{JacobiPreconditioner, jacobi_precondition, jacobi_precondition_in_place};

use crate::matrix::Permutation;
use crate::traits::Real;
use ndarray::{Array1, Array2};

/// A system transformed by a [`SystemPreconditioner`](crate::SystemPreconditioner).
///
/// Its solution is the solution of the original system; only the equations were
/// reordered (by `perm`) and rescaled.
#[derive(Debug, Clone, PartialEq)]
pub struct PreconditionedSystem<R: Real> {
    /// Preconditioned coefficient matrix
    pub a: Array2<R>,
    /// Preconditioned right-hand side
    pub b: Array1<R>,
    /// Row `i` of the system is equation `perm[i]` of the original
    pub perm: Permutation,
}
