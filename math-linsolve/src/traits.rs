//! Core traits for the linear solvers
//!
//! This module defines the abstractions shared by the direct and iterative solvers:
//! - [`Real`]: Trait for the real scalar types a system can be built from
//! - [`StopCondition`]: Trait deciding when an iteration should stop
//! - [`SystemPreconditioner`]: Trait for transformations of `(A, b)` applied before iterating

use crate::error::Result;
use crate::preconditioners::PreconditionedSystem;
use crate::stop::StopReason;
use ndarray::{Array1, Array2, ScalarOperand};
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for real scalar types that can be used in the solvers.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most problems)
/// - `f32` (for memory-constrained applications)
pub trait Real:
    Float
    + NumAssign
    + FromPrimitive
    + ToPrimitive
    + ScalarOperand
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Whether this value cannot be used as a pivot.
    ///
    /// Pivots are compared against exact zero; non-finite values are rejected too.
    fn is_zero_pivot(&self) -> bool;

    /// Convert a literal constant, used for defaults and thresholds
    fn from_literal(v: f64) -> Self;
}

impl Real for f64 {
    #[inline]
    fn is_zero_pivot(&self) -> bool {
        *self == 0.0 || !self.is_finite()
    }

    #[inline]
    fn from_literal(v: f64) -> Self {
        v
    }
}

impl Real for f32 {
    #[inline]
    fn is_zero_pivot(&self) -> bool {
        *self == 0.0 || !self.is_finite()
    }

    #[inline]
    fn from_literal(v: f64) -> Self {
        v as f32
    }
}

/// Trait for iteration stop conditions.
///
/// A stop condition looks at the iterate before and after a step together with
/// the number of steps already taken. It is the only thing that ends the loop of
/// an iterative solver, so every implementation must stop after a finite number
/// of iterations.
///
/// Closures `Fn(&V, &V, usize) -> bool` are stop conditions; a `true` from a
/// closure is reported as [`StopReason::Custom`].
pub trait StopCondition<V: ?Sized> {
    /// Return why iteration should stop, or `None` to keep iterating
    fn check(&self, before: &V, after: &V, iteration: usize) -> Option<StopReason>;

    /// Whether iteration should stop
    fn should_stop(&self, before: &V, after: &V, iteration: usize) -> bool {
        self.check(before, after, iteration).is_some()
    }
}

impl<V: ?Sized, F> StopCondition<V> for F
where
    F: Fn(&V, &V, usize) -> bool,
{
    fn check(&self, before: &V, after: &V, iteration: usize) -> Option<StopReason> {
        self(before, after, iteration).then_some(StopReason::Custom)
    }
}

/// Trait for preconditioners applied to a whole system before iterating.
///
/// Unlike a Krylov preconditioner that approximates `A^(-1)` at every step, these
/// transform `(A, b)` once into an equivalent system with better convergence
/// properties. The solution of the transformed system is the solution of the
/// original one.
pub trait SystemPreconditioner<R: Real> {
    /// Transform the system without touching the inputs
    fn precondition(&self, a: &Array2<R>, b: &Array1<R>) -> Result<PreconditionedSystem<R>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pivot() {
        assert!(0.0_f64.is_zero_pivot());
        assert!((-0.0_f64).is_zero_pivot());
        assert!(f64::NAN.is_zero_pivot());
        assert!(f32::INFINITY.is_zero_pivot());
        assert!(!1e-300_f64.is_zero_pivot());
        assert!(!(-2.0_f32).is_zero_pivot());
    }

    #[test]
    fn test_closure_stop_condition() {
        let stop = |_: &f64, after: &f64, _: usize| *after > 10.0;
        assert_eq!(stop.check(&0.0, &11.0, 3), Some(StopReason::Custom));
        assert!(!stop.should_stop(&0.0, &1.0, 3));
    }
}
