//! Iteration stop conditions
//!
//! Every iterative method needs a rule deciding when to stop. The rules offered here
//! compare the iterate before and after a step:
//!
//! - **Absolute error**: stop once `|after - before| < absolute_error`
//! - **Relative error**: stop once `|after - before| < relative_error * |before|`
//! - **Iteration ceiling**: stop once `max_iterations` steps were taken, so a
//!   diverging method still returns
//!
//! [`StopAt`] applies the rules to scalars (root finders, ODE step control) and
//! [`ArrayStopAt`] applies them element-wise to vectors and matrices, where every
//! element has to satisfy a rule for it to fire.
//!
//! # Example
//!
//! ```
//! use math_linsolve::{StopCondition, StopCriteria};
//!
//! let stop = StopCriteria::new(1e-9, 0.0, 50).scalar();
//! assert!(!stop.should_stop(&1.0, &1.0, 0));
//! assert!(stop.should_stop(&1.0, &1.0, 1));
//! ```

use crate::traits::{Real, StopCondition};
use ndarray::{ArrayBase, Data, Dimension, Zip};

/// Why an iteration stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The step was smaller than the absolute error limit
    AbsoluteError,
    /// The step was smaller than the relative error limit
    RelativeError,
    /// The iteration ceiling was reached
    IterationLimit,
    /// A user-supplied condition fired
    Custom,
}

impl StopReason {
    /// Whether this reason means the iterate settled rather than running out of steps
    pub fn is_converged(self) -> bool {
        !matches!(self, StopReason::IterationLimit)
    }
}

/// Thresholds shared by the scalar and array stop conditions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopCriteria<R> {
    /// Absolute error limit (0 disables the rule)
    pub absolute_error: R,
    /// Relative error limit (0 disables the rule)
    pub relative_error: R,
    /// Maximum number of iterations
    pub max_iterations: usize,
}

impl<R: Real> Default for StopCriteria<R> {
    fn default() -> Self {
        Self {
            absolute_error: R::zero(),
            relative_error: R::from_literal(2.0_f64.powi(-32)),
            max_iterations: 1000,
        }
    }
}

impl<R: Real> StopCriteria<R> {
    /// Create criteria from all three limits
    pub fn new(absolute_error: R, relative_error: R, max_iterations: usize) -> Self {
        Self {
            absolute_error,
            relative_error,
            max_iterations,
        }
    }

    /// Replace the absolute error limit
    pub fn with_absolute_error(self, absolute_error: R) -> Self {
        Self {
            absolute_error,
            ..self
        }
    }

    /// Replace the relative error limit
    pub fn with_relative_error(self, relative_error: R) -> Self {
        Self {
            relative_error,
            ..self
        }
    }

    /// Replace the iteration ceiling
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Stop condition over scalars
    pub fn scalar(self) -> StopAt<R> {
        StopAt { criteria: self }
    }

    /// Stop condition over vectors and matrices
    pub fn array(self) -> ArrayStopAt<R> {
        ArrayStopAt { criteria: self }
    }

    fn decide(
        &self,
        iteration: usize,
        absolute: impl FnOnce(R) -> bool,
        relative: impl FnOnce(R) -> bool,
    ) -> Option<StopReason> {
        if iteration == 0 {
            return None;
        }
        if absolute(self.absolute_error) {
            return Some(StopReason::AbsoluteError);
        }
        if relative(self.relative_error) {
            return Some(StopReason::RelativeError);
        }
        if iteration >= self.max_iterations {
            return Some(StopReason::IterationLimit);
        }
        None
    }
}

/// Scalar stop condition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAt<R> {
    /// Thresholds
    pub criteria: StopCriteria<R>,
}

impl<R: Real> StopCondition<R> for StopAt<R> {
    fn check(&self, before: &R, after: &R, iteration: usize) -> Option<StopReason> {
        let step = (*after - *before).abs();
        self.criteria.decide(
            iteration,
            |limit| step < limit,
            |limit| step < limit * before.abs(),
        )
    }
}

/// Element-wise stop condition over arrays of any dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayStopAt<R> {
    /// Thresholds
    pub criteria: StopCriteria<R>,
}

impl<R, S, D> StopCondition<ArrayBase<S, D>> for ArrayStopAt<R>
where
    R: Real,
    S: Data<Elem = R>,
    D: Dimension,
{
    fn check(
        &self,
        before: &ArrayBase<S, D>,
        after: &ArrayBase<S, D>,
        iteration: usize,
    ) -> Option<StopReason> {
        self.criteria.decide(
            iteration,
            |limit| Zip::from(before).and(after).all(|&b, &a| (a - b).abs() < limit),
            |limit| {
                Zip::from(before)
                    .and(after)
                    .all(|&b, &a| (a - b).abs() < (limit * b).abs())
            },
        )
    }
}

/// Scalar stop condition from explicit limits
pub fn stop_at<R: Real>(absolute_error: R, relative_error: R, max_iterations: usize) -> StopAt<R> {
    StopCriteria::new(absolute_error, relative_error, max_iterations).scalar()
}

/// Array stop condition from explicit limits
pub fn array_stop_at<R: Real>(
    absolute_error: R,
    relative_error: R,
    max_iterations: usize,
) -> ArrayStopAt<R> {
    StopCriteria::new(absolute_error, relative_error, max_iterations).array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_never_stops_before_first_step() {
        let stop = stop_at(1.0_f64, 0.0, 0);
        assert!(!stop.should_stop(&5.0, &5.0, 0));
        assert_eq!(stop.check(&5.0, &9.0, 1), Some(StopReason::IterationLimit));
    }

    #[test]
    fn test_zero_ceiling() {
        let stop = StopCriteria::<f64>::default().with_max_iterations(0).scalar();
        assert!(!stop.should_stop(&0.0, &1.0, 0));
        assert!(stop.should_stop(&0.0, &1.0, 1));
    }

    #[test]
    fn test_scalar_order() {
        let stop = stop_at(1e-3_f64, 1e-2, 100);
        assert_eq!(stop.check(&1.0, &1.0005, 1), Some(StopReason::AbsoluteError));
        assert_eq!(stop.check(&1.0, &1.005, 1), Some(StopReason::RelativeError));
        assert_eq!(stop.check(&1.0, &1.5, 1), None);
        assert_eq!(stop.check(&1.0, &1.5, 100), Some(StopReason::IterationLimit));
    }

    #[test]
    fn test_default_relative_limit() {
        let stop = StopCriteria::<f64>::default().scalar();
        assert_eq!(stop.check(&1e6, &1e6, 1), Some(StopReason::RelativeError));
        assert_eq!(stop.check(&1.0, &(1.0 + 1e-6), 1), None);
    }

    #[test]
    fn test_array_requires_every_element() {
        let stop = array_stop_at(1e-6_f64, 0.0, 10);
        let before = array![1.0, 2.0, 3.0];
        let close = array![1.0, 2.0 + 1e-8, 3.0];
        let far = array![1.0, 2.0, 3.1];

        assert_eq!(stop.check(&before, &close, 1), Some(StopReason::AbsoluteError));
        assert_eq!(stop.check(&before, &far, 1), None);
        assert_eq!(stop.check(&before, &far, 10), Some(StopReason::IterationLimit));
    }

    #[test]
    fn test_array_relative_on_matrix() {
        let stop = array_stop_at(0.0_f64, 1e-3, 10);
        let before = array![[100.0, -200.0], [300.0, 400.0]];
        let after = array![[100.05, -200.1], [300.2, 400.0]];
        assert_eq!(stop.check(&before, &after, 2), Some(StopReason::RelativeError));

        // a zero entry can never satisfy a relative rule
        let before = array![[0.0, 1.0]];
        assert_eq!(stop.check(&before, &before, 2), None);
    }

    #[test]
    fn test_reason_convergence() {
        assert!(StopReason::AbsoluteError.is_converged());
        assert!(StopReason::Custom.is_converged());
        assert!(!StopReason::IterationLimit.is_converged());
    }
}
