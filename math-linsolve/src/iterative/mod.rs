//! Stationary iterative solvers for linear systems
//!
//! All methods split `A = L + D + U` and repeat a fixed-point step until the
//! supplied [`StopCondition`](crate::StopCondition) fires:
//! - [`jacobi`]: every component from the previous iterate
//! - [`jacobi_preconditioned`]: Jacobi on the unit-diagonal system, optionally pivoted
//! - [`gauss_seidel`]: forward sweep reusing freshly updated components
//! - [`sor`]: Gauss-Seidel step scaled by a relaxation factor

mod fixed_point;
mod gauss_seidel;
mod jacobi;

pub use fixed_point::IterativeSolution;
pub use gauss_seidel::{gauss_seidel, sor};
pub use jacobi::{jacobi, jacobi_preconditioned};
