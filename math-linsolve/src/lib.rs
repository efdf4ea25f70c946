//! Dense linear solvers
//!
//! This crate provides direct and stationary iterative solvers for dense systems
//! `A·x = b`, along with the matrix primitives and stop conditions they are built on.
//!
//! # Features
//!
//! - **Direct Solvers**: Gauss-Jordan elimination, compact LU, tridiagonal LU,
//!   all with optional partial pivoting
//! - **Iterative Solvers**: Jacobi, Gauss-Seidel, SOR
//! - **Preconditioners**: Jacobi scaling, with or without pivoting
//! - **Stop Conditions**: absolute/relative error and iteration ceilings, or any closure
//! - **Generic Scalar Types**: Works with f64 and f32
//!
//! # Example
//!
//! ```
//! use math_linsolve::{array_stop_at, gauss_seidel, gauss_solve};
//! use ndarray::array;
//!
//! let a = array![[4.0_f64, 1.0], [1.0, 3.0]];
//! let b = array![1.0_f64, 2.0];
//!
//! let direct = gauss_solve(&a, &b, true)?;
//! let iterative = gauss_seidel(&a, &b, None, &array_stop_at(1e-12, 0.0, 100))?;
//! assert!(iterative.converged);
//! assert!((direct[0] - iterative.x[0]).abs() < 1e-10);
//! # Ok::<(), math_linsolve::LinsolveError>(())
//! ```

pub mod direct;
pub mod error;
pub mod iterative;
pub mod matrix;
pub mod preconditioners;
pub mod stop;
pub mod traits;
pub mod vector_ops;

// Re-export main types
pub use error::{LinsolveError, Result};
pub use matrix::{Permutation, is_diagonally_dominant};
pub use stop::{ArrayStopAt, StopAt, StopCriteria, StopReason, array_stop_at, stop_at};
pub use traits::{Real, StopCondition, SystemPreconditioner};

// Re-export direct solvers
pub use direct::{
    Inverse, LuFactorization, TridiagonalLu, TridiagonalMatrix, gauss_solve, gauss_solve_multi,
    invert, lu_factorize, lu_solve,
};

// Re-export iterative solvers
pub use iterative::{IterativeSolution, gauss_seidel, jacobi, jacobi_preconditioned, sor};

// Re-export preconditioners
pub use preconditioners::{JacobiPreconditioner, PreconditionedSystem, jacobi_precondition};
