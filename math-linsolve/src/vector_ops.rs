//! Vector kernels shared by the solvers
//!
//! Norms and residuals used to report solution quality.

use crate::traits::Real;
use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};

/// Compute vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
pub fn vector_norm<R, S>(x: &ArrayBase<S, Ix1>) -> R
where
    R: Real,
    S: Data<Elem = R>,
{
    x.iter().fold(R::zero(), |acc, &xi| acc + xi * xi).sqrt()
}

/// Compute max-norm: ||x||_∞ = max |x_i|
#[inline]
pub fn max_norm<R, S>(x: &ArrayBase<S, Ix1>) -> R
where
    R: Real,
    S: Data<Elem = R>,
{
    x.iter().fold(R::zero(), |acc, &xi| acc.max(xi.abs()))
}

/// Residual r = b - A·x
pub fn residual<R, SA, SX, SB>(
    a: &ArrayBase<SA, Ix2>,
    x: &ArrayBase<SX, Ix1>,
    b: &ArrayBase<SB, Ix1>,
) -> Array1<R>
where
    R: Real,
    SA: Data<Elem = R>,
    SX: Data<Elem = R>,
    SB: Data<Elem = R>,
{
    b - &a.dot(x)
}

/// Relative residual ||b - A·x|| / ||b||, or the absolute residual when b = 0
pub fn relative_residual<R, SA, SX, SB>(
    a: &ArrayBase<SA, Ix2>,
    x: &ArrayBase<SX, Ix1>,
    b: &ArrayBase<SB, Ix1>,
) -> R
where
    R: Real,
    SA: Data<Elem = R>,
    SX: Data<Elem = R>,
    SB: Data<Elem = R>,
{
    let r_norm = vector_norm(&residual(a, x, b));
    let b_norm = vector_norm(b);
    if b_norm > R::zero() {
        r_norm / b_norm
    } else {
        r_norm
    }
}
