//! Tridiagonal systems
//!
//! A tridiagonal matrix is stored as its three diagonals:
//!
//! ```text
//! d_0 u_0
//! l_0 d_1 u_1
//!     l_1 d_2 u_2
//!         l_2 d_3
//! ```
//!
//! It factorizes in O(n) as `(L + D)·(I + U)` where `L` and `U` are non-zero only on
//! the sub- and super-diagonal (Crout form of the Thomas algorithm).

use crate::error::{LinsolveError, Result};
use crate::traits::Real;
use ndarray::{Array1, Array2};

/// Tridiagonal matrix in diagonal storage
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalMatrix<R: Real> {
    lower: Array1<R>,
    diagonal: Array1<R>,
    upper: Array1<R>,
}

impl<R: Real> TridiagonalMatrix<R> {
    /// Build from sub-diagonal (`n-1`), diagonal (`n`) and super-diagonal (`n-1`)
    pub fn new(lower: Array1<R>, diagonal: Array1<R>, upper: Array1<R>) -> Result<Self> {
        let off = diagonal.len().saturating_sub(1);
        LinsolveError::check_len(off, lower.len())?;
        LinsolveError::check_len(off, upper.len())?;
        Ok(Self {
            lower,
            diagonal,
            upper,
        })
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.diagonal.len()
    }

    /// Dense copy
    pub fn to_dense(&self) -> Array2<R> {
        let n = self.dim();
        let mut dense = Array2::zeros((n, n));
        for i in 0..n {
            dense[[i, i]] = self.diagonal[i];
            if i + 1 < n {
                dense[[i + 1, i]] = self.lower[i];
                dense[[i, i + 1]] = self.upper[i];
            }
        }
        dense
    }

    /// y = A * x
    pub fn matvec(&self, x: &Array1<R>) -> Result<Array1<R>> {
        let n = self.dim();
        LinsolveError::check_len(n, x.len())?;
        Ok(Array1::from_shape_fn(n, |i| {
            let mut y = self.diagonal[i] * x[i];
            if i > 0 {
                y += self.lower[i - 1] * x[i - 1];
            }
            if i + 1 < n {
                y += self.upper[i] * x[i + 1];
            }
            y
        }))
    }

    /// Factorize as `(L + D)·(I + U)`
    pub fn factorize(&self) -> Result<TridiagonalLu<R>> {
        let n = self.dim();
        let mut diagonal = Array1::<R>::zeros(n);
        let mut upper = Array1::<R>::zeros(n.saturating_sub(1));

        for i in 0..n {
            let d = if i == 0 {
                self.diagonal[0]
            } else {
                self.diagonal[i] - self.lower[i - 1] * upper[i - 1]
            };
            if d.is_zero_pivot() {
                return Err(LinsolveError::SingularMatrix { step: i });
            }
            diagonal[i] = d;
            if i + 1 < n {
                upper[i] = self.upper[i] / d;
            }
        }

        Ok(TridiagonalLu {
            lower: self.lower.clone(),
            diagonal,
            upper,
        })
    }

    /// Solve A x = b
    pub fn solve(&self, b: &Array1<R>) -> Result<Array1<R>> {
        self.factorize()?.solve(b)
    }
}

/// Factors of a [`TridiagonalMatrix`]
#[derive(Debug, Clone)]
pub struct TridiagonalLu<R: Real> {
    /// Sub-diagonal of `L + D` (the original sub-diagonal)
    pub lower: Array1<R>,
    /// Diagonal of `L + D`
    pub diagonal: Array1<R>,
    /// Super-diagonal of `I + U`
    pub upper: Array1<R>,
}

impl<R: Real> TridiagonalLu<R> {
    /// Solve A x = b with the precomputed factors
    pub fn solve(&self, b: &Array1<R>) -> Result<Array1<R>> {
        let n = self.diagonal.len();
        let off = n.saturating_sub(1);
        LinsolveError::check_len(off, self.lower.len())?;
        LinsolveError::check_len(off, self.upper.len())?;
        LinsolveError::check_len(n, b.len())?;
        if let Some(step) = self.diagonal.iter().position(|d| d.is_zero_pivot()) {
            return Err(LinsolveError::SingularMatrix { step });
        }

        let mut x = Array1::<R>::zeros(n);
        for i in 0..n {
            let carry = if i == 0 {
                R::zero()
            } else {
                self.lower[i - 1] * x[i - 1]
            };
            x[i] = (b[i] - carry) / self.diagonal[i];
        }
        for i in (0..n.saturating_sub(1)).rev() {
            let next = x[i + 1];
            x[i] -= self.upper[i] * next;
        }
        Ok(x)
    }
}
