//! Row permutations produced by pivoting

use crate::error::{LinsolveError, Result};
use std::ops::Index;

/// An ordering of `n` row indices.
///
/// Entry `i` is the original index of the row that now sits at position `i`, so
/// applying a permutation to a matrix `M` builds `P·M` with
/// `(P·M)[i, :] = M[perm[i], :]`. A `Permutation` is always a bijection over `0..n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// The identity ordering `0, 1, ..., n-1`
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
        }
    }

    /// Build from raw indices, checking that they form a bijection over `0..n`
    pub fn from_indices(indices: Vec<usize>) -> Result<Self> {
        let n = indices.len();
        let mut seen = vec![false; n];
        for &i in &indices {
            if i >= n || seen[i] {
                return Err(LinsolveError::InvalidPermutation { indices });
            }
            seen[i] = true;
        }
        Ok(Self { indices })
    }

    /// Number of indices
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the permutation is over zero rows
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Exchange positions `i` and `j`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.indices.swap(i, j);
    }

    /// Whether every index is in place
    pub fn is_identity(&self) -> bool {
        self.indices.iter().enumerate().all(|(i, &p)| i == p)
    }

    /// The inverse ordering: `inverse[perm[i]] = i`
    pub fn inverse(&self) -> Self {
        let mut inverse = vec![0; self.indices.len()];
        for (i, &p) in self.indices.iter().enumerate() {
            inverse[p] = i;
        }
        Self { indices: inverse }
    }

    /// Parity of the permutation: `1` for an even number of transpositions, `-1` otherwise
    pub fn sign(&self) -> i32 {
        let mut visited = vec![false; self.indices.len()];
        let mut transpositions = 0;
        for start in 0..self.indices.len() {
            let mut cycle_len = 0;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = self.indices[i];
                cycle_len += 1;
            }
            if cycle_len > 0 {
                transpositions += cycle_len - 1;
            }
        }
        if transpositions % 2 == 0 { 1 } else { -1 }
    }

    /// Raw indices
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Consume into raw indices
    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.indices[i]
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = LinsolveError;

    fn try_from(indices: Vec<usize>) -> Result<Self> {
        Self::from_indices(indices)
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize] {
        &self.indices
    }
}
