//! Lazy iterator over k-element subsets of `0..n`.
//!
//! Subsets are produced as strictly increasing index vectors in lexicographic
//! order. The iterator keeps a single index stack and advances it in place, so
//! no recursion is needed.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::combinations::Combinations;
//!
//! let subsets: Vec<_> = Combinations::new(4, 2).collect();
//! assert_eq!(subsets.len(), 6);
//! assert_eq!(subsets[0], vec![0, 1]);
//! assert_eq!(subsets[5], vec![2, 3]);
//! ```

/// An iterator over all `k`-subsets of `0..n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    /// Current subset; `None` once exhausted
    indices: Option<Vec<usize>>,
}

impl Combinations {
    /// Creates an iterator over the `k`-subsets of `0..n`.
    ///
    /// `k = 0` yields the empty subset once; `k > n` yields nothing.
    pub fn new(n: usize, k: usize) -> Self {
        let indices = if k <= n { Some((0..k).collect()) } else { None };
        Self { n, indices }
    }

    /// Moves `indices` to the next subset in lexicographic order.
    /// Returns false when `indices` was the last one.
    fn advance(n: usize, indices: &mut [usize]) -> bool {
        let k = indices.len();
        // Rightmost position that can still move right
        let Some(pos) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
            return false;
        };
        indices[pos] += 1;
        for i in pos + 1..k {
            indices[i] = indices[i - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.indices.take()?;
        let mut following = current.clone();
        if Self::advance(self.n, &mut following) {
            self.indices = Some(following);
        }
        Some(current)
    }
}

/// Binomial coefficient `n choose k`, saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    let mut acc: u64 = 1;
    for i in 0..k {
        // acc * (n - i) is divisible by (i + 1) at every step
        acc = match acc.checked_mul(n - i) {
            Some(v) => v / (i + 1),
            None => return u64::MAX,
        };
    }
    acc
}
