//! Upper-triangular pair enumeration.
//!
//! Unordered pairs `{i, j}` with `i < j` are listed exactly once, in
//! row-major order: `i` ascending, `j` ascending within each `i`. Every
//! condensed distance buffer in this workspace follows this order, and
//! [`condensed_index`] is its inverse, so callers can rebuild a square
//! matrix without re-deriving the convention.

/// Number of unordered pairs among `n` points.
pub fn n_pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Position of pair `{i, j}` (`i < j < n`) in the row-major upper-triangular
/// order.
pub fn condensed_index(n: usize, i: usize, j: usize) -> usize {
    debug_assert!(i < j && j < n);
    i * n - i * (i + 1) / 2 + (j - i - 1)
}

/// Yields `(i, j)` with `i < j` in row-major order.
pub fn pairs(n: usize) -> PairIter {
    PairIter {
        n,
        i: 0,
        j: 1,
        remaining: n_pairs(n),
    }
}

#[derive(Debug, Clone)]
pub struct PairIter {
    n: usize,
    i: usize,
    j: usize,
    remaining: usize,
}

impl Iterator for PairIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.remaining == 0 {
            return None;
        }
        let pair = (self.i, self.j);
        self.remaining -= 1;
        self.j += 1;
        if self.j == self.n {
            self.i += 1;
            self.j = self.i + 1;
        }
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PairIter {}
