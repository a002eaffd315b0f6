//! Lazy k-subset enumeration.
//!
//! Subsets are produced in lexicographic order of source-index tuples: start
//! with the first `k` items, then repeatedly advance the rightmost index that
//! can still move and reset everything to its right to the smallest valid
//! continuation. Live state is the `k` indices and nothing else.
//!
//! ```
//! use poker_equity::combinations::Combinations;
//!
//! let letters = ['a', 'b', 'c', 'd'];
//! let pairs: Vec<Vec<char>> = Combinations::new(&letters, 2).collect();
//! assert_eq!(pairs.len(), 6);
//! assert_eq!(pairs[0], vec!['a', 'b']);
//! assert_eq!(pairs[5], vec!['c', 'd']);
//! ```

mod stream;

pub use stream::CombinationStream;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CombinationError {
    #[error("cannot choose {k} items from {n}")]
    TooLarge { n: usize, k: usize },
    #[error("failed to spawn combination producer: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Binomial coefficient C(n, k). Zero when `k > n`; saturates at `u64::MAX`.
///
/// ```
/// use poker_equity::combinations::binomial;
///
/// assert_eq!(binomial(45, 5), 1_221_759);
/// assert_eq!(binomial(3, 4), 0);
/// ```
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // multiply before dividing: every prefix product is itself a binomial
    let mut acc: u128 = 1;
    for i in 0..k {
        match acc.checked_mul((n - i) as u128) {
            Some(p) => acc = p / (i as u128 + 1),
            None => return u64::MAX,
        }
    }
    u64::try_from(acc).unwrap_or(u64::MAX)
}

/// One-shot lazy iterator over every `k`-subset of a source slice.
///
/// Each subset keeps the relative order of the source. Yielded vectors are
/// independent copies; [`Combinations::fill_next`] writes into a caller buffer
/// instead for allocation-free loops.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    source: &'a [T],
    indices: Vec<usize>,
    /// Positions below this never move; 1 when the first index is pinned.
    floor: usize,
    started: bool,
    remaining: u64,
}

impl<'a, T: Copy> Combinations<'a, T> {
    /// All `k`-subsets of `source`. Empty (not an error) when `k > source.len()`.
    pub fn new(source: &'a [T], k: usize) -> Self {
        let n = source.len();
        if k > n {
            return Self::exhausted(source);
        }
        Self { source, indices: (0..k).collect(), floor: 0, started: false, remaining: binomial(n, k) }
    }

    /// Like [`Combinations::new`] but rejects `k > source.len()`.
    pub fn strict(source: &'a [T], k: usize) -> Result<Self, CombinationError> {
        if k > source.len() {
            return Err(CombinationError::TooLarge { n: source.len(), k });
        }
        Ok(Self::new(source, k))
    }

    /// The subsets whose smallest source index is exactly `first`, in the same
    /// lexicographic sub-order. Partitions for `first` in `0..=n-k` are
    /// disjoint and together cover [`Combinations::new`].
    pub fn partition(source: &'a [T], k: usize, first: usize) -> Self {
        let n = source.len();
        if k == 0 || first + k > n {
            return Self::exhausted(source);
        }
        Self {
            source,
            indices: (first..first + k).collect(),
            floor: 1,
            started: false,
            remaining: binomial(n - first - 1, k - 1),
        }
    }

    fn exhausted(source: &'a [T]) -> Self {
        Self { source, indices: Vec::new(), floor: 0, started: true, remaining: 0 }
    }

    /// Subset size.
    pub fn k(&self) -> usize {
        self.indices.len()
    }

    /// Number of subsets not yet produced.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Write the next subset into `out[..k]`. Returns `false` once exhausted.
    ///
    /// # Panics
    /// If `out` is shorter than `k`.
    pub fn fill_next(&mut self, out: &mut [T]) -> bool {
        if !self.step() {
            return false;
        }
        for (slot, &i) in out[..self.indices.len()].iter_mut().zip(&self.indices) {
            *slot = self.source[i];
        }
        true
    }

    /// Move to the next index tuple; `false` once exhausted.
    fn step(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        if self.started {
            self.advance();
        } else {
            self.started = true;
        }
        self.remaining -= 1;
        true
    }

    fn advance(&mut self) {
        let n = self.source.len();
        let k = self.indices.len();
        let mut i = k;
        while i > self.floor {
            i -= 1;
            if self.indices[i] < i + n - k {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return;
            }
        }
        debug_assert!(false, "advance called on an exhausted enumeration");
    }
}

impl<T: Copy> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.step() {
            return None;
        }
        Some(self.indices.iter().map(|&i| self.source[i]).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl<T: Copy> ExactSizeIterator for Combinations<'_, T> {}

impl<T: Copy> std::iter::FusedIterator for Combinations<'_, T> {}

/// Split the `k`-subsets of `source` into disjoint partitions keyed by the
/// first chosen index, suitable for independent workers.
///
/// A `k` of zero yields a single partition holding the empty subset.
pub fn partitions<T: Copy>(source: &[T], k: usize) -> Vec<Combinations<'_, T>> {
    if k == 0 {
        return vec![Combinations::new(source, 0)];
    }
    let firsts = (source.len() + 1).saturating_sub(k);
    (0..firsts).map(|first| Combinations::partition(source, k, first)).collect()
}
