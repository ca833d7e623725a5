use core::iter::FusedIterator;

use crate::explore::{Explore, Pair};

/// An infinite, expanding-frontier enumerator of offset pairs.
///
/// The nominal explorer, [`Explorer::new`], starts at frontier `0` with a
/// stride of `1` and yields every pair of non-negative integers exactly once,
/// grouped by frontier `max(a, b)`:
///
/// ```text
/// (0,0) | (0,1) (1,0) (1,1) | (0,2) (1,2) (2,0) (2,1) (2,2) | (0,3) ...
/// ```
///
/// Frontier `m` holds `2m + 1` pairs: the `m` pairs `(i, m)` with `i < m`,
/// then the `m + 1` pairs `(m, j)` with `j <= m`. Frontiers are fully
/// independent of one another, so an explorer built with
/// [`Explorer::with_stride`] that only visits frontiers `start, start +
/// stride, start + 2 * stride, ...` covers exactly its residue class of the
/// nominal sequence. See [`split_explore`] for the partitioned construction.
///
/// ## Features
/// - ❌ Not thread-safe
/// - ✅ Allocation free
///
/// ## Recommended When
/// - Each worker needs its own non-overlapping slice of the search space
///
/// An explorer never terminates and cannot be rewound: restarting the
/// sequence means building a new instance.
///
/// # Example
/// ```
/// use gitbrute::{Explorer, Pair};
///
/// let pairs: Vec<Pair> = Explorer::new().take(4).collect();
/// assert_eq!(
///     pairs,
///     [Pair::new(0, 0), Pair::new(0, 1), Pair::new(1, 0), Pair::new(1, 1)]
/// );
/// ```
///
/// [`split_explore`]: crate::split_explore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explorer {
    max: u64,
    i: u64,
    j: u64,
    stride: u64,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Explorer {
    /// Creates the nominal explorer: frontier `0`, stride `1`.
    pub const fn new() -> Self {
        Self::with_stride(0, 1)
    }

    /// Creates an explorer whose first frontier is `start` and which advances
    /// by `stride` each time a frontier is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero, since the explorer would never leave its
    /// first frontier.
    pub const fn with_stride(start: u64, stride: u64) -> Self {
        assert!(stride > 0, "stride must be greater than 0");
        Self {
            max: start,
            i: 0,
            j: 0,
            stride,
        }
    }

    /// Returns the frontier the next pair is drawn from (or the one just
    /// exhausted, if the next call advances).
    pub const fn frontier(&self) -> u64 {
        self.max
    }

    /// Returns the amount the frontier advances by.
    pub const fn stride(&self) -> u64 {
        self.stride
    }

    /// Returns the next pair and advances the cursor.
    #[inline]
    pub fn next_pair(&mut self) -> Pair {
        if self.i >= self.max && self.j > self.max {
            self.i = 0;
            self.j = 0;
            self.max += self.stride;
        }
        if self.i < self.max {
            let pair = Pair::new(self.i, self.max);
            self.i += 1;
            return pair;
        }
        // i == max, so j <= max
        let pair = Pair::new(self.max, self.j);
        self.j += 1;
        pair
    }
}

impl Explore for Explorer {
    fn next_pair(&mut self) -> Pair {
        self.next_pair()
    }
}

impl Iterator for Explorer {
    type Item = Pair;

    #[inline]
    fn next(&mut self) -> Option<Pair> {
        Some(self.next_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Explorer {}
