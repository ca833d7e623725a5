/// A pair of non-negative offsets, in seconds behind the reference timestamp,
/// to try for one candidate commit.
///
/// `a` offsets the committer date and `b` offsets the author date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pair {
    /// Seconds behind the reference timestamp for the committer date.
    pub a: u64,
    /// Seconds behind the reference timestamp for the author date.
    pub b: u64,
}

impl Pair {
    /// Creates a new pair from its two offsets.
    pub const fn new(a: u64, b: u64) -> Self {
        Self { a, b }
    }

    /// Returns the frontier this pair belongs to, `max(a, b)`.
    pub const fn frontier(&self) -> u64 {
        if self.a > self.b { self.a } else { self.b }
    }
}

impl From<(u64, u64)> for Pair {
    fn from((a, b): (u64, u64)) -> Self {
        Self::new(a, b)
    }
}

/// A minimal interface for producing the next [`Pair`] to search.
///
/// Implementations are single-owner cursors: they hold mutable state and are
/// never shared between threads. Each worker owns exactly one.
pub trait Explore {
    /// Returns the next pair in this explorer's order.
    fn next_pair(&mut self) -> Pair;
}
