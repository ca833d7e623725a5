use crate::{GitDate, Pair};

/// The author and committer dates that give the commit its target prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    pub author: GitDate,
    pub committer: GitDate,
}

impl Solution {
    /// Pairs the author and committer seconds with their timezone offsets.
    pub fn new(author: i64, author_tz: &str, committer: i64, committer_tz: &str) -> Self {
        Self {
            author: GitDate::new(author, author_tz),
            committer: GitDate::new(committer, committer_tz),
        }
    }
}

/// The outcome of a search: the winning solution plus how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    /// Dates to apply to the commit.
    pub solution: Solution,
    /// Offsets that produced the solution.
    pub pair: Pair,
    /// Index of the worker that found it.
    pub worker: usize,
    /// The resulting commit hash.
    pub hash: String,
    /// Candidates checked across all workers.
    pub checked: u64,
}
