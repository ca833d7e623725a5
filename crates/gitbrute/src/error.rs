//! Error types for the commit hash search.
//!
//! Every variant except [`Error::NoSolution`] is raised while the search is
//! being configured, before any worker starts. A running worker only ever
//! produces "keep going" or "match found", so a candidate that does not
//! match is a plain `false` and never an error.
//!
//! ## Error Cases
//! - `InvalidPrefix`: the target prefix contains a non-hex character.
//! - `PrefixTooLong`: the target prefix is longer than a SHA-1 hex digest.
//! - `NoWorkers`: the search was configured with zero workers.
//! - `MissingDate`: the `author` or `committer` header line is absent.
//! - `MalformedDate`: the header line exists but its date cannot be parsed.
//! - `NoSolution`: the worker pool drained without publishing a solution.

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `gitbrute` can produce.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The target prefix contains characters outside `[0-9a-fA-F]`.
    #[error("Prefix {prefix:?} isn't hex")]
    InvalidPrefix { prefix: String },

    /// The target prefix is longer than the 40 characters of a SHA-1 hex
    /// digest and could never match.
    #[error("Prefix is {len} characters long, a commit hash has at most 40")]
    PrefixTooLong { len: usize },

    /// The search was asked to run with zero workers.
    #[error("Worker count must be greater than 0")]
    NoWorkers,

    /// The commit header has no line for the given signature field.
    #[error("Failed to find the {field} line in the commit header")]
    MissingDate { field: &'static str },

    /// The signature line exists but does not end in `<seconds> <timezone>`.
    #[error("Unexpected {field} date {value:?}")]
    MalformedDate { field: &'static str, value: String },

    /// Every worker stopped without publishing a solution.
    #[error("Search ended without a solution")]
    NoSolution,
}
