use core::num::NonZeroUsize;

use crate::{Error, HexPrefix, Result, TimeSource};

/// Immutable settings for one search.
///
/// Everything a worker needs is passed down from here explicitly; there is no
/// global state. Building a config is where the worker count is validated,
/// so [`solve`] never sees zero workers.
///
/// # Example
/// ```
/// use gitbrute::{HexPrefix, SolverConfig};
///
/// let config = SolverConfig::new(HexPrefix::new("bf").unwrap(), 4, 1_700_000_000).unwrap();
/// assert_eq!(config.workers().get(), 4);
/// assert!(SolverConfig::new(HexPrefix::new("bf").unwrap(), 0, 1_700_000_000).is_err());
/// ```
///
/// [`solve`]: crate::solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    prefix: HexPrefix,
    workers: NonZeroUsize,
    start_unix: i64,
}

impl SolverConfig {
    /// Creates a config that counts back from `start_unix`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoWorkers`] if `workers` is zero.
    pub fn new(prefix: HexPrefix, workers: usize, start_unix: i64) -> Result<Self> {
        let workers = NonZeroUsize::new(workers).ok_or(Error::NoWorkers)?;
        Ok(Self {
            prefix,
            workers,
            start_unix,
        })
    }

    /// Creates a config whose reference timestamp is read from `clock` now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoWorkers`] if `workers` is zero.
    pub fn with_clock(prefix: HexPrefix, workers: usize, clock: &impl TimeSource) -> Result<Self> {
        Self::new(prefix, workers, clock.current_secs())
    }

    /// Prefix a winning hash must start with.
    pub fn prefix(&self) -> &HexPrefix {
        &self.prefix
    }

    /// Number of worker threads the search runs on.
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// Reference time in Unix seconds; candidate dates count back from it.
    pub fn start_unix(&self) -> i64 {
        self.start_unix
    }
}
