//! Parallel search over partitioned explorers.
//!
//! [`solve`] splits the pair space with [`split_explore`] and runs one worker
//! thread per partition. Each worker owns its [`Explorer`] and its [`Checker`]
//! outright, so the hot loop touches no shared state apart from a single stop
//! flag that it polls once per candidate.
//!
//! The first worker to find a match publishes it into a write-once slot and
//! raises the stop flag. Every other worker sees the flag on its next
//! iteration and exits. Which worker wins is unspecified: with
//! more than one worker, repeated runs may return different (but equally
//! valid) solutions.
//!
//! [`Explorer`]: crate::Explorer

use std::sync::OnceLock;
use std::thread;

use portable_atomic::{AtomicBool, AtomicU64, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Checker, Error, Explore, Found, Result, SolverConfig, Template, split_explore};

/// Broadcast, write-once stop signal shared by every worker.
pub(crate) struct StopFlag {
    #[cfg(feature = "cache-padded")]
    inner: crossbeam_utils::CachePadded<AtomicBool>,
    #[cfg(not(feature = "cache-padded"))]
    inner: AtomicBool,
}

impl StopFlag {
    pub(crate) fn new() -> Self {
        Self {
            #[cfg(feature = "cache-padded")]
            inner: crossbeam_utils::CachePadded::new(AtomicBool::new(false)),
            #[cfg(not(feature = "cache-padded"))]
            inner: AtomicBool::new(false),
        }
    }

    #[inline]
    pub(crate) fn is_set(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }

    pub(crate) fn set(&self) {
        self.inner.store(true, Ordering::Release);
    }
}

/// Searches for commit dates that make `obj` hash to the configured prefix.
///
/// Blocks until a solution is found; there is no timeout. With a single
/// worker the search is fully deterministic and always returns the first
/// matching pair in [`Explorer`] order.
///
/// [`Explorer`]: crate::Explorer
///
/// # Errors
///
/// - [`Error::MissingDate`] / [`Error::MalformedDate`] if `obj` has no usable
///   author or committer line. This is checked before any worker starts.
/// - [`Error::NoSolution`] if the workers stop without publishing a result.
///
/// # Example
/// ```
/// use gitbrute::{HexPrefix, SolverConfig, solve};
///
/// let obj = b"tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\n\
///     author A <a@example.test> 1700000000 +0100\n\
///     committer C <c@example.test> 1700000000 +0100\n\
///     \n\
///     message\n";
/// let config = SolverConfig::new(HexPrefix::new("0").unwrap(), 2, 1_700_000_000).unwrap();
/// let found = solve(obj, &config).unwrap();
/// assert!(found.hash.starts_with('0'));
/// ```
pub fn solve(obj: &[u8], config: &SolverConfig) -> Result<Found> {
    let template = Template::parse(obj)?;
    solve_template(&template, config)
}

/// Like [`solve`], for an already parsed [`Template`].
///
/// # Errors
///
/// Returns [`Error::NoSolution`] if the workers stop without publishing a
/// result.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
pub fn solve_template(template: &Template, config: &SolverConfig) -> Result<Found> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Searching for prefix `{}` with {} workers counting back from {}",
        config.prefix(),
        config.workers(),
        config.start_unix()
    );

    let stop = StopFlag::new();
    let winner = OnceLock::new();
    let checked = AtomicU64::new(0);

    thread::scope(|s| {
        for (worker_id, explorer) in split_explore(config.workers().get())
            .into_iter()
            .enumerate()
        {
            let checker = Checker::new(
                template.clone(),
                config.prefix().clone(),
                config.start_unix(),
            );
            let (stop, winner, checked) = (&stop, &winner, &checked);
            s.spawn(move || worker_loop(worker_id, explorer, checker, stop, winner, checked));
        }
    });

    let mut found: Found = winner.into_inner().ok_or(Error::NoSolution)?;
    found.checked = checked.load(Ordering::Relaxed);
    Ok(found)
}

/// Drives one worker until it finds a match or the stop flag is raised.
///
/// Each iteration pulls the next pair, checks it, and on a match publishes
/// the result. Only the first publish across all workers is kept. The number
/// of candidates this worker checked is added to `checked` on exit.
pub(crate) fn worker_loop<E: Explore>(
    worker_id: usize,
    mut explorer: E,
    mut checker: Checker,
    stop: &StopFlag,
    winner: &OnceLock<Found>,
    checked: &AtomicU64,
) {
    #[cfg(feature = "tracing")]
    tracing::trace!("Worker {worker_id} started");

    let mut local = 0u64;
    while !stop.is_set() {
        let pair = explorer.next_pair();
        local += 1;

        let (candidate, matched) = checker.check(pair);
        if matched {
            let found = Found {
                solution: checker.resolve(candidate),
                pair,
                worker: worker_id,
                hash: checker.last_hash().to_owned(),
                checked: 0,
            };
            if winner.set(found).is_ok() {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "Worker {worker_id} won with {pair:?} -> {}",
                    checker.last_hash()
                );
            }
            stop.set();
            break;
        }
    }

    checked.fetch_add(local, Ordering::Relaxed);

    #[cfg(feature = "tracing")]
    tracing::trace!("Worker {worker_id} stopped after {local} candidates");
}
