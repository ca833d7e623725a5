use std::time::{SystemTime, UNIX_EPOCH};

/// A trait for sources of the reference timestamp a search counts back from.
///
/// This abstraction allows you to plug in the system clock, or a fixed time
/// in tests so that a search is reproducible.
///
/// # Example
///
/// ```
/// use gitbrute::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_secs(&self) -> i64 {
///         1_700_000_000
///     }
/// }
///
/// assert_eq!(FixedTime.current_secs(), 1_700_000_000);
/// ```
pub trait TimeSource {
    /// Returns the current time in whole seconds since the unix epoch.
    fn current_secs(&self) -> i64;
}

/// Wall-clock time source backed by [`SystemTime`].
///
/// A system clock set before 1970 reads as `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_secs(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.current_secs() > 1_577_836_800);
    }
}
