use crate::explore::Explorer;

/// Splits the nominal [`Explorer`] sequence across `n` explorers.
///
/// Explorer `k` is built with `start = k` and `stride = n`, so it visits the
/// frontiers `k, k + n, k + 2n, ...`. Because a frontier is a self-contained
/// block of pairs, the explorers never overlap and together leave no gaps:
/// they share no state and can be driven from different threads without any
/// synchronization.
///
/// Returns an empty vector when `n` is zero; callers are expected to reject
/// a zero worker count before getting here.
///
/// ```text
///     (0, 4)        (1, 4)         (2, 4)         (3, 4)
///     ------        ------         ------         ------
///     (0,0)         (0,1)          (0,2)          (0,3)
///     (0,4)         (1,0)          (1,2)          (1,3)
///     (1,4)         (1,1)          (2,0)          (2,3)
///     (2,4)         (0,5)          (2,1)          (3,0)
///     ...           ...            ...            ...
/// ```
///
/// # Example
/// ```
/// use gitbrute::{split_explore, Pair};
///
/// let mut explorers = split_explore(2);
/// assert_eq!(explorers[0].next_pair(), Pair::new(0, 0));
/// assert_eq!(explorers[1].next_pair(), Pair::new(0, 1));
/// ```
pub fn split_explore(n: usize) -> Vec<Explorer> {
    let stride = n as u64;
    (0..stride)
        .map(|start| Explorer::with_stride(start, stride))
        .collect()
}
