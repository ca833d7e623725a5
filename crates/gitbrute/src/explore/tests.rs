use crate::{Explore, Explorer, Pair, split_explore};
use std::collections::HashSet;
use std::thread::scope;

fn pairs(raw: &[(u64, u64)]) -> Vec<Pair> {
    raw.iter().copied().map(Pair::from).collect()
}

fn take(explorer: &mut Explorer, n: usize) -> Vec<Pair> {
    (0..n).map(|_| explorer.next_pair()).collect()
}

#[test]
fn uniform_sequence() {
    let want = pairs(&[
        (0, 0),
        // ---
        (0, 1),
        (1, 0),
        (1, 1),
        // ---
        (0, 2),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
        // ---
        (0, 3),
        (1, 3),
        (2, 3),
        (3, 0),
        (3, 1),
        (3, 2),
        (3, 3),
        // ---
        (0, 4),
    ]);
    let mut explorer = Explorer::new();
    assert_eq!(take(&mut explorer, want.len()), want);
}

#[test]
fn stride_sequence() {
    let want = pairs(&[
        (0, 0),
        // ---
        (0, 2),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
        // ---
        (0, 4),
        (1, 4),
        (2, 4),
        (3, 4),
        (4, 0),
        (4, 1),
        (4, 2),
        (4, 3),
        (4, 4),
        // ---
        (0, 6),
    ]);
    let mut explorer = Explorer::with_stride(0, 2);
    assert_eq!(take(&mut explorer, want.len()), want);
}

#[test]
fn offset_stride_sequence() {
    let want = pairs(&[
        (0, 1),
        (1, 0),
        (1, 1),
        // ---
        (0, 3),
        (1, 3),
        (2, 3),
        (3, 0),
        (3, 1),
        (3, 2),
        (3, 3),
        // ---
        (0, 5),
    ]);
    let mut explorer = Explorer::with_stride(1, 2);
    assert_eq!(take(&mut explorer, want.len()), want);
}

#[test]
fn iterator_matches_next_pair() {
    let mut cursor = Explorer::new();
    let via_cursor = take(&mut cursor, 64);
    let via_iter: Vec<Pair> = Explorer::new().take(64).collect();
    assert_eq!(via_cursor, via_iter);
}

#[test]
fn explore_trait_matches_inherent() {
    fn drive(e: &mut impl Explore, n: usize) -> Vec<Pair> {
        (0..n).map(|_| e.next_pair()).collect()
    }
    let mut a = Explorer::with_stride(3, 5);
    let mut b = Explorer::with_stride(3, 5);
    assert_eq!(drive(&mut a, 100), take(&mut b, 100));
}

#[test]
fn every_frontier_is_complete_and_ordered() {
    const FRONTIERS: u64 = 40;

    let mut explorer = Explorer::new();
    let mut seen = HashSet::new();

    for m in 0..FRONTIERS {
        // A frontier holds 2m + 1 pairs, all with max(a, b) == m.
        for _ in 0..(2 * m + 1) {
            let pair = explorer.next_pair();
            assert_eq!(pair.frontier(), m, "pair {pair:?} emitted out of frontier");
            assert!(seen.insert(pair), "pair {pair:?} emitted twice");
        }
        for x in 0..=m {
            assert!(seen.contains(&Pair::new(x, m)));
            assert!(seen.contains(&Pair::new(m, x)));
        }
    }

    assert_eq!(seen.len() as u64, FRONTIERS * FRONTIERS);
    assert_eq!(explorer.next_pair(), Pair::new(0, FRONTIERS));
}

#[test]
fn frontier_is_monotonic() {
    let mut explorer = Explorer::with_stride(2, 3);
    let mut last = explorer.frontier();
    for _ in 0..10_000 {
        let pair = explorer.next_pair();
        assert!(explorer.frontier() >= last);
        assert_eq!(pair.frontier(), explorer.frontier());
        assert_eq!(pair.frontier() % 3, 2);
        last = explorer.frontier();
    }
}

#[test]
#[should_panic(expected = "stride must be greater than 0")]
fn zero_stride_panics() {
    let _ = Explorer::with_stride(0, 0);
}

#[test]
fn split_matches_explicit_construction() {
    for n in 1..=3usize {
        let mut got = split_explore(n);
        assert_eq!(got.len(), n);
        for (k, explorer) in got.iter_mut().enumerate() {
            let mut want = Explorer::with_stride(k as u64, n as u64);
            assert_eq!(take(explorer, 10), take(&mut want, 10), "n={n} k={k}");
        }
    }
}

#[test]
fn split_zero_is_empty() {
    assert!(split_explore(0).is_empty());
}

/// Reassembles the nominal sequence from partitioned explorers by pulling one
/// whole frontier at a time from explorer `m % n`.
fn reassemble(n: usize, frontiers: u64) -> Vec<Pair> {
    let mut explorers = split_explore(n);
    let mut out = Vec::new();
    for m in 0..frontiers {
        let explorer = &mut explorers[(m % n as u64) as usize];
        out.extend(take(explorer, (2 * m + 1) as usize));
    }
    out
}

#[test]
fn partitions_reproduce_nominal_sequence() {
    const FRONTIERS: u64 = 30;
    let total = (FRONTIERS * FRONTIERS) as usize;
    let nominal = take(&mut Explorer::new(), total);

    for n in [1, 2, 3, 4, 7, 8, 16] {
        assert_eq!(reassemble(n, FRONTIERS), nominal, "n={n}");
    }
}

#[test]
fn partitions_are_disjoint_and_cover() {
    const PER_EXPLORER: usize = 2_000;

    for n in [2usize, 4, 8] {
        let mut seen = HashSet::new();
        for mut explorer in split_explore(n) {
            for pair in take(&mut explorer, PER_EXPLORER) {
                assert!(seen.insert(pair), "n={n}: {pair:?} produced twice");
            }
        }
        // The lowest frontiers are fully covered by the union.
        for m in 0..16u64 {
            for x in 0..=m {
                assert!(seen.contains(&Pair::new(x, m)), "n={n}: gap at ({x},{m})");
                assert!(seen.contains(&Pair::new(m, x)), "n={n}: gap at ({m},{x})");
            }
        }
    }
}

#[test]
fn partitions_run_independently_on_threads() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 4_096;

    let results: Vec<Vec<Pair>> = scope(|s| {
        let handles: Vec<_> = split_explore(THREADS)
            .into_iter()
            .map(|mut explorer| s.spawn(move || take(&mut explorer, PER_THREAD)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut seen = HashSet::with_capacity(THREADS * PER_THREAD);
    for (k, pairs) in results.iter().enumerate() {
        let mut want = Explorer::with_stride(k as u64, THREADS as u64);
        assert_eq!(pairs, &take(&mut want, PER_THREAD));
        for pair in pairs {
            assert!(seen.insert(*pair));
        }
    }
}
