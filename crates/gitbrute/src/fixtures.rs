//! Shared commit fixture. Digests were computed once with an independent
//! SHA-1 implementation and are pinned here.

pub(crate) const COMMIT: &[u8] = b"tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904
parent 8f3c2d8e6a1b0c9d7e5f4a3b2c1d0e9f8a7b6c5d
author Ada Palmer <ada@example.test> 1700000000 +0100
committer Sam Okafor <sam@example.test> 1700003600 -0800

Tighten the worker stop check

The stop flag is now polled once per candidate.
";

/// Object id of [`COMMIT`] as stored.
pub(crate) const COMMIT_ID: &str = "e103a933d80830954580bee404286acc46df4f3b";

/// Reference timestamp the fixture searches count back from.
pub(crate) const REF: i64 = 1_700_100_000;

/// Object id of [`COMMIT`] with both dates set to [`REF`], i.e. pair `(0, 0)`.
pub(crate) const HASH_AT_REF: &str = "74a5a08a14b7f167bbabd55810abb90f53ed38ac";
