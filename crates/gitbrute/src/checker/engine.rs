use sha1::{Digest, Sha1};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    HexPrefix, OBJECT_ID_HEX_LEN, Pair, Result, Solution, Template,
    object::{FieldSlot, decimal_width, write_decimal},
};

/// The author and committer seconds tried for one [`Pair`].
///
/// Timezones are fixed for the whole search, so a candidate only carries the
/// seconds; [`Checker::resolve`] attaches the timezones once a candidate
/// wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Author date, in seconds since the unix epoch.
    pub author: i64,
    /// Committer date, in seconds since the unix epoch.
    pub committer: i64,
}

/// Tests candidates against a hex prefix by rewriting a commit object in
/// place and hashing it.
///
/// A checker is built once per worker and reused for every candidate that
/// worker tries. Setup wraps the object in its `commit <len>\0` container and
/// records where the author and committer seconds live; each
/// [`Checker::check`] then overwrites just those digits, hashes the buffer,
/// and hex-encodes the digest into a fixed scratch array. Nothing on this path
/// allocates.
///
/// ## Features
/// - ❌ Not thread-safe (one per worker)
/// - ✅ Allocation free per candidate
///
/// ## Field widths
/// The buffer is laid out for the decimal widths of the reference timestamp.
/// Counting back across a power of ten (e.g. from `1000000005` to
/// `999999999`) changes a field's width; when that happens the buffer is laid
/// out again for the new widths before hashing, so the container length and
/// the second field's offset stay correct. This is the only time the buffer
/// changes length.
///
/// Near such a boundary the frontier order alternates between pairs where
/// only the author is past it and pairs where only the committer is, so a
/// single frontier can trigger several re-layouts. This lasts for as long as
/// one offset is on each side of the boundary. The buffer keeps its capacity,
/// so re-layouts do not allocate once both widths have been seen.
///
/// # Example
/// ```
/// use gitbrute::{Checker, HexPrefix, Pair, Template};
///
/// let obj = b"tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\n\
///     author A <a@example.test> 1700000000 +0100\n\
///     committer C <c@example.test> 1700000000 +0100\n\
///     \n\
///     message\n";
/// let template = Template::parse(obj).unwrap();
/// let mut checker = Checker::new(template, HexPrefix::new("").unwrap(), 1_700_000_100);
///
/// let (candidate, matched) = checker.check(Pair::new(100, 0));
/// assert!(matched);
/// assert_eq!(candidate.committer, 1_700_000_000);
/// assert_eq!(candidate.author, 1_700_000_100);
/// ```
#[derive(Debug, Clone)]
pub struct Checker {
    template: Template,
    prefix: HexPrefix,
    start_unix: i64,
    blob: Vec<u8>,
    author: FieldSlot,
    committer: FieldSlot,
    hex: [u8; OBJECT_ID_HEX_LEN],
}

impl Checker {
    /// Creates a checker for `template` that counts back from `start_unix`.
    pub fn new(template: Template, prefix: HexPrefix, start_unix: i64) -> Self {
        let anchor = start_unix.max(0);
        let mut blob = Vec::new();
        let (author, committer) = template.layout_into(&mut blob, anchor, anchor);
        Self {
            template,
            prefix,
            start_unix,
            blob,
            author,
            committer,
            hex: [b'0'; OBJECT_ID_HEX_LEN],
        }
    }

    /// Parses `obj` and creates a checker for it.
    ///
    /// # Errors
    ///
    /// Returns the parse error from [`Template::parse`] if the object has no
    /// usable author or committer line.
    pub fn from_object(obj: &[u8], prefix: HexPrefix, start_unix: i64) -> Result<Self> {
        Ok(Self::new(Template::parse(obj)?, prefix, start_unix))
    }

    /// Returns the dates `pair` maps to: `a` seconds behind for the
    /// committer, `b` seconds behind for the author.
    #[inline]
    pub fn candidate(&self, pair: Pair) -> Candidate {
        Candidate {
            author: self.start_unix.saturating_sub_unsigned(pair.b),
            committer: self.start_unix.saturating_sub_unsigned(pair.a),
        }
    }

    /// Tries `pair` and reports whether the resulting commit hash starts with
    /// the target prefix.
    ///
    /// Candidates whose dates would fall before the unix epoch are reported
    /// as non-matching without being hashed.
    #[inline]
    pub fn check(&mut self, pair: Pair) -> (Candidate, bool) {
        let candidate = self.candidate(pair);
        if candidate.author < 0 || candidate.committer < 0 {
            return (candidate, false);
        }

        if decimal_width(candidate.author) == self.author.width
            && decimal_width(candidate.committer) == self.committer.width
        {
            write_decimal(&mut self.blob[self.author.range()], candidate.author);
            write_decimal(&mut self.blob[self.committer.range()], candidate.committer);
        } else {
            self.relayout(candidate);
        }

        let digest = Sha1::digest(&self.blob);
        let matched = hex::encode_to_slice(digest, &mut self.hex).is_ok()
            && self.hex.starts_with(self.prefix.as_bytes());
        (candidate, matched)
    }

    #[cold]
    #[inline(never)]
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self)))]
    fn relayout(&mut self, candidate: Candidate) {
        let (author, committer) =
            self.template
                .layout_into(&mut self.blob, candidate.author, candidate.committer);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Re-anchored field widths {}/{} -> {}/{}",
            self.author.width,
            self.committer.width,
            author.width,
            committer.width
        );

        self.author = author;
        self.committer = committer;
    }

    /// Attaches the template's timezones to `candidate`.
    pub fn resolve(&self, candidate: Candidate) -> Solution {
        Solution::new(
            candidate.author,
            &self.template.author().date.tz,
            candidate.committer,
            &self.template.committer().date.tz,
        )
    }

    /// Hex object id computed by the most recent [`Self::check`].
    pub fn last_hash(&self) -> &str {
        core::str::from_utf8(&self.hex).unwrap_or_default()
    }

    /// The wrapped object as last hashed.
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// The template this checker rewrites.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The prefix this checker tests for.
    pub fn prefix(&self) -> &HexPrefix {
        &self.prefix
    }

    /// The reference timestamp offsets are counted back from.
    pub fn start_unix(&self) -> i64 {
        self.start_unix
    }
}
