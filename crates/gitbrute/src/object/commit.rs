use core::fmt;

use crate::{
    Error, Result,
    object::{MAX_DECIMAL_LEN, decimal_width, format_decimal, push_header},
};

/// A git date: unix seconds plus the timezone suffix it was recorded with.
///
/// Displays in git's internal date format, `"<seconds> <tz>"`, which is what
/// `git commit --date` and `GIT_COMMITTER_DATE` accept.
///
/// ```
/// use gitbrute::GitDate;
///
/// let date = GitDate::new(1_640_342_275, "+0100");
/// assert_eq!(date.to_string(), "1640342275 +0100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitDate {
    /// Seconds since the unix epoch.
    pub seconds: i64,
    /// Timezone suffix, e.g. `+0100`.
    pub tz: String,
}

impl GitDate {
    /// A date of `seconds` since the epoch in the `tz` offset, e.g. `+0100`.
    pub fn new(seconds: i64, tz: impl Into<String>) -> Self {
        Self {
            seconds,
            tz: tz.into(),
        }
    }
}

impl fmt::Display for GitDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.seconds, self.tz)
    }
}

/// The `author` or `committer` line of a commit header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    /// Identity as written in the header, `Name <email>`.
    pub ident: String,
    /// The recorded date.
    pub date: GitDate,
}

impl Signature {
    /// Returns the name part of the identity.
    pub fn name(&self) -> &str {
        match self.ident.rfind(" <") {
            Some(idx) => &self.ident[..idx],
            None => self.ident.trim_end(),
        }
    }

    /// Returns the email part of the identity, without angle brackets.
    pub fn email(&self) -> &str {
        match (self.ident.rfind('<'), self.ident.rfind('>')) {
            (Some(open), Some(close)) if open < close => &self.ident[open + 1..close],
            _ => "",
        }
    }
}

/// Location of one mutable date field inside a rendered buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldSlot {
    pub at: usize,
    pub width: usize,
}

impl FieldSlot {
    #[inline]
    pub fn range(&self) -> core::ops::Range<usize> {
        self.at..self.at + self.width
    }
}

/// Where a date field's seconds live in the raw object.
#[derive(Debug, Clone)]
struct DateField {
    at: usize,
    width: usize,
    signature: Signature,
}

/// A parsed commit object whose author and committer seconds can be
/// substituted.
///
/// Parsing locates the `author` and `committer` header lines, which is the
/// only structural requirement: a missing or malformed line is rejected here,
/// before any search starts.
///
/// # Example
/// ```
/// use gitbrute::Template;
///
/// let obj = b"tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\n\
///     author A U Thor <author@example.test> 1700000000 +0100\n\
///     committer C O Mitter <committer@example.test> 1700003600 -0800\n\
///     \n\
///     message\n";
/// let template = Template::parse(obj).unwrap();
/// assert_eq!(template.author().date.seconds, 1_700_000_000);
/// assert_eq!(template.committer().date.tz, "-0800");
/// assert_eq!(template.render(1, 2).len(), obj.len() - 18);
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    raw: Vec<u8>,
    author: DateField,
    committer: DateField,
}

impl Template {
    /// Parses a raw commit object (without the `commit <len>\0` container).
    ///
    /// # Errors
    ///
    /// - [`Error::MissingDate`] if the `author` or `committer` line is absent
    ///   from the header.
    /// - [`Error::MalformedDate`] if a line does not end in
    ///   `> <seconds> <tz>`.
    pub fn parse(obj: &[u8]) -> Result<Self> {
        let author = locate_date(obj, "author")?;
        let committer = locate_date(obj, "committer")?;
        Ok(Self {
            raw: obj.to_vec(),
            author,
            committer,
        })
    }

    /// The raw object bytes as parsed.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The author signature as recorded in the object.
    pub fn author(&self) -> &Signature {
        &self.author.signature
    }

    /// The committer signature as recorded in the object.
    pub fn committer(&self) -> &Signature {
        &self.committer.signature
    }

    /// Returns the raw object with the author and committer seconds replaced.
    pub fn render(&self, author: i64, committer: i64) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.raw.len() + 2 * MAX_DECIMAL_LEN);
        self.push_body(&mut out, author, committer);
        out
    }

    /// Lays out the wrapped object (`commit <len>\0` plus body) for the given
    /// seconds into `buf`, replacing its contents, and returns where the
    /// author and committer seconds landed.
    ///
    /// `buf` keeps its allocation when the new layout fits.
    pub(crate) fn layout_into(
        &self,
        buf: &mut Vec<u8>,
        author: i64,
        committer: i64,
    ) -> (FieldSlot, FieldSlot) {
        let body_len = self.raw.len() - self.author.width - self.committer.width
            + decimal_width(author)
            + decimal_width(committer);

        buf.clear();
        push_header(buf, body_len);
        let offset = buf.len();
        let (a, c) = self.push_body(buf, author, committer);
        (
            FieldSlot {
                at: a.at + offset,
                ..a
            },
            FieldSlot {
                at: c.at + offset,
                ..c
            },
        )
    }

    /// Appends the substituted body to `out`, returning slots relative to
    /// the start of the body.
    fn push_body(&self, out: &mut Vec<u8>, author: i64, committer: i64) -> (FieldSlot, FieldSlot) {
        let base = out.len();
        let author_first = self.author.at <= self.committer.at;
        let ordered = if author_first {
            [(&self.author, author), (&self.committer, committer)]
        } else {
            [(&self.committer, committer), (&self.author, author)]
        };

        let mut digits = [0; MAX_DECIMAL_LEN];
        let mut slots = [FieldSlot { at: 0, width: 0 }; 2];
        let mut cursor = 0;
        for (slot, (field, seconds)) in slots.iter_mut().zip(ordered) {
            out.extend_from_slice(&self.raw[cursor..field.at]);
            let rendered = format_decimal(seconds, &mut digits);
            *slot = FieldSlot {
                at: out.len() - base,
                width: rendered.len(),
            };
            out.extend_from_slice(rendered);
            cursor = field.at + field.width;
        }
        out.extend_from_slice(&self.raw[cursor..]);

        let [first, second] = slots;
        if author_first {
            (first, second)
        } else {
            (second, first)
        }
    }
}

/// Header fields that carry a signature over the rest of the commit.
pub const SIGNATURE_HEADERS: [&str; 2] = ["gpgsig", "gpgsig-sha256"];

/// Returns `obj` with its signature headers removed, including their
/// continuation lines.
///
/// Amending a commit drops its signature, so these are the bytes the amended
/// commit will actually contain. The message is left untouched even if it
/// quotes a signature.
///
/// ```
/// let obj = b"tree abc\n\
///     gpgsig -----BEGIN PGP SIGNATURE-----\n \n -----END PGP SIGNATURE-----\n\
///     author A <a@example.test> 1 +0000\n\
///     \n\
///     msg\n";
/// assert_eq!(
///     gitbrute::strip_signatures(obj),
///     b"tree abc\nauthor A <a@example.test> 1 +0000\n\nmsg\n"
/// );
/// ```
pub fn strip_signatures(obj: &[u8]) -> Vec<u8> {
    let header_end = header_len(obj);
    let mut out = Vec::with_capacity(obj.len());
    let mut skipping = false;
    for line in obj[..header_end].split_inclusive(|&b| b == b'\n') {
        if skipping && line.starts_with(b" ") {
            continue;
        }
        skipping = SIGNATURE_HEADERS.iter().any(|field| {
            line.strip_prefix(field.as_bytes())
                .is_some_and(|rest| rest.starts_with(b" "))
        });
        if !skipping {
            out.extend_from_slice(line);
        }
    }
    out.extend_from_slice(&obj[header_end..]);
    out
}

/// Length of the header, up to and including the newline that precedes the
/// blank separator line. The whole object if there is no message.
fn header_len(obj: &[u8]) -> usize {
    obj.windows(2)
        .position(|w| w == b"\n\n")
        .map_or(obj.len(), |idx| idx + 1)
}

/// Returns only the message portion of a raw commit object, i.e. everything
/// after the first blank line.
///
/// Returns `None` if the object has no header/message separator.
///
/// ```
/// assert_eq!(
///     gitbrute::extract_message(b"tree abc\n\nhello\n"),
///     Some(&b"hello\n"[..])
/// );
/// assert_eq!(gitbrute::extract_message(b"tree abc\n"), None);
/// ```
pub fn extract_message(obj: &[u8]) -> Option<&[u8]> {
    obj.windows(2)
        .position(|w| w == b"\n\n")
        .map(|idx| &obj[idx + 2..])
}

/// Finds the `<field> Name <email> <seconds> <tz>` line in the header of
/// `obj` and parses its date.
fn locate_date(obj: &[u8], field: &'static str) -> Result<DateField> {
    let header_end = header_len(obj);

    let mut line_start = 0;
    for line in obj[..header_end].split(|&b| b == b'\n') {
        let start = line_start;
        line_start += line.len() + 1;

        let Some(rest) = line
            .strip_prefix(field.as_bytes())
            .and_then(|rest| rest.strip_prefix(b" "))
        else {
            continue;
        };

        let malformed = || Error::MalformedDate {
            field,
            value: String::from_utf8_lossy(rest).into_owned(),
        };

        // The date follows the last "> " so that names or emails containing
        // '>' do not confuse the split.
        let Some(close) = rest.windows(2).rposition(|w| w == b"> ") else {
            return Err(malformed());
        };
        let ident = core::str::from_utf8(&rest[..=close]).map_err(|_| malformed())?;
        let value = core::str::from_utf8(&rest[close + 2..]).map_err(|_| malformed())?;

        let Some((seconds, tz)) = value.split_once(' ') else {
            return Err(malformed());
        };
        if seconds.is_empty() || !seconds.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let parsed: i64 = seconds.parse().map_err(|_| malformed())?;
        if decimal_width(parsed) != seconds.len() {
            // Leading zeros would not survive a round trip through git.
            return Err(malformed());
        }

        let at = start + field.len() + 1 + close + 2;
        return Ok(DateField {
            at,
            width: seconds.len(),
            signature: Signature {
                ident: ident.to_owned(),
                date: GitDate::new(parsed, tz),
            },
        });
    }

    Err(Error::MissingDate { field })
}
