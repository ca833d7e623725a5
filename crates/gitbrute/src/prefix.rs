use core::{fmt, str::FromStr};

use crate::{Error, OBJECT_ID_HEX_LEN, Result};

/// A validated, lowercased hex prefix that a commit hash must start with.
///
/// Validation happens once, up front: the prefix may only contain hex digits
/// (in either case) and may not be longer than a SHA-1 hex digest. An empty
/// prefix is valid and matches every hash.
///
/// # Example
/// ```
/// use gitbrute::HexPrefix;
///
/// let prefix: HexPrefix = "C0FFEE".parse().unwrap();
/// assert_eq!(prefix.as_str(), "c0ffee");
/// assert!(prefix.matches("c0ffee0123"));
/// assert!("c0fFeX".parse::<HexPrefix>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HexPrefix(String);

impl HexPrefix {
    /// Validates `prefix` and stores it lowercased.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPrefix`] if any character is not a hex digit.
    /// - [`Error::PrefixTooLong`] if it has more than
    ///   [`OBJECT_ID_HEX_LEN`] characters.
    pub fn new(prefix: &str) -> Result<Self> {
        if !prefix.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidPrefix {
                prefix: prefix.to_owned(),
            });
        }
        if prefix.len() > OBJECT_ID_HEX_LEN {
            return Err(Error::PrefixTooLong { len: prefix.len() });
        }
        Ok(Self(prefix.to_ascii_lowercase()))
    }

    /// The lowercased prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lowercased prefix as bytes, for comparing against a hex buffer.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of hex digits in the prefix.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the prefix is empty and so matches every hash.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the hex `hash` starts with this prefix, ignoring
    /// case.
    pub fn matches(&self, hash: &str) -> bool {
        hash.len() >= self.len()
            && hash.as_bytes()[..self.len()].eq_ignore_ascii_case(self.as_bytes())
    }
}

impl FromStr for HexPrefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for HexPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
