use sha1::{Digest, Sha1};

use crate::object::{MAX_DECIMAL_LEN, format_decimal};

/// The object kind every searched object is hashed as.
pub const OBJECT_KIND: &str = "commit";

/// Number of hex characters in a SHA-1 object id.
pub const OBJECT_ID_HEX_LEN: usize = 40;

/// Wraps raw object bytes in the loose object container that git hashes:
/// `"commit <len>\0<bytes>"`.
pub fn wrap_object(obj: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(OBJECT_KIND.len() + MAX_DECIMAL_LEN + 2 + obj.len());
    push_header(&mut out, obj.len());
    out.extend_from_slice(obj);
    out
}

/// Returns the lowercase hex object id git would assign to the raw commit
/// object `obj`.
///
/// # Example
/// ```
/// let id = gitbrute::object_id(b"");
/// assert_eq!(id, "dcf5b16e76cce7425d0beaef62d79a7d10fce1f5");
/// assert_eq!(id.len(), gitbrute::OBJECT_ID_HEX_LEN);
/// ```
pub fn object_id(obj: &[u8]) -> String {
    hex::encode(Sha1::digest(wrap_object(obj)))
}

/// Appends the `"commit <len>\0"` container header to `out`.
pub(crate) fn push_header(out: &mut Vec<u8>, len: usize) {
    let mut digits = [0; MAX_DECIMAL_LEN];
    out.extend_from_slice(OBJECT_KIND.as_bytes());
    out.push(b' ');
    out.extend_from_slice(format_decimal(len as i64, &mut digits));
    out.push(0);
}
