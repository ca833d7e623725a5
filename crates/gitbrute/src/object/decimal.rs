/// Longest decimal rendering of an `i64`, `-9223372036854775808`.
pub(crate) const MAX_DECIMAL_LEN: usize = 20;

/// Returns the number of bytes `n` occupies in canonical decimal form.
#[inline]
pub(crate) const fn decimal_width(n: i64) -> usize {
    let mut v = n.unsigned_abs();
    let mut width = if n < 0 { 2 } else { 1 };
    while v >= 10 {
        v /= 10;
        width += 1;
    }
    width
}

/// Writes `n` in canonical decimal form into `out`, which must be exactly
/// [`decimal_width`]`(n)` bytes long.
#[inline]
pub(crate) fn write_decimal(out: &mut [u8], n: i64) {
    debug_assert_eq!(out.len(), decimal_width(n));
    let mut v = n.unsigned_abs();
    let mut pos = out.len();
    loop {
        pos -= 1;
        out[pos] = b'0' + (v % 10) as u8;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    if n < 0 {
        out[0] = b'-';
    }
}

/// Renders `n` into a stack buffer and returns the used tail.
#[inline]
pub(crate) fn format_decimal(n: i64, buf: &mut [u8; MAX_DECIMAL_LEN]) -> &[u8] {
    let width = decimal_width(n);
    let out = &mut buf[..width];
    write_decimal(out, n);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(decimal_width(0), 1);
        assert_eq!(decimal_width(9), 1);
        assert_eq!(decimal_width(10), 2);
        assert_eq!(decimal_width(999_999_999), 9);
        assert_eq!(decimal_width(1_000_000_000), 10);
        assert_eq!(decimal_width(-1), 2);
        assert_eq!(decimal_width(i64::MAX), 19);
        assert_eq!(decimal_width(i64::MIN), MAX_DECIMAL_LEN);
    }

    #[test]
    fn formats_like_display() {
        let mut buf = [0; MAX_DECIMAL_LEN];
        for n in [0, 7, 10, 1_640_342_275, -42, i64::MAX, i64::MIN] {
            assert_eq!(format_decimal(n, &mut buf), n.to_string().as_bytes());
        }
    }

    #[test]
    fn overwrites_in_place() {
        let mut line = *b"x 1700000000 +0100";
        write_decimal(&mut line[2..12], 1_699_999_999);
        assert_eq!(&line, b"x 1699999999 +0100");
    }
}
