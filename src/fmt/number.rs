//! Allocation-free integer rendering into caller-owned stack buffers.

/// Enough room for `u64::MAX` in decimal.
pub const DEC_CAPACITY: usize = 20;

/// `0x` plus one digit per nibble of a `usize`.
pub const HEX_CAPACITY: usize = 2 + (usize::BITS / 4) as usize;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders `value` in decimal without leading zeros and returns the used tail of `buf`.
pub fn format_dec(mut value: u64, buf: &mut [u8; DEC_CAPACITY]) -> &[u8] {
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    &buf[start..]
}

/// Renders `value` as `0x` followed by minimal lowercase hex digits (`0x0` for zero).
pub fn format_hex(mut value: usize, buf: &mut [u8; HEX_CAPACITY]) -> &[u8] {
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = HEX_DIGITS[value & 0xf];
        value >>= 4;
        if value == 0 {
            break;
        }
    }
    start -= 2;
    buf[start] = b'0';
    buf[start + 1] = b'x';
    &buf[start..]
}
