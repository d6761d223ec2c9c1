//! Base-128 varint sizing.

/// Longest possible encoding of a 64-bit varint.
pub const MAX_VARINT_LEN: usize = 10;

/// Returns the number of bytes `value` occupies when written as a varint.
///
/// # Example
///
/// ```
/// use proto_pack_buffers::varint_len;
///
/// assert_eq!(varint_len(0), 1);
/// assert_eq!(varint_len(127), 1);
/// assert_eq!(varint_len(128), 2);
/// assert_eq!(varint_len(u64::MAX), 10);
/// ```
#[inline]
pub fn varint_len(value: u64) -> usize {
    // Each byte carries 7 payload bits; a zero value still needs one byte.
    let bits = 64 - (value | 1).leading_zeros() as usize;
    (bits + 6) / 7
}
