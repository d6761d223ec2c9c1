//! Hex dump helpers for logging encoded messages.

use std::fmt::Write;

/// Formats at most `max` bytes of `octets` as space separated lowercase hex.
///
/// When bytes are left out the dump ends with `... (+N)`.
///
/// ```
/// use proto_pack_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x08, 0xb9, 0x60], 16), "08 b9 60");
/// assert_eq!(print_octets(&[1, 2, 3, 4], 2), "01 02 ... (+2)");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let shown = octets.len().min(max);
    let mut out = String::with_capacity(shown * 3 + 12);
    for (i, byte) in octets[..shown].iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02x}");
    }
    if octets.len() > shown {
        if shown > 0 {
            out.push(' ');
        }
        let _ = write!(out, "... (+{})", octets.len() - shown);
    }
    out
}

/// [`print_octets`] capped at 32 bytes, enough for a log line.
pub fn print_octets_default(octets: &[u8]) -> String {
    print_octets(octets, 32)
}
