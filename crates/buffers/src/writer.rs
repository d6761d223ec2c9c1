//! Auto-growing binary buffer writer.

/// A binary writer backed by a growable byte vector.
///
/// # Example
///
/// ```
/// use proto_pack_buffers::Writer;
///
/// let mut writer = Writer::with_capacity(8);
/// writer.varint(300);
/// writer.u32_le(1);
/// assert_eq!(writer.flush(), vec![0xac, 0x02, 1, 0, 0, 0]);
/// assert!(writer.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Writer {
    /// Bytes written so far.
    pub uint8: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { uint8: Vec::new() }
    }

    /// Creates an empty writer with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    /// Returns `true` when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Returns the written bytes without consuming them.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    /// Takes the written bytes, leaving the writer empty and reusable.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    /// Writes an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32_le(&mut self, val: u32) {
        self.uint8.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes an unsigned 64-bit integer (little-endian).
    #[inline]
    pub fn u64_le(&mut self, val: u64) {
        self.uint8.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a base-128 varint.
    #[inline]
    pub fn varint(&mut self, mut val: u64) {
        while val >= 0x80 {
            self.uint8.push((val as u8) | 0x80);
            val >>= 7;
        }
        self.uint8.push(val as u8);
    }

    /// Writes raw bytes.
    pub fn buf(&mut self, data: &[u8]) {
        self.uint8.extend_from_slice(data);
    }

    /// Writes the UTF-8 bytes of a string (no length prefix).
    pub fn utf8(&mut self, s: &str) {
        self.uint8.extend_from_slice(s.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{varint_len, Reader};

    #[test]
    fn test_varint_bytes() {
        let mut writer = Writer::new();
        writer.varint(0);
        writer.varint(1);
        writer.varint(150);
        writer.varint(12345);
        assert_eq!(writer.flush(), vec![0x00, 0x01, 0x96, 0x01, 0xb9, 0x60]);
    }

    #[test]
    fn test_negative_as_ten_bytes() {
        let mut writer = Writer::new();
        writer.varint((-1i64) as u64);
        assert_eq!(writer.len(), 10);
        assert_eq!(writer.as_slice()[9], 0x01);
    }

    #[test]
    fn test_flush_resets() {
        let mut writer = Writer::new();
        writer.utf8("abc");
        assert_eq!(writer.flush(), b"abc".to_vec());
        writer.u8(7);
        assert_eq!(writer.flush(), vec![7]);
    }

    proptest::proptest! {
        #[test]
        fn varint_length_matches_reader(value in proptest::num::u64::ANY) {
            let mut writer = Writer::new();
            writer.varint(value);
            proptest::prop_assert_eq!(writer.len(), varint_len(value));
            let data = writer.flush();
            let mut reader = Reader::new(&data);
            proptest::prop_assert_eq!(reader.varint(), Ok(value));
            proptest::prop_assert!(reader.is_empty());
        }
    }
}
