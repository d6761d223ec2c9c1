//! Binary buffer utilities for proto-pack.
//!
//! This crate provides the byte-level plumbing the protobuf codecs are built
//! on: a bounds-checked cursor reader, an auto-growing writer and base-128
//! varint primitives.
//!
//! # Overview
//!
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`varint_len`] - Number of bytes a value occupies as a varint
//! - [`print_octets`] - Hex dump helper for diagnostics
//!
//! # Example
//!
//! ```
//! use proto_pack_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x08);
//! writer.varint(12345);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x08);
//! assert_eq!(reader.varint().unwrap(), 12345);
//! assert_eq!(reader.utf8(5).unwrap(), "hello");
//! assert!(reader.is_empty());
//! ```

mod print_octets;
mod reader;
mod varint;
mod writer;

pub use print_octets::{print_octets, print_octets_default};
pub use reader::Reader;
pub use varint::{varint_len, MAX_VARINT_LEN};
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer,
    /// Invalid UTF-8 sequence.
    InvalidUtf8,
    /// Varint longer than ten bytes or overflowing 64 bits.
    VarintOverflow,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
            BufferError::InvalidUtf8 => write!(f, "invalid UTF-8 sequence"),
            BufferError::VarintOverflow => write!(f, "varint overflows 64 bits"),
        }
    }
}

impl std::error::Error for BufferError {}
