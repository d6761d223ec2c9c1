//! Top-level constants for proto-pack.

/// Serialized representation produced by a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingFormat {
    Binary = 0,
    Json = 1,
}

/// Nesting depth at which decoding gives up.
pub const RECURSION_LIMIT: u32 = 100;

/// Largest field number a `.proto` schema may declare.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Protobuf messages are limited to 2 GiB.
pub const MAX_MESSAGE_SIZE: usize = i32::MAX as usize;
