//! Error taxonomy shared by the binary and JSON codecs.

use std::path::PathBuf;

use proto_pack_buffers::BufferError;
use thiserror::Error;

/// A message could not be serialized.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("encoded message of {size} bytes exceeds the 2 GiB limit")]
    TooLarge { size: usize },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input bytes or text could not be turned into a message.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("varint overflows 64 bits")]
    VarintOverflow,
    #[error("invalid UTF-8 in string field")]
    InvalidUtf8,
    #[error("invalid wire type {0}")]
    InvalidWireType(u64),
    #[error("invalid field number {0}")]
    InvalidFieldNumber(u64),
    #[error("field {field}: expected wire type {expected}, got {actual}")]
    WireTypeMismatch {
        field: &'static str,
        expected: u8,
        actual: u8,
    },
    #[error("length {0} does not fit the remaining input")]
    InvalidLength(u64),
    #[error("unexpected end-group tag for field {0}")]
    UnexpectedEndGroup(u32),
    #[error("recursion limit reached")]
    RecursionLimit,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object for message {0}")]
    NotAnObject(&'static str),
    #[error("unknown field {field:?} in message {message}")]
    UnknownField {
        message: &'static str,
        field: String,
    },
    #[error("field {field}: expected {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
    #[error("field {field}: value {value} is out of range")]
    OutOfRange { field: &'static str, value: String },
    #[error("field {field}: unknown enum symbol {symbol:?}")]
    UnknownEnumSymbol { field: &'static str, symbol: String },
}

impl From<BufferError> for DecodeError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => DecodeError::UnexpectedEof,
            BufferError::InvalidUtf8 => DecodeError::InvalidUtf8,
            BufferError::VarintOverflow => DecodeError::VarintOverflow,
        }
    }
}

/// Errors from the file persistence helpers.
#[derive(Debug, Error)]
pub enum ProtoError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
