//! Protocol Buffers (proto3) codecs for hand-written message types.
//!
//! Message types implement a handful of schema-specific hooks ([`Message`],
//! [`JsonMessage`], [`TextFormat`]), usually in the shape a code generator
//! would emit, and get three representations from this crate:
//!
//! - the binary wire format ([`Message::encode_to_vec`], [`Message::decode`])
//! - the JSON mapping ([`json::to_string`], [`json::from_str`])
//! - the compact debug text format ([`text_format::to_string`])
//!
//! [`codecs`] puts the first two behind a common [`MessageCodec`] trait and
//! [`file`] persists binary encodings.

mod constants;
mod error;
mod field;
mod message;
mod unknown;

pub mod codecs;
pub mod encoding;
pub mod file;
pub mod json;
pub mod text_format;
pub mod wire;

pub use constants::{EncodingFormat, MAX_FIELD_NUMBER, MAX_MESSAGE_SIZE, RECURSION_LIMIT};
pub use error::{DecodeError, EncodeError, ProtoError};
pub use field::Field;
pub use message::{Enumeration, Message};
pub use unknown::UnknownFields;

pub use codecs::{BinaryCodec, CodecError, Codecs, MessageCodec, ProtoMessage, TextCodec};
pub use json::{JsonMessage, MarshalOptions, UnmarshalOptions};
pub use text_format::TextFormat;
pub use wire::{DecodeContext, WireType};

pub use proto_pack_buffers::{Reader, Writer};
