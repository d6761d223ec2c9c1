//! Common codec traits and errors.

use crate::error::{DecodeError, EncodeError};
use crate::json::JsonMessage;
use crate::message::Message;
use crate::text_format::TextFormat;
use crate::EncodingFormat;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("encode failed: {0}")]
    Encode(#[from] EncodeError),
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Everything a message needs to go through any codec: binary wire format,
/// JSON mapping and the compact text format.
pub trait ProtoMessage: JsonMessage + TextFormat {}

impl<T: JsonMessage + TextFormat + ?Sized> ProtoMessage for T {}

/// Trait for codecs that turn messages into bytes and back.
pub trait MessageCodec {
    fn id(&self) -> &'static str;
    fn format(&self) -> EncodingFormat;
    fn encode(&self, message: &dyn ProtoMessage) -> Result<Vec<u8>, CodecError>;

    /// Merges `bytes` into `message` without clearing it first.
    fn merge_into(&self, bytes: &[u8], message: &mut dyn ProtoMessage) -> Result<(), CodecError>;

    /// Replaces the contents of `message` with the decoded value.
    fn decode_into(&self, bytes: &[u8], message: &mut dyn ProtoMessage) -> Result<(), CodecError> {
        message.clear();
        self.merge_into(bytes, message)
    }

    fn decode<M: ProtoMessage + Default>(&self, bytes: &[u8]) -> Result<M, CodecError>
    where
        Self: Sized,
    {
        let mut message = M::default();
        self.merge_into(bytes, &mut message)?;
        Ok(message)
    }
}
