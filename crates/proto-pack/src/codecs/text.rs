//! Protobuf JSON codec.

use tracing::debug;

use super::types::{CodecError, MessageCodec, ProtoMessage};
use crate::error::DecodeError;
use crate::json::{self, MarshalOptions, UnmarshalOptions};
use crate::message::Message;
use crate::EncodingFormat;

/// JSON codec carrying its marshal and unmarshal options.
#[derive(Debug, Clone, Default)]
pub struct TextCodec {
    pub marshal: MarshalOptions,
    pub unmarshal: UnmarshalOptions,
}

impl TextCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-printing codec, e.g. `TextCodec::with_indent("    ")`.
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            marshal: MarshalOptions::new().with_indent(indent),
            unmarshal: UnmarshalOptions::new(),
        }
    }

    pub fn to_text(&self, message: &dyn ProtoMessage) -> Result<String, CodecError> {
        let text = json::to_string(message, &self.marshal)?;
        debug!(message = message.full_name(), size = text.len(), "json encode");
        Ok(text)
    }

    pub fn merge_text(&self, text: &str, message: &mut dyn ProtoMessage) -> Result<(), CodecError> {
        json::merge_str(text, message, &self.unmarshal)?;
        debug!(message = message.full_name(), size = text.len(), "json decode");
        Ok(())
    }

    pub fn from_text<M: ProtoMessage + Default>(&self, text: &str) -> Result<M, CodecError> {
        let mut message = M::default();
        self.merge_text(text, &mut message)?;
        Ok(message)
    }
}

impl MessageCodec for TextCodec {
    fn id(&self) -> &'static str {
        "json"
    }

    fn format(&self) -> EncodingFormat {
        EncodingFormat::Json
    }

    fn encode(&self, message: &dyn ProtoMessage) -> Result<Vec<u8>, CodecError> {
        self.to_text(message).map(String::into_bytes)
    }

    fn merge_into(&self, bytes: &[u8], message: &mut dyn ProtoMessage) -> Result<(), CodecError> {
        let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)?;
        self.merge_text(text, message)
    }
}
