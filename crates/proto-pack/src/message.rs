//! The binary message capability and enumeration support.

use std::fmt;

use proto_pack_buffers::{Reader, Writer};
use tracing::trace;

use crate::constants::MAX_MESSAGE_SIZE;
use crate::error::{DecodeError, EncodeError};
use crate::wire::{decode_key, DecodeContext, WireType};

/// A message that can be written to and read from the protobuf wire format.
///
/// Implementations provide the four schema-specific hooks; everything else is
/// derived. The trait is object safe so heterogeneous messages can be handled
/// as `&dyn Message`.
pub trait Message: fmt::Debug + Send + Sync {
    /// Fully qualified schema name, e.g. `example.simple.SimpleMessage`.
    fn full_name(&self) -> &'static str;

    /// Writes every non-default field, in field-number order, without any
    /// length prefix.
    fn encode_raw(&self, writer: &mut Writer);

    /// Exact number of bytes [`Message::encode_raw`] will write.
    fn encoded_len(&self) -> usize;

    /// Reads one field whose key has already been consumed.
    fn merge_field(
        &mut self,
        number: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError>;

    /// Resets every field to its default.
    fn clear(&mut self);

    fn encode(&self, writer: &mut Writer) -> Result<(), EncodeError> {
        checked_len(self.encoded_len())?;
        self.encode_raw(writer);
        Ok(())
    }

    fn encode_to_vec(&self) -> Result<Vec<u8>, EncodeError> {
        let size = checked_len(self.encoded_len())?;
        let mut writer = Writer::with_capacity(size);
        self.encode_raw(&mut writer);
        trace!(message = self.full_name(), size = writer.len(), "encoded message");
        Ok(writer.flush())
    }

    /// Reads fields until `reader` is exhausted.
    fn merge_from(&mut self, reader: &mut Reader<'_>, ctx: DecodeContext) -> Result<(), DecodeError> {
        while !reader.is_empty() {
            let (number, wire_type) = decode_key(reader)?;
            self.merge_field(number, wire_type, reader, ctx)?;
        }
        Ok(())
    }

    /// Merges an encoded message into `self`: present scalars overwrite,
    /// repeated fields append and sub-messages merge recursively.
    fn merge(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        let mut reader = Reader::new(bytes);
        self.merge_from(&mut reader, DecodeContext::default())
    }

    /// Decodes a fresh message. Empty input yields the default message.
    fn decode(bytes: &[u8]) -> Result<Self, DecodeError>
    where
        Self: Default + Sized,
    {
        let mut message = Self::default();
        message.merge(bytes)?;
        Ok(message)
    }
}

/// Rejects sizes over the 2 GiB limit before anything is allocated.
fn checked_len(size: usize) -> Result<usize, EncodeError> {
    if size > MAX_MESSAGE_SIZE {
        return Err(EncodeError::TooLarge { size });
    }
    Ok(size)
}

/// A closed set of named `int32` constants.
///
/// Message fields store the raw number so values outside the declared set
/// are kept rather than rejected.
pub trait Enumeration: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    fn from_i32(value: i32) -> Option<Self>;

    fn to_i32(self) -> i32;

    /// The symbol as written in the schema, e.g. `THURSDAY`.
    fn as_str_name(self) -> &'static str;

    fn from_str_name(name: &str) -> Option<Self>;

    /// Symbol for a raw number, `None` when the number is unrecognized.
    fn symbol_of(value: i32) -> Option<&'static str> {
        Self::from_i32(value).map(Self::as_str_name)
    }
}
