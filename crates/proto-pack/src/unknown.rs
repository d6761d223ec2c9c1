//! Storage for fields a message does not recognize.

use proto_pack_buffers::{Reader, Writer};
use tracing::trace;

use crate::error::DecodeError;
use crate::wire::{encode_key, skip_field, DecodeContext, WireType};

/// Raw bytes of unrecognized fields, kept in arrival order and written back
/// verbatim after the known fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownFields {
    raw: Vec<u8>,
}

impl UnknownFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Skips the field at `reader` and records its key and value.
    pub fn merge_field(
        &mut self,
        number: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        let start = reader.x;
        skip_field(number, wire_type, reader, ctx)?;
        let mut key = Writer::with_capacity(5);
        encode_key(number, wire_type, &mut key);
        self.raw.extend_from_slice(key.as_slice());
        self.raw.extend_from_slice(reader.since(start));
        trace!(number, ?wire_type, "kept unknown field");
        Ok(())
    }

    pub fn encode(&self, writer: &mut Writer) {
        writer.buf(&self.raw);
    }

    pub fn encoded_len(&self) -> usize {
        self.raw.len()
    }
}
