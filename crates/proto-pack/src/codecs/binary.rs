//! Protobuf wire-format codec.

use proto_pack_buffers::print_octets_default;
use tracing::{debug, trace};

use super::types::{CodecError, MessageCodec, ProtoMessage};
use crate::message::Message;
use crate::EncodingFormat;

#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

impl BinaryCodec {
    pub fn new() -> Self {
        Self
    }
}

impl MessageCodec for BinaryCodec {
    fn id(&self) -> &'static str {
        "binary"
    }

    fn format(&self) -> EncodingFormat {
        EncodingFormat::Binary
    }

    fn encode(&self, message: &dyn ProtoMessage) -> Result<Vec<u8>, CodecError> {
        let bytes = message.encode_to_vec()?;
        debug!(message = message.full_name(), size = bytes.len(), "binary encode");
        trace!(octets = %print_octets_default(&bytes));
        Ok(bytes)
    }

    fn merge_into(&self, bytes: &[u8], message: &mut dyn ProtoMessage) -> Result<(), CodecError> {
        trace!(octets = %print_octets_default(bytes));
        message.merge(bytes)?;
        debug!(message = message.full_name(), size = bytes.len(), "binary decode");
        Ok(())
    }
}
