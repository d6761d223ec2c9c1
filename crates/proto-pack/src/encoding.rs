//! Per-kind field encoders and decoders used by message implementations.
//!
//! Each submodule covers one proto3 scalar or composite kind and offers the
//! same trio: `encode` writes key and value, `encoded_len` sizes it, `merge`
//! reads a value whose key has already been consumed. Callers skip
//! default-valued singular fields themselves, as proto3 requires.

use proto_pack_buffers::{varint_len, Reader, Writer};

use crate::error::DecodeError;
use crate::field::Field;
use crate::message::Message;
use crate::wire::{check_wire_type, encode_key, key_len, length_delimited, DecodeContext, WireType};

/// Length of a length-delimited payload plus its prefix.
#[inline]
fn delimited_len(payload: usize) -> usize {
    varint_len(payload as u64) + payload
}

pub mod int64 {
    use super::*;

    pub fn encode(field: &Field, value: i64, writer: &mut Writer) {
        encode_key(field.number, WireType::Varint, writer);
        writer.varint(value as u64);
    }

    pub fn encoded_len(field: &Field, value: i64) -> usize {
        key_len(field.number) + varint_len(value as u64)
    }

    pub fn merge(
        field: &Field,
        wire_type: WireType,
        value: &mut i64,
        reader: &mut Reader<'_>,
    ) -> Result<(), DecodeError> {
        check_wire_type(field.name, WireType::Varint, wire_type)?;
        *value = reader.varint()? as i64;
        Ok(())
    }
}

/// `int32` values are sign-extended to 64 bits on the wire, so negative
/// numbers always take ten bytes.
pub mod int32 {
    use super::*;

    #[inline]
    fn widen(value: i32) -> u64 {
        value as i64 as u64
    }

    pub fn encode(field: &Field, value: i32, writer: &mut Writer) {
        encode_key(field.number, WireType::Varint, writer);
        writer.varint(widen(value));
    }

    pub fn encoded_len(field: &Field, value: i32) -> usize {
        key_len(field.number) + varint_len(widen(value))
    }

    pub fn merge(
        field: &Field,
        wire_type: WireType,
        value: &mut i32,
        reader: &mut Reader<'_>,
    ) -> Result<(), DecodeError> {
        check_wire_type(field.name, WireType::Varint, wire_type)?;
        *value = reader.varint()? as i32;
        Ok(())
    }

    /// Writes a packed run. Nothing is written for an empty slice.
    pub fn encode_packed(field: &Field, values: &[i32], writer: &mut Writer) {
        if values.is_empty() {
            return;
        }
        encode_key(field.number, WireType::LengthDelimited, writer);
        writer.varint(packed_payload_len(values) as u64);
        for &value in values {
            writer.varint(widen(value));
        }
    }

    pub fn encoded_len_packed(field: &Field, values: &[i32]) -> usize {
        if values.is_empty() {
            return 0;
        }
        key_len(field.number) + delimited_len(packed_payload_len(values))
    }

    fn packed_payload_len(values: &[i32]) -> usize {
        values.iter().map(|&v| varint_len(widen(v))).sum()
    }

    /// Appends to `values`; accepts both packed and unpacked encodings.
    pub fn merge_repeated(
        field: &Field,
        wire_type: WireType,
        values: &mut Vec<i32>,
        reader: &mut Reader<'_>,
    ) -> Result<(), DecodeError> {
        if wire_type == WireType::LengthDelimited {
            let mut packed = length_delimited(reader)?;
            while !packed.is_empty() {
                values.push(packed.varint()? as i32);
            }
            return Ok(());
        }
        let mut value = 0;
        merge(field, wire_type, &mut value, reader)?;
        values.push(value);
        Ok(())
    }
}

/// Enumerations travel as `int32`; the raw number is kept so unrecognized
/// values survive a round trip.
pub mod enumeration {
    pub use super::int32::{encode, encoded_len, merge};
}

pub mod boolean {
    use super::*;

    pub fn encode(field: &Field, value: bool, writer: &mut Writer) {
        encode_key(field.number, WireType::Varint, writer);
        writer.u8(value as u8);
    }

    pub fn encoded_len(field: &Field, _value: bool) -> usize {
        key_len(field.number) + 1
    }

    pub fn merge(
        field: &Field,
        wire_type: WireType,
        value: &mut bool,
        reader: &mut Reader<'_>,
    ) -> Result<(), DecodeError> {
        check_wire_type(field.name, WireType::Varint, wire_type)?;
        *value = reader.varint()? != 0;
        Ok(())
    }
}

pub mod string {
    use super::*;

    pub fn encode(field: &Field, value: &str, writer: &mut Writer) {
        encode_key(field.number, WireType::LengthDelimited, writer);
        writer.varint(value.len() as u64);
        writer.utf8(value);
    }

    pub fn encoded_len(field: &Field, value: &str) -> usize {
        key_len(field.number) + delimited_len(value.len())
    }

    pub fn merge(
        field: &Field,
        wire_type: WireType,
        value: &mut String,
        reader: &mut Reader<'_>,
    ) -> Result<(), DecodeError> {
        check_wire_type(field.name, WireType::LengthDelimited, wire_type)?;
        let mut payload = length_delimited(reader)?;
        let text = payload.utf8(payload.size())?;
        value.clear();
        value.push_str(text);
        Ok(())
    }
}

pub mod message {
    use super::*;

    pub fn encode<M: Message + ?Sized>(field: &Field, msg: &M, writer: &mut Writer) {
        encode_key(field.number, WireType::LengthDelimited, writer);
        writer.varint(msg.encoded_len() as u64);
        msg.encode_raw(writer);
    }

    pub fn encoded_len<M: Message + ?Sized>(field: &Field, msg: &M) -> usize {
        key_len(field.number) + delimited_len(msg.encoded_len())
    }

    /// Merges the payload into `msg`: scalars overwrite, lists append.
    pub fn merge<M: Message + ?Sized>(
        field: &Field,
        wire_type: WireType,
        msg: &mut M,
        reader: &mut Reader<'_>,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        check_wire_type(field.name, WireType::LengthDelimited, wire_type)?;
        ctx.limit_reached()?;
        let mut payload = length_delimited(reader)?;
        msg.merge_from(&mut payload, ctx.enter_recursion())
    }

    /// Merges into an optional sub-message. An unset target stays unset when
    /// the payload fails to decode.
    pub fn merge_optional<M: Message + Default>(
        field: &Field,
        wire_type: WireType,
        target: &mut Option<M>,
        reader: &mut Reader<'_>,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        if let Some(msg) = target {
            return merge(field, wire_type, msg, reader, ctx);
        }
        let mut msg = M::default();
        merge(field, wire_type, &mut msg, reader, ctx)?;
        *target = Some(msg);
        Ok(())
    }

    pub fn encode_repeated<M: Message>(field: &Field, msgs: &[M], writer: &mut Writer) {
        for msg in msgs {
            encode(field, msg, writer);
        }
    }

    pub fn encoded_len_repeated<M: Message>(field: &Field, msgs: &[M]) -> usize {
        msgs.iter().map(|msg| encoded_len(field, msg)).sum()
    }

    pub fn merge_repeated<M: Message + Default>(
        field: &Field,
        wire_type: WireType,
        msgs: &mut Vec<M>,
        reader: &mut Reader<'_>,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        let mut msg = M::default();
        merge(field, wire_type, &mut msg, reader, ctx)?;
        msgs.push(msg);
        Ok(())
    }
}
