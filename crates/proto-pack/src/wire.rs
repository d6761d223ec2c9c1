//! Protobuf wire-level framing: field keys, wire types and field skipping.
//!
//! Reference: <https://protobuf.dev/programming-guides/encoding/>

use proto_pack_buffers::{Reader, Writer};

use crate::constants::{MAX_FIELD_NUMBER, RECURSION_LIMIT};
use crate::error::DecodeError;

/// The 3-bit framing selector carried in every field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl TryFrom<u64> for WireType {
    type Error = DecodeError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            3 => Ok(WireType::StartGroup),
            4 => Ok(WireType::EndGroup),
            5 => Ok(WireType::Fixed32),
            _ => Err(DecodeError::InvalidWireType(value)),
        }
    }
}

/// Recursion budget threaded through nested message decoding.
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext {
    depth: u32,
}

impl Default for DecodeContext {
    fn default() -> Self {
        Self {
            depth: RECURSION_LIMIT,
        }
    }
}

impl DecodeContext {
    /// Context for the next nesting level.
    pub fn enter_recursion(self) -> Self {
        Self {
            depth: self.depth.saturating_sub(1),
        }
    }

    pub fn limit_reached(self) -> Result<(), DecodeError> {
        if self.depth == 0 {
            return Err(DecodeError::RecursionLimit);
        }
        Ok(())
    }
}

/// Writes a field key: `(number << 3) | wire_type`.
#[inline]
pub fn encode_key(number: u32, wire_type: WireType, writer: &mut Writer) {
    writer.varint(((number as u64) << 3) | wire_type as u64);
}

/// Reads a field key, validating both halves.
pub fn decode_key(reader: &mut Reader<'_>) -> Result<(u32, WireType), DecodeError> {
    let key = reader.varint()?;
    if key > u32::MAX as u64 {
        return Err(DecodeError::InvalidFieldNumber(key >> 3));
    }
    let wire_type = WireType::try_from(key & 0x07)?;
    let number = key >> 3;
    if number == 0 || number > MAX_FIELD_NUMBER as u64 {
        return Err(DecodeError::InvalidFieldNumber(number));
    }
    Ok((number as u32, wire_type))
}

/// Encoded size of a field key.
#[inline]
pub fn key_len(number: u32) -> usize {
    proto_pack_buffers::varint_len((number as u64) << 3)
}

/// Fails with [`DecodeError::WireTypeMismatch`] unless `actual == expected`.
#[inline]
pub fn check_wire_type(
    field: &'static str,
    expected: WireType,
    actual: WireType,
) -> Result<(), DecodeError> {
    if expected != actual {
        return Err(DecodeError::WireTypeMismatch {
            field,
            expected: expected as u8,
            actual: actual as u8,
        });
    }
    Ok(())
}

/// Reads a length prefix and returns a reader bounded to the payload.
pub fn length_delimited<'a>(reader: &mut Reader<'a>) -> Result<Reader<'a>, DecodeError> {
    let len = reader.varint()?;
    if len > reader.size() as u64 {
        return Err(DecodeError::InvalidLength(len));
    }
    Ok(reader.cut(len as usize)?)
}

/// Advances past the value of a field whose key has already been read.
pub fn skip_field(
    number: u32,
    wire_type: WireType,
    reader: &mut Reader<'_>,
    ctx: DecodeContext,
) -> Result<(), DecodeError> {
    match wire_type {
        WireType::Varint => {
            reader.varint()?;
        }
        WireType::Fixed64 => reader.skip(8)?,
        WireType::Fixed32 => reader.skip(4)?,
        WireType::LengthDelimited => {
            length_delimited(reader)?;
        }
        WireType::StartGroup => {
            ctx.limit_reached()?;
            loop {
                let (inner, inner_type) = decode_key(reader)?;
                if inner_type == WireType::EndGroup {
                    if inner != number {
                        return Err(DecodeError::UnexpectedEndGroup(inner));
                    }
                    break;
                }
                skip_field(inner, inner_type, reader, ctx.enter_recursion())?;
            }
        }
        WireType::EndGroup => return Err(DecodeError::UnexpectedEndGroup(number)),
    }
    Ok(())
}
