//! Protobuf JSON mapping.
//!
//! Reference: <https://protobuf.dev/programming-guides/proto3/#json>
//!
//! Messages become objects keyed by lowerCamelCase field names, enum values
//! are written as symbols, 64-bit integers as decimal strings and repeated
//! fields as arrays. Default values are left out unless
//! [`MarshalOptions::emit_defaults`] is set.

pub mod fields;
mod options;
mod writer;

pub use options::{MarshalOptions, UnmarshalOptions};
pub use writer::ObjectWriter;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use tracing::trace;

use crate::error::{DecodeError, EncodeError};
use crate::message::Message;

/// A message that has a JSON representation.
pub trait JsonMessage: Message {
    /// Writes every field through `out`, which decides naming and omission.
    fn write_json(&self, out: &mut ObjectWriter<'_>);

    /// Applies one member of the input object. Returns `Ok(false)` when `key`
    /// names no field of this message.
    fn merge_json_field(
        &mut self,
        key: &str,
        value: Value,
        options: &UnmarshalOptions,
    ) -> Result<bool, DecodeError>;

    fn to_json_value(&self, options: &MarshalOptions) -> Value {
        let mut out = ObjectWriter::new(options);
        self.write_json(&mut out);
        out.finish()
    }

    /// Merges a JSON object: present fields overwrite, repeated fields are
    /// replaced, sub-messages merge recursively. `null` leaves the message
    /// as it is.
    fn merge_json_value(&mut self, value: Value, options: &UnmarshalOptions) -> Result<(), DecodeError> {
        let members = match value {
            Value::Object(members) => members,
            Value::Null => return Ok(()),
            _ => return Err(DecodeError::NotAnObject(self.full_name())),
        };
        for (key, value) in members {
            if self.merge_json_field(&key, value, options)? {
                continue;
            }
            if !options.allow_unknown_fields {
                return Err(DecodeError::UnknownField {
                    message: self.full_name(),
                    field: key,
                });
            }
            trace!(message = self.full_name(), field = %key, "ignored unknown JSON field");
        }
        Ok(())
    }
}

/// Renders `message` as JSON text.
pub fn to_string<M: JsonMessage + ?Sized>(
    message: &M,
    options: &MarshalOptions,
) -> Result<String, EncodeError> {
    let value = message.to_json_value(options);
    if options.indent.is_empty() {
        return Ok(serde_json::to_string(&value)?);
    }
    let mut out = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(options.indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Parses `text` and merges it into `message`.
pub fn merge_str<M: JsonMessage + ?Sized>(
    text: &str,
    message: &mut M,
    options: &UnmarshalOptions,
) -> Result<(), DecodeError> {
    let value: Value = serde_json::from_str(text)?;
    message.merge_json_value(value, options)
}

/// Parses `text` into a fresh message.
pub fn from_str<M: JsonMessage + Default>(
    text: &str,
    options: &UnmarshalOptions,
) -> Result<M, DecodeError> {
    let mut message = M::default();
    merge_str(text, &mut message, options)?;
    Ok(message)
}
