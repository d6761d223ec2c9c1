//! `example.complex`
//!
//! ```proto
//! message ComplexMessage {
//!   DummyMessage one_dummy = 2;
//!   repeated DummyMessage multiple_dummy = 3;
//! }
//!
//! message DummyMessage {
//!   int32 id = 1;
//!   string name = 2;
//! }
//! ```

use std::fmt;

use proto_pack::encoding::{int32, message, string};
use proto_pack::json::{fields, ObjectWriter};
use proto_pack::text_format::{self, TextWriter};
use proto_pack::{
    DecodeContext, DecodeError, Field, JsonMessage, Message, Reader, TextFormat, UnknownFields,
    UnmarshalOptions, WireType, Writer,
};
use serde_json::Value;

const DUMMY_ID: Field = Field::new(1, "id", "id");
const DUMMY_NAME: Field = Field::new(2, "name", "name");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DummyMessage {
    pub id: i32,
    pub name: String,
    pub unknown_fields: UnknownFields,
}

impl DummyMessage {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            unknown_fields: UnknownFields::default(),
        }
    }
}

impl Message for DummyMessage {
    fn full_name(&self) -> &'static str {
        "example.complex.DummyMessage"
    }

    fn encode_raw(&self, writer: &mut Writer) {
        if self.id != 0 {
            int32::encode(&DUMMY_ID, self.id, writer);
        }
        if !self.name.is_empty() {
            string::encode(&DUMMY_NAME, &self.name, writer);
        }
        self.unknown_fields.encode(writer);
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if self.id != 0 {
            len += int32::encoded_len(&DUMMY_ID, self.id);
        }
        if !self.name.is_empty() {
            len += string::encoded_len(&DUMMY_NAME, &self.name);
        }
        len + self.unknown_fields.encoded_len()
    }

    fn merge_field(
        &mut self,
        number: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match number {
            1 => int32::merge(&DUMMY_ID, wire_type, &mut self.id, reader),
            2 => string::merge(&DUMMY_NAME, wire_type, &mut self.name, reader),
            _ => self
                .unknown_fields
                .merge_field(number, wire_type, reader, ctx),
        }
    }

    fn clear(&mut self) {
        *self = DummyMessage::default();
    }
}

impl JsonMessage for DummyMessage {
    fn write_json(&self, out: &mut ObjectWriter<'_>) {
        out.int32(&DUMMY_ID, self.id);
        out.string(&DUMMY_NAME, &self.name);
    }

    fn merge_json_field(
        &mut self,
        key: &str,
        value: Value,
        _options: &UnmarshalOptions,
    ) -> Result<bool, DecodeError> {
        if DUMMY_ID.matches(key) {
            if let Some(v) = fields::int32(&DUMMY_ID, value)? {
                self.id = v;
            }
        } else if DUMMY_NAME.matches(key) {
            if let Some(v) = fields::string(&DUMMY_NAME, value)? {
                self.name = v;
            }
        } else {
            return Ok(false);
        }
        Ok(true)
    }
}

impl TextFormat for DummyMessage {
    fn write_text(&self, out: &mut TextWriter) {
        out.int32(&DUMMY_ID, self.id);
        out.string(&DUMMY_NAME, &self.name);
    }
}

impl fmt::Display for DummyMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&text_format::to_string(self))
    }
}

const ONE_DUMMY: Field = Field::new(2, "one_dummy", "oneDummy");
const MULTIPLE_DUMMY: Field = Field::new(3, "multiple_dummy", "multipleDummy");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplexMessage {
    pub one_dummy: Option<DummyMessage>,
    pub multiple_dummy: Vec<DummyMessage>,
    pub unknown_fields: UnknownFields,
}

impl Message for ComplexMessage {
    fn full_name(&self) -> &'static str {
        "example.complex.ComplexMessage"
    }

    fn encode_raw(&self, writer: &mut Writer) {
        if let Some(one) = &self.one_dummy {
            message::encode(&ONE_DUMMY, one, writer);
        }
        message::encode_repeated(&MULTIPLE_DUMMY, &self.multiple_dummy, writer);
        self.unknown_fields.encode(writer);
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if let Some(one) = &self.one_dummy {
            len += message::encoded_len(&ONE_DUMMY, one);
        }
        len += message::encoded_len_repeated(&MULTIPLE_DUMMY, &self.multiple_dummy);
        len + self.unknown_fields.encoded_len()
    }

    fn merge_field(
        &mut self,
        number: u32,
        wire_type: WireType,
        reader: &mut Reader<'_>,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match number {
            2 => message::merge_optional(&ONE_DUMMY, wire_type, &mut self.one_dummy, reader, ctx),
            3 => message::merge_repeated(
                &MULTIPLE_DUMMY,
                wire_type,
                &mut self.multiple_dummy,
                reader,
                ctx,
            ),
            _ => self
                .unknown_fields
                .merge_field(number, wire_type, reader, ctx),
        }
    }

    fn clear(&mut self) {
        *self = ComplexMessage::default();
    }
}

impl JsonMessage for ComplexMessage {
    fn write_json(&self, out: &mut ObjectWriter<'_>) {
        out.message(&ONE_DUMMY, self.one_dummy.as_ref());
        out.repeated_message(&MULTIPLE_DUMMY, &self.multiple_dummy);
    }

    fn merge_json_field(
        &mut self,
        key: &str,
        value: Value,
        options: &UnmarshalOptions,
    ) -> Result<bool, DecodeError> {
        if ONE_DUMMY.matches(key) {
            fields::merge_message(&ONE_DUMMY, value, &mut self.one_dummy, options)?;
        } else if MULTIPLE_DUMMY.matches(key) {
            if let Some(v) = fields::repeated_message(&MULTIPLE_DUMMY, value, options)? {
                self.multiple_dummy = v;
            }
        } else {
            return Ok(false);
        }
        Ok(true)
    }
}

impl TextFormat for ComplexMessage {
    fn write_text(&self, out: &mut TextWriter) {
        out.message(&ONE_DUMMY, self.one_dummy.as_ref());
        out.repeated_message(&MULTIPLE_DUMMY, &self.multiple_dummy);
    }
}

impl fmt::Display for ComplexMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&text_format::to_string(self))
    }
}
