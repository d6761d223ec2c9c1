//! `example.simple`
//!
//! ```proto
//! message SimpleMessage {
//!   int64 id = 1;
//!   bool is_simple = 2;
//!   string name = 3;
//!   repeated int32 sample_list = 4;
//! }
//! ```

use std::fmt;

use proto_pack::encoding::{boolean, int32, int64, string};
use proto_pack::json::{fields, ObjectWriter};
use proto_pack::text_format::{self, TextWriter};
use proto_pack::{
    DecodeContext, DecodeError, Field, JsonMessage, Message, Reader, TextFormat, UnknownFields,
    UnmarshalOptions, WireType, Writer,
};
use serde_json::Value;

const ID: Field = Field::new(1, "id", "id");
const IS_SIMPLE: Field = Field::new(2, "is_simple", "isSimple");
const NAME: Field = Field::new(3, "name", "name");
const SAMPLE_LIST: Field = Field::new(4, "sample_list", "sampleList");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleMessage {
    pub id: i64,
    pub is_simple: bool,
    pub name: String,
    pub sample_list: Vec<i32>,
    pub unknown_fields: UnknownFields,
}

impl Message for SimpleMessage {
    fn full_name(&self) -> &'static str {
        "example.simple.SimpleMessage"
    }

    fn encode_raw(&self, writer: &mut Writer) {
        if self.id != 0 {
            int64::encode(&ID, self.id, writer);
        }
        if self.is_simple {
            boolean::encode(&IS_SIMPLE, self.is_simple, writer);
        }
        if !self.name.is_empty() {
            string::encode(&NAME, &self.name, writer);
        }
        int32::encode_packed(&SAMPLE_LIST, &self.sample_list, writer);
        self.unknown_fields.encode(writer);
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if self.id != 0 {
            len += int64::encoded_len(&ID, self.id);
        }
        if self.is_simple {
            len += boolean::encoded_len(&IS_SIMPLE, self.is_simple);
        }
        if !self.name.is_empty() {
            len += string::encoded_len(&NAME, &self.name);
        }
        len += int32::encoded_len_packed(&SAMPLE_LIST, &self.sample_list);
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
            1 => int64::merge(&ID, wire_type, &mut self.id, reader),
            2 => boolean::merge(&IS_SIMPLE, wire_type, &mut self.is_simple, reader),
            3 => string::merge(&NAME, wire_type, &mut self.name, reader),
            4 => int32::merge_repeated(&SAMPLE_LIST, wire_type, &mut self.sample_list, reader),
            _ => self
                .unknown_fields
                .merge_field(number, wire_type, reader, ctx),
        }
    }

    fn clear(&mut self) {
        *self = SimpleMessage::default();
    }
}

impl JsonMessage for SimpleMessage {
    fn write_json(&self, out: &mut ObjectWriter<'_>) {
        out.int64(&ID, self.id);
        out.bool(&IS_SIMPLE, self.is_simple);
        out.string(&NAME, &self.name);
        out.repeated_int32(&SAMPLE_LIST, &self.sample_list);
    }

    fn merge_json_field(
        &mut self,
        key: &str,
        value: Value,
        _options: &UnmarshalOptions,
    ) -> Result<bool, DecodeError> {
        if ID.matches(key) {
            if let Some(v) = fields::int64(&ID, value)? {
                self.id = v;
            }
        } else if IS_SIMPLE.matches(key) {
            if let Some(v) = fields::bool(&IS_SIMPLE, value)? {
                self.is_simple = v;
            }
        } else if NAME.matches(key) {
            if let Some(v) = fields::string(&NAME, value)? {
                self.name = v;
            }
        } else if SAMPLE_LIST.matches(key) {
            if let Some(v) = fields::repeated_int32(&SAMPLE_LIST, value)? {
                self.sample_list = v;
            }
        } else {
            return Ok(false);
        }
        Ok(true)
    }
}

impl TextFormat for SimpleMessage {
    fn write_text(&self, out: &mut TextWriter) {
        out.int64(&ID, self.id);
        out.bool(&IS_SIMPLE, self.is_simple);
        out.string(&NAME, &self.name);
        out.repeated_int32(&SAMPLE_LIST, &self.sample_list);
    }
}

impl fmt::Display for SimpleMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&text_format::to_string(self))
    }
}
