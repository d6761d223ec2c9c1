//! A recursive test schema:
//!
//! ```proto
//! enum Priority { PRIORITY_UNSPECIFIED = 0; LOW = 1; HIGH = 2; }
//! message Node {
//!   int64 id = 1;
//!   string display_label = 2;
//!   repeated int32 weights = 3;
//!   Priority priority = 4;
//!   Node child = 5;
//! }
//! ```
#![allow(dead_code)]

use proto_pack::encoding::{enumeration, int32, int64, message, string};
use proto_pack::json::{fields, ObjectWriter};
use proto_pack::text_format::TextWriter;
use proto_pack::{
    DecodeContext, DecodeError, Enumeration, Field, JsonMessage, Message, Reader, TextFormat,
    UnknownFields, UnmarshalOptions, WireType, Writer,
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Priority {
    Unspecified = 0,
    Low = 1,
    High = 2,
}

impl Enumeration for Priority {
    fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Priority::Unspecified),
            1 => Some(Priority::Low),
            2 => Some(Priority::High),
            _ => None,
        }
    }

    fn to_i32(self) -> i32 {
        self as i32
    }

    fn as_str_name(self) -> &'static str {
        match self {
            Priority::Unspecified => "PRIORITY_UNSPECIFIED",
            Priority::Low => "LOW",
            Priority::High => "HIGH",
        }
    }

    fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "PRIORITY_UNSPECIFIED" => Some(Priority::Unspecified),
            "LOW" => Some(Priority::Low),
            "HIGH" => Some(Priority::High),
            _ => None,
        }
    }
}

const ID: Field = Field::new(1, "id", "id");
const DISPLAY_LABEL: Field = Field::new(2, "display_label", "displayLabel");
const WEIGHTS: Field = Field::new(3, "weights", "weights");
const PRIORITY: Field = Field::new(4, "priority", "priority");
const CHILD: Field = Field::new(5, "child", "child");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub id: i64,
    pub display_label: String,
    pub weights: Vec<i32>,
    pub priority: i32,
    pub child: Option<Box<Node>>,
    pub unknown_fields: UnknownFields,
}

impl Node {
    pub fn leaf(id: i64, label: &str) -> Self {
        Node {
            id,
            display_label: label.to_owned(),
            ..Default::default()
        }
    }

    /// A chain of `depth` nodes, each the child of the previous one.
    pub fn chain(depth: usize) -> Self {
        let mut node = Node::leaf(depth as i64, "tail");
        for id in (0..depth.saturating_sub(1)).rev() {
            node = Node {
                id: id as i64,
                child: Some(Box::new(node)),
                ..Default::default()
            };
        }
        node
    }
}

impl Message for Node {
    fn full_name(&self) -> &'static str {
        "test.Node"
    }

    fn encode_raw(&self, writer: &mut Writer) {
        if self.id != 0 {
            int64::encode(&ID, self.id, writer);
        }
        if !self.display_label.is_empty() {
            string::encode(&DISPLAY_LABEL, &self.display_label, writer);
        }
        int32::encode_packed(&WEIGHTS, &self.weights, writer);
        if self.priority != 0 {
            enumeration::encode(&PRIORITY, self.priority, writer);
        }
        if let Some(child) = &self.child {
            message::encode(&CHILD, &**child, writer);
        }
        self.unknown_fields.encode(writer);
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if self.id != 0 {
            len += int64::encoded_len(&ID, self.id);
        }
        if !self.display_label.is_empty() {
            len += string::encoded_len(&DISPLAY_LABEL, &self.display_label);
        }
        len += int32::encoded_len_packed(&WEIGHTS, &self.weights);
        if self.priority != 0 {
            len += enumeration::encoded_len(&PRIORITY, self.priority);
        }
        if let Some(child) = &self.child {
            len += message::encoded_len(&CHILD, &**child);
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
            1 => int64::merge(&ID, wire_type, &mut self.id, reader),
            2 => string::merge(&DISPLAY_LABEL, wire_type, &mut self.display_label, reader),
            3 => int32::merge_repeated(&WEIGHTS, wire_type, &mut self.weights, reader),
            4 => enumeration::merge(&PRIORITY, wire_type, &mut self.priority, reader),
            5 => match &mut self.child {
                Some(child) => message::merge(&CHILD, wire_type, &mut **child, reader, ctx),
                None => {
                    let mut child = Node::default();
                    message::merge(&CHILD, wire_type, &mut child, reader, ctx)?;
                    self.child = Some(Box::new(child));
                    Ok(())
                }
            },
            _ => self
                .unknown_fields
                .merge_field(number, wire_type, reader, ctx),
        }
    }

    fn clear(&mut self) {
        *self = Node::default();
    }
}

impl JsonMessage for Node {
    fn write_json(&self, out: &mut ObjectWriter<'_>) {
        out.int64(&ID, self.id);
        out.string(&DISPLAY_LABEL, &self.display_label);
        out.repeated_int32(&WEIGHTS, &self.weights);
        out.enumeration::<Priority>(&PRIORITY, self.priority);
        out.message(&CHILD, self.child.as_deref());
    }

    fn merge_json_field(
        &mut self,
        key: &str,
        value: Value,
        options: &UnmarshalOptions,
    ) -> Result<bool, DecodeError> {
        if ID.matches(key) {
            if let Some(v) = fields::int64(&ID, value)? {
                self.id = v;
            }
        } else if DISPLAY_LABEL.matches(key) {
            if let Some(v) = fields::string(&DISPLAY_LABEL, value)? {
                self.display_label = v;
            }
        } else if WEIGHTS.matches(key) {
            if let Some(v) = fields::repeated_int32(&WEIGHTS, value)? {
                self.weights = v;
            }
        } else if PRIORITY.matches(key) {
            if let Some(v) = fields::enumeration::<Priority>(&PRIORITY, value)? {
                self.priority = v;
            }
        } else if CHILD.matches(key) {
            if !value.is_null() {
                self.child
                    .get_or_insert_with(Default::default)
                    .merge_json_value(value, options)?;
            }
        } else {
            return Ok(false);
        }
        Ok(true)
    }
}

impl TextFormat for Node {
    fn write_text(&self, out: &mut TextWriter) {
        out.int64(&ID, self.id);
        out.string(&DISPLAY_LABEL, &self.display_label);
        out.repeated_int32(&WEIGHTS, &self.weights);
        out.enumeration::<Priority>(&PRIORITY, self.priority);
        out.message(&CHILD, self.child.as_deref());
    }
}

pub fn sample() -> Node {
    Node {
        id: 7,
        display_label: "root".to_owned(),
        weights: vec![3, -1, 300],
        priority: Priority::High as i32,
        child: Some(Box::new(Node::leaf(8, "leaf"))),
        unknown_fields: UnknownFields::default(),
    }
}
