//! Builds the JSON object for one message, field by field.

use serde_json::{Map, Number, Value};

use super::{JsonMessage, MarshalOptions};
use crate::field::Field;
use crate::message::Enumeration;

/// Collects the members of one JSON object while applying
/// [`MarshalOptions`]: key naming and default-value omission.
pub struct ObjectWriter<'o> {
    map: Map<String, Value>,
    options: &'o MarshalOptions,
}

impl<'o> ObjectWriter<'o> {
    pub fn new(options: &'o MarshalOptions) -> Self {
        Self {
            map: Map::new(),
            options,
        }
    }

    pub fn options(&self) -> &'o MarshalOptions {
        self.options
    }

    fn put(&mut self, field: &Field, value: Value) {
        let key = if self.options.orig_name {
            field.name
        } else {
            field.json_name
        };
        self.map.insert(key.to_owned(), value);
    }

    fn wanted(&self, is_default: bool) -> bool {
        !is_default || self.options.emit_defaults
    }

    /// 64-bit integers are written as decimal strings.
    pub fn int64(&mut self, field: &Field, value: i64) {
        if self.wanted(value == 0) {
            self.put(field, Value::String(value.to_string()));
        }
    }

    pub fn int32(&mut self, field: &Field, value: i32) {
        if self.wanted(value == 0) {
            self.put(field, Value::Number(Number::from(value)));
        }
    }

    pub fn bool(&mut self, field: &Field, value: bool) {
        if self.wanted(!value) {
            self.put(field, Value::Bool(value));
        }
    }

    pub fn string(&mut self, field: &Field, value: &str) {
        if self.wanted(value.is_empty()) {
            self.put(field, Value::String(value.to_owned()));
        }
    }

    /// Writes the symbol name, or the number when it is unrecognized or
    /// `enums_as_ints` is set.
    pub fn enumeration<E: Enumeration>(&mut self, field: &Field, value: i32) {
        if !self.wanted(value == 0) {
            return;
        }
        let rendered = match E::symbol_of(value) {
            Some(symbol) if !self.options.enums_as_ints => Value::String(symbol.to_owned()),
            _ => Value::Number(Number::from(value)),
        };
        self.put(field, rendered);
    }

    pub fn repeated_int32(&mut self, field: &Field, values: &[i32]) {
        if self.wanted(values.is_empty()) {
            let items = values.iter().map(|&v| Value::Number(Number::from(v)));
            self.put(field, Value::Array(items.collect()));
        }
    }

    /// An unset sub-message is omitted, or written as `null` with
    /// `emit_defaults`.
    pub fn message<M: JsonMessage>(&mut self, field: &Field, value: Option<&M>) {
        match value {
            Some(msg) => {
                let rendered = msg.to_json_value(self.options);
                self.put(field, rendered);
            }
            None if self.options.emit_defaults => self.put(field, Value::Null),
            None => {}
        }
    }

    pub fn repeated_message<M: JsonMessage>(&mut self, field: &Field, values: &[M]) {
        if self.wanted(values.is_empty()) {
            let options = self.options;
            let items = values.iter().map(|msg| msg.to_json_value(options));
            self.put(field, Value::Array(items.collect()));
        }
    }

    pub fn finish(self) -> Value {
        Value::Object(self.map)
    }
}
