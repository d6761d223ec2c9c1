//! Compact single-line text format used for `Display`.
//!
//! Output looks like `id:1 name:"First message" tags:3 tags:4 child:{id:2}`:
//! `.proto` field names, default scalars omitted, one `name:value` pair per
//! list element and sub-messages in braces.

use std::fmt::Write;

use crate::field::Field;
use crate::message::Enumeration;

/// A message that can render itself in the compact text format.
pub trait TextFormat {
    fn write_text(&self, out: &mut TextWriter);
}

/// Accumulates `name:value` pairs separated by single spaces.
#[derive(Debug)]
pub struct TextWriter {
    out: String,
    first: bool,
}

impl Default for TextWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            first: true,
        }
    }

    fn name(&mut self, field: &Field) {
        if !self.first {
            self.out.push(' ');
        }
        self.first = false;
        self.out.push_str(field.name);
        self.out.push(':');
    }

    pub fn int64(&mut self, field: &Field, value: i64) {
        if value != 0 {
            self.name(field);
            let _ = write!(self.out, "{value}");
        }
    }

    pub fn int32(&mut self, field: &Field, value: i32) {
        if value != 0 {
            self.name(field);
            let _ = write!(self.out, "{value}");
        }
    }

    pub fn bool(&mut self, field: &Field, value: bool) {
        if value {
            self.name(field);
            self.out.push_str("true");
        }
    }

    pub fn string(&mut self, field: &Field, value: &str) {
        if !value.is_empty() {
            self.name(field);
            quote_into(&mut self.out, value);
        }
    }

    pub fn enumeration<E: Enumeration>(&mut self, field: &Field, value: i32) {
        if value == 0 {
            return;
        }
        self.name(field);
        match E::symbol_of(value) {
            Some(symbol) => self.out.push_str(symbol),
            None => {
                let _ = write!(self.out, "{value}");
            }
        }
    }

    pub fn repeated_int32(&mut self, field: &Field, values: &[i32]) {
        for &value in values {
            self.name(field);
            let _ = write!(self.out, "{value}");
        }
    }

    pub fn message<M: TextFormat + ?Sized>(&mut self, field: &Field, value: Option<&M>) {
        if let Some(msg) = value {
            self.nested(field, msg);
        }
    }

    pub fn repeated_message<M: TextFormat>(&mut self, field: &Field, values: &[M]) {
        for msg in values {
            self.nested(field, msg);
        }
    }

    fn nested<M: TextFormat + ?Sized>(&mut self, field: &Field, msg: &M) {
        self.name(field);
        self.out.push('{');
        self.first = true;
        msg.write_text(self);
        self.out.push('}');
        self.first = false;
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Renders `message` in the compact text format.
pub fn to_string<M: TextFormat + ?Sized>(message: &M) -> String {
    let mut out = TextWriter::new();
    message.write_text(&mut out);
    out.finish()
}

/// Double-quotes `value`, escaping double quotes, backslashes and control
/// characters. Printable non-ASCII text is written as is.
fn quote_into(out: &mut String, value: &str) {
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() && c.is_ascii() => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
