//! The console walkthrough.
//!
//! Helpers here never abort: each failure is printed as `Error: <message>`,
//! logged, and the walkthrough continues with whatever value it has.

use std::fmt;
use std::io::Write;
use std::path::Path;

use proto_pack::file::{load_into, save_to_path};
use proto_pack::{text_format, CodecError, Codecs, ProtoError, ProtoMessage};
use tracing::{debug, warn};

use crate::config::DemoConfig;
use crate::factory::{create_complex_message, create_enum_message, create_simple_message};
use crate::pb::SimpleMessage;

/// Runs the demo steps, printing to `out`.
pub struct Demo<W: Write> {
    out: W,
    config: DemoConfig,
    codecs: Codecs,
}

impl<W: Write> Demo<W> {
    pub fn new(out: W, config: DemoConfig) -> Self {
        let codecs = Codecs::with_indent(config.indent.clone());
        Self { out, config, codecs }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Simple round trip through a file, then through JSON, then the enum and
    /// nested samples.
    pub fn run(&mut self) {
        let simple = create_simple_message();
        self.read_and_write_demo(&simple);
        self.json_demo(&simple);

        let with_enum = create_enum_message();
        self.print_message(&with_enum);

        let nested = create_complex_message();
        self.print_message(&nested);
    }

    /// Prints `message`, saves it, loads it into an empty [`SimpleMessage`]
    /// and prints that.
    pub fn read_and_write_demo(&mut self, message: &dyn ProtoMessage) {
        self.print_message(message);
        let path = self.config.output_path.clone();
        let _ = self.write_to_file(&path, message);

        let mut loaded = SimpleMessage::default();
        let _ = self.read_from_file(&path, &mut loaded);
        self.print_message(&loaded);
    }

    /// Prints the JSON form of `message`, merges it into a freshly built
    /// sample and prints the result.
    pub fn json_demo(&mut self, message: &dyn ProtoMessage) {
        let text = self.to_json(message);
        self.say(&text);

        let mut merged = create_simple_message();
        let _ = self.from_json(&text, &mut merged);
        self.print_message(&merged);
    }

    pub fn write_to_file(
        &mut self,
        path: &Path,
        message: &dyn ProtoMessage,
    ) -> Result<(), ProtoError> {
        save_to_path(path, message).map_err(|err| self.report(err))
    }

    /// Replaces `message` with the file contents. A file that fails to
    /// decode leaves `message` reset or partially filled.
    pub fn read_from_file(
        &mut self,
        path: &Path,
        message: &mut dyn ProtoMessage,
    ) -> Result<(), ProtoError> {
        load_into(path, message).map_err(|err| self.report(err))
    }

    /// JSON text of `message`, or an empty string when encoding fails.
    pub fn to_json(&mut self, message: &dyn ProtoMessage) -> String {
        match self.codecs.text.to_text(message) {
            Ok(text) => text,
            Err(err) => {
                self.report(err);
                String::new()
            }
        }
    }

    /// Merges JSON `text` into `message`.
    pub fn from_json(&mut self, text: &str, message: &mut dyn ProtoMessage) -> Result<(), CodecError> {
        self.codecs
            .text
            .merge_text(text, message)
            .map_err(|err| self.report(err))
    }

    /// Prints the compact text form of `message`.
    pub fn print_message(&mut self, message: &dyn ProtoMessage) {
        debug!(message = message.full_name(), "print");
        let line = text_format::to_string(message);
        self.say(&line);
    }

    fn report<E: fmt::Display>(&mut self, err: E) -> E {
        warn!(error = %err, "demo step failed");
        self.say(&format_args!("Error: {err}"));
        err
    }

    fn say(&mut self, line: &dyn fmt::Display) {
        if let Err(err) = writeln!(self.out, "{line}") {
            warn!(error = %err, "failed to write demo output");
        }
    }
}
