//! Aggregate codec holder.

use super::{BinaryCodec, TextCodec};

#[derive(Debug, Clone, Default)]
pub struct Codecs {
    pub binary: BinaryCodec,
    pub text: TextCodec,
}

impl Codecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codecs whose JSON side pretty-prints with `indent`.
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            binary: BinaryCodec::new(),
            text: TextCodec::with_indent(indent),
        }
    }
}
