//! Knobs for the JSON mapping.

/// Controls how messages are rendered as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarshalOptions {
    /// Indentation unit for pretty output. Empty means single-line output.
    pub indent: String,
    /// Write zero values, empty lists and `null` for unset sub-messages.
    pub emit_defaults: bool,
    /// Use the `.proto` field names instead of lowerCamelCase.
    pub orig_name: bool,
    /// Write enum values as numbers instead of symbols.
    pub enums_as_ints: bool,
}

impl MarshalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn emit_defaults(mut self, emit_defaults: bool) -> Self {
        self.emit_defaults = emit_defaults;
        self
    }

    pub fn orig_name(mut self, orig_name: bool) -> Self {
        self.orig_name = orig_name;
        self
    }

    pub fn enums_as_ints(mut self, enums_as_ints: bool) -> Self {
        self.enums_as_ints = enums_as_ints;
        self
    }
}

/// Controls how JSON input is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnmarshalOptions {
    /// Ignore keys that match no field instead of failing.
    pub allow_unknown_fields: bool,
}

impl UnmarshalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_unknown_fields(mut self, allow: bool) -> Self {
        self.allow_unknown_fields = allow;
        self
    }
}
