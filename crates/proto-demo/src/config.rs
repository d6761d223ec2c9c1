//! Demo settings.

use std::path::PathBuf;

/// Where the demo writes its binary file and how it indents JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub output_path: PathBuf,
    pub indent: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("simple.bin"),
            indent: "    ".to_owned(),
        }
    }
}

impl DemoConfig {
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}
