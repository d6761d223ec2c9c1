//! Static field descriptors shared by every codec.

/// One field of a message schema: its number and both of its names.
///
/// `name` is the identifier from the `.proto` file, `json_name` the
/// lowerCamelCase key used by the JSON mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub number: u32,
    pub name: &'static str,
    pub json_name: &'static str,
}

impl Field {
    pub const fn new(number: u32, name: &'static str, json_name: &'static str) -> Self {
        Self {
            number,
            name,
            json_name,
        }
    }

    /// JSON input may use either name.
    pub fn matches(&self, key: &str) -> bool {
        key == self.json_name || key == self.name
    }
}
