//! Message codecs behind one capability trait.

mod binary;
mod registry;
mod text;
mod types;

pub use binary::BinaryCodec;
pub use registry::Codecs;
pub use text::TextCodec;
pub use types::{CodecError, MessageCodec, ProtoMessage};
