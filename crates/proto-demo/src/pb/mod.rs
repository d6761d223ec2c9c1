//! Message types for the demo schemas, in the shape `protoc` plugins emit.

pub mod complex;
pub mod enumerations;
pub mod simple;

pub use complex::{ComplexMessage, DummyMessage};
pub use enumerations::{DayOfTheWeek, EnumMessage};
pub use simple::SimpleMessage;
