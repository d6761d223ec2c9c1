//! Walkthrough of the `proto-pack` codecs on three small schemas: a flat
//! record, a record with an enum field and a record nesting other records.

pub mod config;
pub mod demo;
pub mod factory;
pub mod pb;

pub use config::DemoConfig;
pub use demo::Demo;
pub use factory::{create_complex_message, create_enum_message, create_simple_message};
