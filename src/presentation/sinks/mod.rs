//! Presentation sinks shipped with the crate

pub mod json;
pub mod memory;
pub mod terminal;
