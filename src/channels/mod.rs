//! Output channel implementations

pub mod console;
pub mod json;
pub mod memory;

pub use console::ConsoleChannel;
pub use json::JsonChannel;
pub use memory::{CapturedLine, MemoryChannel};

pub use crate::core::OutputChannel;
