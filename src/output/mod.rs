//! Structured output for scripting.

mod writer;

pub use writer::{OutputWriter, TaskOutput};
