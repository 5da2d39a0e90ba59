mod commands;
mod display;

pub use commands::{Cli, Commands, OutputFormat, StatusFilterArg};
pub use display::Display;
