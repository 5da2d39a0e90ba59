pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod task;
pub mod utils;

pub use config::StorePaths;
pub use error::{Result, TrackerError};
pub use task::{Task, TaskStatus, TaskStore};
