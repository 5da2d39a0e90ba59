//! Task type definitions and persistence.
//!
//! Core domain types:
//! - `Task`: A unit of work with id, description, status, and timestamps
//! - `TaskStatus`: The todo / in-progress / done lifecycle
//! - `TaskStore`: Persistence layer for the task list

mod status;
mod store;
mod types;

pub use status::TaskStatus;
pub use store::TaskStore;
pub use types::Task;
