use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Task not found: {0}")]
    TaskNotFound(u64),

    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Invalid status: {0} (expected todo, in-progress, or done)")]
    InvalidStatus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
