//! Store location resolution.

use std::path::PathBuf;

/// Default store file name, resolved against the working directory.
pub const DEFAULT_STORE_FILE: &str = "tasks.json";

/// Resolved paths for a single invocation.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub store_file: PathBuf,
}

impl StorePaths {
    /// Resolve the store file: explicit override (flag or env) wins,
    /// otherwise `tasks.json` in the working directory.
    pub fn resolve(file: Option<PathBuf>) -> Self {
        Self {
            store_file: file.unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE)),
        }
    }
}
