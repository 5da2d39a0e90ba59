use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::task::Task;

/// Output writer that handles the different output formats.
///
/// - Text: Human-readable formatted output (default)
/// - Json: Machine-readable JSON on stdout
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns the configured output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Emit a single task (result of add/update/mark).
    pub fn emit_task(&self, task: &Task) {
        self.write_json(&TaskOutput::from(task));
    }

    /// Emit the task list.
    pub fn emit_list(&self, tasks: &[Task]) {
        let list: Vec<TaskOutput> = tasks.iter().map(TaskOutput::from).collect();
        self.write_json(&list);
    }

    /// Emit a simple message.
    pub fn emit_message(&self, message: &str) {
        let msg = MessageOutput {
            message: message.to_string(),
        };
        self.write_json(&msg);
    }

    fn write_json<T: Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            let mut stdout = io::stdout().lock();
            let _ = writeln!(stdout, "{}", json);
            let _ = stdout.flush();
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskOutput {
    pub id: u64,
    pub description: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Task> for TaskOutput {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            description: task.description.clone(),
            status: task.status.to_string(),
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct MessageOutput {
    message: String,
}
