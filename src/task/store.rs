use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use super::{Task, TaskStatus};
use crate::error::{Result, TrackerError};

/// On-disk document: a single `tasks` key holding the ordered task list.
#[derive(Debug, Serialize, Deserialize)]
struct TaskDocument {
    tasks: Vec<Task>,
}

pub struct TaskStore {
    store_file: PathBuf,
}

impl TaskStore {
    pub fn new(store_file: impl Into<PathBuf>) -> Self {
        Self {
            store_file: store_file.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.store_file
    }

    /// Read the full task list. An absent file is an empty store.
    pub async fn load(&self) -> Result<Vec<Task>> {
        if !self.store_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.store_file).await?;
        let doc: TaskDocument = serde_json::from_str(&content)?;
        Ok(doc.tasks)
    }

    /// Serialize the full task list and overwrite the store file.
    ///
    /// Plain full-file rewrite; the file is not locked, so concurrent
    /// invocations from separate processes are last-writer-wins.
    pub async fn save(&self, tasks: Vec<Task>) -> Result<()> {
        let count = tasks.len();
        let content = serde_json::to_string_pretty(&TaskDocument { tasks })?;
        fs::write(&self.store_file, content).await?;
        debug!(path = %self.store_file.display(), count, "Store written");
        Ok(())
    }

    /// Next available id: max existing id + 1, or 1 for an empty store.
    pub fn next_id(tasks: &[Task]) -> u64 {
        tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    pub async fn add(&self, description: &str) -> Result<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TrackerError::EmptyDescription);
        }

        let mut tasks = self.load().await?;
        let task = Task::new(Self::next_id(&tasks), description);
        tasks.push(task.clone());
        self.save(tasks).await?;

        debug!(id = task.id, "Task added");
        Ok(task)
    }

    pub async fn update(&self, id: u64, description: &str) -> Result<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TrackerError::EmptyDescription);
        }

        let mut tasks = self.load().await?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TrackerError::TaskNotFound(id))?;

        task.description = description.to_string();
        task.touch();
        let updated = task.clone();
        self.save(tasks).await?;

        debug!(id, "Task updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        let mut tasks = self.load().await?;
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TrackerError::TaskNotFound(id))?;

        tasks.remove(index);
        self.save(tasks).await?;

        debug!(id, "Task deleted");
        Ok(())
    }

    pub async fn set_status(&self, id: u64, status: TaskStatus) -> Result<Task> {
        let mut tasks = self.load().await?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TrackerError::TaskNotFound(id))?;

        task.status = status;
        task.touch();
        let updated = task.clone();
        self.save(tasks).await?;

        debug!(id, %status, "Task status changed");
        Ok(updated)
    }

    /// All tasks in insertion order, optionally filtered by status.
    pub async fn list(&self, filter: Option<TaskStatus>) -> Result<Vec<Task>> {
        let tasks = self.load().await?;
        Ok(match filter {
            Some(status) => tasks.into_iter().filter(|t| t.status == status).collect(),
            None => tasks,
        })
    }
}
