use console::{Style, style};

use crate::task::{Task, TaskStatus};
use crate::utils::truncate_chars;

pub struct Display;

impl Display {
    pub fn new() -> Self {
        Self
    }

    pub fn print_tasks_table(&self, tasks: &[Task]) {
        if tasks.is_empty() {
            println!("{}", style("No tasks found.").dim());
            return;
        }

        let todo = tasks.iter().filter(|t| t.status == TaskStatus::Todo).count();
        let active = tasks.iter().filter(|t| t.status.is_active()).count();
        let done = tasks.iter().filter(|t| t.is_done()).count();

        println!(
            "Todo: {}  In Progress: {}  Done: {}",
            style(todo).dim(),
            style(active).yellow(),
            style(done).green()
        );
        println!();

        println!(
            "{:<6} {:<42} {:<12} {:<20}",
            style("ID").bold(),
            style("Description").bold(),
            style("Status").bold(),
            style("Updated").bold()
        );
        println!("{}", style("─".repeat(80)).dim());

        for task in tasks {
            let status_style = self.status_style(task.status);
            let desc = truncate_chars(&task.description, 40);

            println!(
                "{:<6} {:<42} {:<12} {:<20}",
                task.id,
                desc,
                status_style.apply_to(task.status.to_string()),
                task.updated_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
    }

    pub fn print_success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), message);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red().bold(), message);
    }

    pub fn print_info(&self, message: &str) {
        println!("{} {}", style("→").cyan(), message);
    }

    fn status_style(&self, status: TaskStatus) -> Style {
        match status {
            TaskStatus::Todo => Style::new().dim(),
            TaskStatus::InProgress => Style::new().yellow().bold(),
            TaskStatus::Done => Style::new().green(),
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
