use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "task-cli")]
#[command(author, version, about = "Track tasks from the command line", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Path to the store file (default: tasks.json)
    #[arg(long, global = true, env = "TASK_CLI_FILE")]
    pub file: Option<PathBuf>,
}

/// Output format for CLI results.
/// - Text: Human-readable text output (default)
/// - Json: Machine-readable JSON on stdout
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task description
        description: String,
    },

    /// Update an existing task's description
    Update {
        /// Task ID
        id: u64,

        /// New description
        description: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },

    /// Mark a task as in-progress
    MarkInProgress {
        /// Task ID
        id: u64,
    },

    /// Mark a task as done
    MarkDone {
        /// Task ID
        id: u64,
    },

    /// List tasks, optionally filtered by status
    List {
        /// Filter by status (todo, in-progress, done)
        status: Option<StatusFilterArg>,
    },
}

#[derive(Clone, ValueEnum)]
pub enum StatusFilterArg {
    Todo,
    InProgress,
    Done,
}

impl From<StatusFilterArg> for crate::task::TaskStatus {
    fn from(arg: StatusFilterArg) -> Self {
        match arg {
            StatusFilterArg::Todo => Self::Todo,
            StatusFilterArg::InProgress => Self::InProgress,
            StatusFilterArg::Done => Self::Done,
        }
    }
}
