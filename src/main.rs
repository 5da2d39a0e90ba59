use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use task_cli::cli::{Cli, Commands, Display, OutputFormat, StatusFilterArg};
use task_cli::config::StorePaths;
use task_cli::error::Result;
use task_cli::output::OutputWriter;
use task_cli::task::{TaskStatus, TaskStore};

/// Context for command output handling.
struct OutputContext<'a> {
    display: &'a Display,
    writer: &'a OutputWriter,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Display::new().print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("task_cli=debug")
    } else {
        EnvFilter::new("task_cli=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let display = Display::new();
    let writer = OutputWriter::new(cli.output);
    let out = OutputContext {
        display: &display,
        writer: &writer,
    };

    let paths = StorePaths::resolve(cli.file);
    let store = TaskStore::new(paths.store_file);

    match cli.command {
        Commands::Add { description } => cmd_add(&out, &store, &description).await,
        Commands::Update { id, description } => cmd_update(&out, &store, id, &description).await,
        Commands::Delete { id } => cmd_delete(&out, &store, id).await,
        Commands::MarkInProgress { id } => {
            cmd_set_status(&out, &store, id, TaskStatus::InProgress).await
        }
        Commands::MarkDone { id } => cmd_set_status(&out, &store, id, TaskStatus::Done).await,
        Commands::List { status } => cmd_list(&out, &store, status).await,
    }
}

async fn cmd_add(out: &OutputContext<'_>, store: &TaskStore, description: &str) -> Result<()> {
    let is_new_store = !store.path().exists();
    let task = store.add(description).await?;

    match out.writer.format() {
        OutputFormat::Text => {
            out.display
                .print_success(&format!("Task added successfully (ID: {})", task.id));
            if is_new_store {
                out.display
                    .print_info(&format!("Created store: {}", store.path().display()));
            }
        }
        OutputFormat::Json => out.writer.emit_task(&task),
    }

    Ok(())
}

async fn cmd_update(
    out: &OutputContext<'_>,
    store: &TaskStore,
    id: u64,
    description: &str,
) -> Result<()> {
    let task = store.update(id, description).await?;

    match out.writer.format() {
        OutputFormat::Text => {
            out.display
                .print_success(&format!("Task {} updated successfully.", task.id));
        }
        OutputFormat::Json => out.writer.emit_task(&task),
    }

    Ok(())
}

async fn cmd_delete(out: &OutputContext<'_>, store: &TaskStore, id: u64) -> Result<()> {
    store.delete(id).await?;

    match out.writer.format() {
        OutputFormat::Text => {
            out.display
                .print_success(&format!("Task {} deleted successfully.", id));
        }
        OutputFormat::Json => out.writer.emit_message(&format!("Task {} deleted", id)),
    }

    Ok(())
}

async fn cmd_set_status(
    out: &OutputContext<'_>,
    store: &TaskStore,
    id: u64,
    status: TaskStatus,
) -> Result<()> {
    let task = store.set_status(id, status).await?;

    match out.writer.format() {
        OutputFormat::Text => {
            out.display
                .print_success(&format!("Task {} marked as {}.", task.id, task.status));
        }
        OutputFormat::Json => out.writer.emit_task(&task),
    }

    Ok(())
}

async fn cmd_list(
    out: &OutputContext<'_>,
    store: &TaskStore,
    status: Option<StatusFilterArg>,
) -> Result<()> {
    let filter = status.map(TaskStatus::from);
    let tasks = store.list(filter).await?;

    match out.writer.format() {
        OutputFormat::Text => out.display.print_tasks_table(&tasks),
        OutputFormat::Json => out.writer.emit_list(&tasks),
    }

    Ok(())
}
