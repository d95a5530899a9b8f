//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

use crate::logging::LogLevel;

#[derive(Debug, Parser)]
#[command(name = "taskctl", version, about = "Exercise a task-management HTTP API")]
pub struct Cli {
    /// Host the task server runs on.
    #[arg(long, default_value = task_core::config::DEFAULT_HOST)]
    pub host: String,

    /// Port the task server listens on.
    #[arg(long, env = "TASK_API_PORT")]
    pub port: Option<String>,

    /// Abort a request after this many seconds. Unbounded when omitted.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a task.
    Create(TaskFields),
    /// List all tasks.
    List,
    /// Show one task.
    Get { id: i64 },
    /// Replace a task's title, description and due date.
    Update {
        id: i64,
        #[command(flatten)]
        fields: TaskFields,
    },
    /// Delete a task.
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct TaskFields {
    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// RFC 3339 timestamp, e.g. 2026-11-01T09:00:00Z.
    #[arg(long)]
    pub due_date: String,
}
