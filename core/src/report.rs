//! Turning operation results into the `(status, message)` pair shown to users.
//!
//! # Design
//! Fetching data and rendering it are separate concerns. `TaskApiClient`
//! returns typed results; a `Renderer` decides the wording. Front-ends pick a
//! renderer and call `report`.

use std::fmt;

use crate::config::ClientConfig;
use crate::error::{ApiError, ValidationError};
use crate::types::{format_timestamp, Task};

/// The five task operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    /// The only status each operation treats as success.
    pub fn success_status(self) -> u16 {
        match self {
            Operation::Create => 201,
            Operation::Delete => 204,
            Operation::List | Operation::Get | Operation::Update => 200,
        }
    }
}

/// Successful result of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(Task),
    Listed(Vec<Task>),
    Fetched(Task),
    Updated(Task),
    Deleted,
}

impl Outcome {
    pub fn operation(&self) -> Operation {
        match self {
            Outcome::Created(_) => Operation::Create,
            Outcome::Listed(_) => Operation::List,
            Outcome::Fetched(_) => Operation::Get,
            Outcome::Updated(_) => Operation::Update,
            Outcome::Deleted => Operation::Delete,
        }
    }
}

/// Status code plus human-readable message. Always both.
///
/// `ok` records whether the operation succeeded. A failure can still carry a
/// 2xx status, e.g. an undecodable 200 body or a create answered with 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub status: u16,
    pub message: String,
    pub ok: bool,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.ok
    }

    /// Report for a rejected client configuration (e.g. an empty port).
    pub fn from_config_error(err: &ValidationError) -> Self {
        Self {
            status: 400,
            message: err.to_string(),
            ok: false,
        }
    }

    /// Confirmation that the client is pointed at `port`.
    pub fn port_set(config: &ClientConfig) -> Self {
        Self {
            status: 200,
            message: format!("Port set to {}", config.port()),
            ok: true,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status Code: {}\nMessage: {}", self.status, self.message)
    }
}

/// Formats outcomes and failures as message text.
pub trait Renderer {
    fn render_outcome(&self, outcome: &Outcome) -> String;
    fn render_error(&self, operation: Operation, err: &ApiError) -> String;
}

/// Build the report for `operation` from its result.
pub fn report<R: Renderer + ?Sized>(
    renderer: &R,
    operation: Operation,
    result: Result<Outcome, ApiError>,
) -> Report {
    match result {
        Ok(outcome) => Report {
            status: outcome.operation().success_status(),
            message: renderer.render_outcome(&outcome),
            ok: true,
        },
        Err(err) => Report {
            status: err.status_code(),
            message: renderer.render_error(operation, &err),
            ok: false,
        },
    }
}

/// Multi-line plain text, one field per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    fn task(task: &Task) -> String {
        format!(
            "ID: {}\nTitle: {}\nDescription: {}\nDue Date: {}\nCreated At: {}\nUpdated At: {}",
            task.id,
            task.title,
            task.description,
            format_timestamp(&task.due_date),
            format_timestamp(&task.created_at),
            format_timestamp(&task.updated_at),
        )
    }
}

impl Renderer for PlainTextRenderer {
    fn render_outcome(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Created(task) => format!("Task created successfully!\n\n{}", Self::task(task)),
            Outcome::Listed(tasks) if tasks.is_empty() => "No tasks found".to_string(),
            Outcome::Listed(tasks) => tasks
                .iter()
                .map(Self::task)
                .collect::<Vec<_>>()
                .join("\n\n"),
            Outcome::Fetched(task) => format!("Task Details:\n\n{}", Self::task(task)),
            Outcome::Updated(task) => format!("Task updated successfully!\n\n{}", Self::task(task)),
            Outcome::Deleted => "Task deleted successfully!".to_string(),
        }
    }

    fn render_error(&self, operation: Operation, err: &ApiError) -> String {
        match err {
            ApiError::RequestFailed { .. } => match operation {
                Operation::Create => "Failed to create task",
                Operation::List => "Failed to retrieve tasks",
                Operation::Get => "Failed to retrieve task",
                Operation::Update => "Failed to update task",
                Operation::Delete => "Failed to delete task",
            }
            .to_string(),
            other => other.to_string(),
        }
    }
}
