//! Synchronous client for a remote task-management HTTP API.
//!
//! # Overview
//! `TaskClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `TaskApiClient` pairs it with a `Transport`
//! to run the five task operations, and `report` renders their results as a
//! `(status, message)` pair for any front-end.
//!
//! # Design
//! - `ClientConfig` is passed in at construction; there is no global state.
//! - Validation (due date, title) happens before a request is built.
//! - Display wording lives behind the `Renderer` trait.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod report;
pub mod transport;
pub mod types;

pub use api::TaskApiClient;
pub use client::{parse_due_date, TaskClient};
pub use config::ClientConfig;
pub use error::{ApiError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use report::{report, Operation, Outcome, PlainTextRenderer, Renderer, Report};
pub use transport::{Transport, UreqTransport};
pub use types::{Task, TaskPayload};
