//! Error types for the task API client.
//!
//! # Design
//! Every failure can be turned into the `(status, message)` pair shown to the
//! user: `ApiError::status_code` supplies the code and `Display` the text.
//! `NotFound` gets its own variant because get and update report it
//! differently from other unexpected statuses.

use thiserror::Error;

/// Client-side input problems, detected before any request is issued.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid due date format {input:?}. Error: {reason}")]
    InvalidDueDate { input: String, reason: String },

    #[error("Host cannot be empty")]
    EmptyHost,

    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Port cannot be empty")]
    EmptyPort,

    #[error("Invalid port {0:?}")]
    InvalidPort(String),
}

/// Errors returned by `TaskClient` and `TaskApiClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request payload could not be serialized to JSON.
    #[error("Error encoding task data: {0}")]
    Encode(String),

    /// No response was received (connection refused, DNS, timeout, ...).
    #[error("Error sending request: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("Error decoding response: {message}")]
    Decode { status: u16, message: String },

    /// The server answered with a status the operation does not expect.
    #[error("HTTP {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// The server returned 404 for a get or update.
    #[error("Task not found")]
    NotFound,
}

impl ApiError {
    /// Status code reported alongside this error.
    ///
    /// Failures without a response (validation, encoding, transport) use 400
    /// or 500 so that a code is always available.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Encode(_) | ApiError::Transport(_) => 500,
            ApiError::Decode { status, .. } | ApiError::RequestFailed { status, .. } => *status,
            ApiError::NotFound => 404,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::from(ValidationError::EmptyTitle).status_code(), 400);
        assert_eq!(ApiError::Transport("refused".into()).status_code(), 500);
        assert_eq!(
            ApiError::Decode { status: 201, message: "eof".into() }.status_code(),
            201
        );
        assert_eq!(
            ApiError::RequestFailed { status: 503, body: String::new() }.status_code(),
            503
        );
        assert_eq!(ApiError::NotFound.status_code(), 404);
    }

    #[test]
    fn validation_message_is_passed_through() {
        let err = ApiError::from(ValidationError::EmptyPort);
        assert_eq!(err.to_string(), "Port cannot be empty");
    }
}
