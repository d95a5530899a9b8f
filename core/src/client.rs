//! Stateless HTTP request builder and response parser for the task API.
//!
//! # Design
//! `TaskClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. Input validation happens in `build_*`, so an
//! invalid due date never reaches the network.

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ValidationError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Task, TaskPayload};

/// Synchronous, stateless client for the task API.
#[derive(Debug, Clone)]
pub struct TaskClient {
    base_url: String,
}

impl TaskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_tasks(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/tasks", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_task(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/tasks/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_task(
        &self,
        title: &str,
        description: &str,
        due_date: &str,
    ) -> Result<HttpRequest, ApiError> {
        let payload = payload(None, title, description, due_date)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/tasks", self.base_url),
            headers: json_headers(),
            body: Some(encode(&payload)?),
        })
    }

    pub fn build_update_task(
        &self,
        id: i64,
        title: &str,
        description: &str,
        due_date: &str,
    ) -> Result<HttpRequest, ApiError> {
        let payload = payload(Some(id), title, description, due_date)?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/tasks/{id}", self.base_url),
            headers: json_headers(),
            body: Some(encode(&payload)?),
        })
    }

    pub fn build_delete_task(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/tasks/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_create_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        expect_status(&response, 201)?;
        decode(&response)
    }

    /// Tasks come back in server order; the client does not re-sort them.
    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, ApiError> {
        expect_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_get_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        expect_found(&response, 200)?;
        decode(&response)
    }

    pub fn parse_update_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        expect_found(&response, 200)?;
        decode(&response)
    }

    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(&response, 204)
    }
}

/// Parse a user-supplied RFC 3339 due date.
///
/// Only the strict `YYYY-MM-DDTHH:MM:SS[.frac](Z|+hh:mm|-hh:mm)` form is
/// accepted: no surrounding whitespace, no space separator, upper-case `T`
/// and `Z`.
pub fn parse_due_date(input: &str) -> Result<DateTime<FixedOffset>, ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidDueDate {
        input: input.to_string(),
        reason,
    };
    if !has_rfc3339_layout(input.as_bytes()) {
        return Err(invalid(
            "expected YYYY-MM-DDTHH:MM:SS[.fraction](Z|+hh:mm|-hh:mm)".to_string(),
        ));
    }
    DateTime::parse_from_rfc3339(input).map_err(|e| invalid(e.to_string()))
}

/// Shape check only; field ranges are left to chrono.
fn has_rfc3339_layout(s: &[u8]) -> bool {
    const DATE_TIME: &[u8; 19] = b"dddd-dd-ddTdd:dd:dd";
    if s.len() < DATE_TIME.len() + 1 {
        return false;
    }
    let (head, mut rest) = s.split_at(DATE_TIME.len());
    let head_ok = head.iter().zip(DATE_TIME).all(|(&c, &p)| match p {
        b'd' => c.is_ascii_digit(),
        _ => c == p,
    });
    if !head_ok {
        return false;
    }
    if let Some(frac) = rest.strip_prefix(b".") {
        let digits = frac.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return false;
        }
        rest = &frac[digits..];
    }
    match rest {
        b"Z" => true,
        [sign, h1, h2, b':', m1, m2] => {
            matches!(sign, b'+' | b'-') && [h1, h2, m1, m2].iter().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

fn payload(
    id: Option<i64>,
    title: &str,
    description: &str,
    due_date: &str,
) -> Result<TaskPayload, ValidationError> {
    let due_date = parse_due_date(due_date)?;
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(TaskPayload {
        id,
        title: title.to_string(),
        description: description.to_string(),
        due_date,
    })
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn encode(payload: &TaskPayload) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
        status: response.status,
        message: e.to_string(),
    })
}

/// Any status other than `expected` is a failure carrying that status.
fn expect_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::RequestFailed {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Like `expect_status`, but 404 becomes `NotFound`.
fn expect_found(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    expect_status(response, expected)
}
