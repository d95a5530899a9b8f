//! The task API client: build, execute, parse.
//!
//! Each operation is independent and synchronous. Validation runs before the
//! transport is touched, so a rejected input never produces a request.

use tracing::{debug, warn};

use crate::client::TaskClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::Task;

#[derive(Debug, Clone)]
pub struct TaskApiClient<T = UreqTransport> {
    client: TaskClient,
    transport: T,
}

impl TaskApiClient<UreqTransport> {
    /// Client talking to `config.base_url()` over blocking HTTP.
    pub fn connect(config: &ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new(config))
    }
}

impl<T: Transport> TaskApiClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            client: TaskClient::new(&config.base_url()),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn create_task(&self, title: &str, description: &str, due_date: &str) -> Result<Task, ApiError> {
        let request = self.client.build_create_task(title, description, due_date)?;
        let response = self.send(request)?;
        self.client.parse_create_task(response)
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self.send(self.client.build_list_tasks())?;
        self.client.parse_list_tasks(response)
    }

    pub fn get_task(&self, id: i64) -> Result<Task, ApiError> {
        let response = self.send(self.client.build_get_task(id))?;
        self.client.parse_get_task(response)
    }

    pub fn update_task(
        &self,
        id: i64,
        title: &str,
        description: &str,
        due_date: &str,
    ) -> Result<Task, ApiError> {
        let request = self.client.build_update_task(id, title, description, due_date)?;
        let response = self.send(request)?;
        self.client.parse_update_task(response)
    }

    pub fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_task(id))?;
        self.client.parse_delete_task(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        let url = request.url.clone();
        debug!(method, %url, "sending request");
        match self.transport.execute(request) {
            Ok(response) => {
                debug!(method, %url, status = response.status, "received response");
                Ok(response)
            }
            Err(err) => {
                warn!(method, %url, error = %err, "request failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::error::ValidationError;
    use crate::http::HttpMethod;

    /// Replays canned responses and records every request it sees.
    #[derive(Default)]
    struct Scripted {
        responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl Scripted {
        fn replying(responses: Vec<Result<HttpResponse, ApiError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                requests: RefCell::default(),
            }
        }
    }

    impl Transport for Scripted {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".into())))
        }
    }

    fn api(transport: Scripted) -> TaskApiClient<Scripted> {
        let config = ClientConfig::new("3000").unwrap();
        TaskApiClient::with_transport(&config, transport)
    }

    #[test]
    fn invalid_due_date_issues_no_request() {
        let api = api(Scripted::default());
        let err = api.create_task("t", "", "not-a-date").unwrap_err();
        assert!(matches!(err, ApiError::Validation(ValidationError::InvalidDueDate { .. })));
        let err = api.update_task(1, "t", "", "not-a-date").unwrap_err();
        assert!(matches!(err, ApiError::Validation(ValidationError::InvalidDueDate { .. })));
        assert!(api.transport.requests.borrow().is_empty());
    }

    #[test]
    fn delete_reports_success_on_204() {
        let api = api(Scripted::replying(vec![Ok(HttpResponse::new(204, ""))]));
        api.delete_task(5).unwrap();
        let requests = api.transport.requests.borrow();
        assert_eq!(requests[0].method, HttpMethod::Delete);
        assert_eq!(requests[0].url, "http://localhost:3000/tasks/5");
    }

    #[test]
    fn delete_reports_failure_code_on_500() {
        let api = api(Scripted::replying(vec![Ok(HttpResponse::new(500, "boom"))]));
        let err = api.delete_task(5).unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert!(matches!(err, ApiError::RequestFailed { status: 500, .. }));
    }

    #[test]
    fn transport_errors_are_returned() {
        let api = api(Scripted::replying(vec![Err(ApiError::Transport(
            "connection refused".into(),
        ))]));
        assert!(matches!(api.list_tasks(), Err(ApiError::Transport(_))));
    }
}
