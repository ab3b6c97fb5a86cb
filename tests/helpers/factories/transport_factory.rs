use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::{Value, json};

use crate::client::{ClientError, Transport};

/// A request captured by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub body: Option<Value>,
}

/// In-memory transport that replays scripted responses in order and records
/// every request it receives. Once the script is exhausted it answers with a
/// success status.
pub struct RecordingTransport {
    responses: RefCell<VecDeque<Result<Value, ClientError>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl RecordingTransport {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.borrow().last().cloned()
    }
}

impl Transport for RecordingTransport {
    fn perform(&self, endpoint: &str, body: Option<&Value>) -> Result<Value, ClientError> {
        self.requests.borrow_mut().push(RecordedRequest {
            endpoint: endpoint.to_string(),
            body: body.cloned(),
        });

        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(success_status()))
    }
}

pub struct TransportFactory {
    responses: VecDeque<Result<Value, ClientError>>,
}

impl TransportFactory {
    pub fn new() -> Self {
        Self {
            responses: VecDeque::new(),
        }
    }

    pub fn respond(mut self, body: Value) -> Self {
        self.responses.push_back(Ok(body));
        self
    }

    pub fn respond_status(self, code: i64, message: &str) -> Self {
        self.respond(json!({ "code": code, "message": message }))
    }

    pub fn fail_with(mut self, err: ClientError) -> Self {
        self.responses.push_back(Err(err));
        self
    }

    pub fn create(self) -> RecordingTransport {
        RecordingTransport {
            responses: RefCell::new(self.responses),
            requests: RefCell::new(Vec::new()),
        }
    }
}

pub fn success_status() -> Value {
    json!({ "code": 200, "message": "SUCCESS_STATUS" })
}
