//! Scripted Transport for tests and offline development.
//!
//! Replays queued responses in order and records every request it receives.

use crate::domain::TransportError;
use crate::ports::{Form, JsonBody, Method, Payload, Transport};
use std::collections::VecDeque;
use tokio::sync::Mutex;
use tracing::info;

/// One request as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub form: Option<Form>,
}

/// In-memory Transport. Responses are consumed FIFO; an empty queue answers with a network error.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<JsonBody, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response. Builder-style for test setup.
    pub fn with_response(mut self, response: Result<JsonBody, TransportError>) -> Self {
        self.responses.get_mut().push_back(response);
        self
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn submit(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<JsonBody, TransportError> {
        info!(?method, path, "[MOCK] transport request");
        let form = match payload {
            Payload::None => None,
            Payload::Multipart(form) => Some(form),
        };
        self.requests.lock().await.push(RecordedRequest {
            method,
            path: path.to_string(),
            form,
        });
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("[MOCK] no response queued".into())))
    }
}
