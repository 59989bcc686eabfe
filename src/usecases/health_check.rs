//! Startup probe of the backend's health endpoint. Informational only.

use crate::domain::TransportError;
use crate::ports::{Method, Payload, Transport};
use crate::shared::endpoints;
use crate::usecases::submit_workflow::decode;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

pub struct HealthCheck {
    transport: Arc<dyn Transport>,
}

impl HealthCheck {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Single GET /health. Returns the backend's status text.
    pub async fn probe(&self) -> Result<String, TransportError> {
        let body = self
            .transport
            .submit(Method::Get, endpoints::HEALTH, Payload::None)
            .await?;
        let response: HealthResponse = decode(body)?;
        Ok(response.status)
    }
}
