//! Shared submit lifecycle for the write operations.
//!
//! Idle → (busy guard) → validate → Pending → one Transport call → Success | Failure.
//! Validation failures settle as Failure without touching the network.

use crate::domain::{OperationOutcome, TransportError, ValidationError};
use crate::ports::{Form, JsonBody, Method, Payload, Transport};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// How a submit attempt ended. Operations apply their own field policy from this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T> {
    /// A submission was already Pending; nothing happened.
    Busy,
    Rejected(ValidationError),
    Succeeded(T),
    Failed(TransportError),
}

/// Decode a success body into its typed shape. Missing fields are malformed responses.
pub fn decode<B: DeserializeOwned>(body: JsonBody) -> Result<B, TransportError> {
    serde_json::from_value(body).map_err(|e| TransportError::Decode(e.to_string()))
}

/// Outcome state machine plus the endpoint and fallback text of one operation.
#[derive(Debug, Clone)]
pub struct SubmitWorkflow {
    path: &'static str,
    fallback: &'static str,
    outcome: OperationOutcome,
}

impl SubmitWorkflow {
    pub fn new(path: &'static str, fallback: &'static str) -> Self {
        Self {
            path,
            fallback,
            outcome: OperationOutcome::Idle,
        }
    }

    pub fn outcome(&self) -> &OperationOutcome {
        &self.outcome
    }

    /// The submit control is disabled while Pending.
    pub fn submit_enabled(&self) -> bool {
        !self.outcome.is_pending()
    }

    /// Drop any displayed message. An in-flight submission stays Pending.
    pub fn clear(&mut self) {
        if !self.outcome.is_pending() {
            self.outcome = OperationOutcome::Idle;
        }
    }

    pub fn reject(&mut self, err: &ValidationError) {
        self.outcome = OperationOutcome::Failure(err.to_string());
    }

    /// Enter Pending. Returns false if already Pending.
    pub fn begin(&mut self) -> bool {
        if self.outcome.is_pending() {
            return false;
        }
        self.outcome = OperationOutcome::Pending;
        true
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.outcome = OperationOutcome::Success(message.into());
    }

    /// Backend detail verbatim, otherwise this operation's fallback.
    pub fn fail(&mut self, err: &TransportError) {
        self.outcome = OperationOutcome::Failure(err.user_message(self.fallback));
    }

    /// Failure with fixed text (e.g. a class list fetch on mount).
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.outcome = OperationOutcome::Failure(message.into());
    }

    /// Run one submission.
    ///
    /// `validate` runs only when no submission is Pending and builds the multipart form;
    /// `on_success` maps the response body to the operation's value and display message.
    pub async fn run<T, V, S>(
        &mut self,
        transport: &dyn Transport,
        validate: V,
        on_success: S,
    ) -> Settled<T>
    where
        V: FnOnce() -> Result<Form, ValidationError>,
        S: FnOnce(JsonBody) -> Result<(T, String), TransportError>,
    {
        if !self.submit_enabled() {
            debug!(path = self.path, "submission ignored: already pending");
            return Settled::Busy;
        }
        let form = match validate() {
            Ok(form) => form,
            Err(e) => {
                debug!(path = self.path, reason = %e, "submission rejected");
                self.reject(&e);
                return Settled::Rejected(e);
            }
        };

        self.begin();
        let result = transport
            .submit(Method::Post, self.path, Payload::Multipart(form))
            .await
            .and_then(on_success);

        match result {
            Ok((value, message)) => {
                info!(path = self.path, message = %message, "submission succeeded");
                self.succeed(message);
                Settled::Succeeded(value)
            }
            Err(e) => {
                warn!(path = self.path, error = %e, "submission failed");
                self.fail(&e);
                Settled::Failed(e)
            }
        }
    }
}
