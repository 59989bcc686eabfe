//! Register a new class label.

use crate::domain::{ClassLabel, OperationOutcome};
use crate::ports::{Form, Transport};
use crate::shared::endpoints;
use crate::usecases::submit_workflow::{Settled, SubmitWorkflow, decode};
use serde::Deserialize;
use std::sync::Arc;

pub const ADD_CLASS_FALLBACK: &str = "An error occurred while adding the class.";

#[derive(Deserialize)]
struct AddClassResponse {
    message: String,
}

/// Add-class form state. Editing the input never clears the displayed outcome.
pub struct AddClassOperation {
    transport: Arc<dyn Transport>,
    input: String,
    workflow: SubmitWorkflow,
}

impl AddClassOperation {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            input: String::new(),
            workflow: SubmitWorkflow::new(endpoints::ADD_CLASS, ADD_CLASS_FALLBACK),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn outcome(&self) -> &OperationOutcome {
        self.workflow.outcome()
    }

    pub fn submit_enabled(&self) -> bool {
        self.workflow.submit_enabled()
    }

    /// Submit the current input. Clears it on success; keeps it on failure.
    pub async fn submit(&mut self) -> Settled<()> {
        let input = &self.input;
        let settled = self
            .workflow
            .run(
                &*self.transport,
                || {
                    let label = ClassLabel::new(input.as_str())?;
                    Ok(Form::new().text(endpoints::FIELD_CLASS_NAME, label.as_str()))
                },
                |body| {
                    let response: AddClassResponse = decode(body)?;
                    Ok(((), response.message))
                },
            )
            .await;
        if let Settled::Succeeded(()) = settled {
            self.input.clear();
        }
        settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::MockTransport;
    use crate::domain::{TransportError, ValidationError};
    use serde_json::json;

    fn operation(mock: MockTransport) -> (Arc<MockTransport>, AddClassOperation) {
        let mock = Arc::new(mock);
        let op = AddClassOperation::new(Arc::clone(&mock) as Arc<dyn Transport>);
        (mock, op)
    }

    #[tokio::test]
    async fn blank_names_rejected_before_network() {
        for raw in ["", "   ", "\t\n"] {
            let (mock, mut op) = operation(MockTransport::new());
            op.set_input(raw);

            let settled = op.submit().await;

            assert_eq!(settled, Settled::Rejected(ValidationError::EmptyClassName));
            assert_eq!(op.outcome().message(), Some("Class name cannot be empty."));
            assert_eq!(mock.request_count().await, 0);
            assert_eq!(op.input(), raw);
        }
    }

    #[tokio::test]
    async fn success_clears_input_and_shows_message() {
        let (mock, mut op) = operation(
            MockTransport::new().with_response(Ok(json!({"message": "Class 'cats' added."}))),
        );
        op.set_input("cats");

        assert_eq!(op.submit().await, Settled::Succeeded(()));
        assert_eq!(op.input(), "");
        assert_eq!(
            op.outcome(),
            &OperationOutcome::Success("Class 'cats' added.".into())
        );

        let requests = mock.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/add_class");
        let form = requests[0].form.as_ref().unwrap();
        assert_eq!(form.text_value("class_name"), Some("cats"));
        assert_eq!(form.fields().len(), 1);
    }

    #[tokio::test]
    async fn failure_keeps_input_and_shows_detail() {
        let (_, mut op) = operation(MockTransport::new().with_response(Err(
            TransportError::Backend {
                status: 400,
                detail: "Class 'cats' already exists.".into(),
            },
        )));
        op.set_input("cats");

        op.submit().await;

        assert_eq!(op.input(), "cats");
        assert_eq!(op.outcome().error(), Some("Class 'cats' already exists."));
    }

    #[tokio::test]
    async fn failure_without_detail_uses_fallback() {
        let (_, mut op) = operation(
            MockTransport::new().with_response(Err(TransportError::Status { status: 500 })),
        );
        op.set_input("cats");

        op.submit().await;

        assert_eq!(
            op.outcome().error(),
            Some("An error occurred while adding the class.")
        );
    }

    #[tokio::test]
    async fn editing_input_keeps_outcome() {
        let (_, mut op) = operation(
            MockTransport::new().with_response(Ok(json!({"message": "Class 'cats' added."}))),
        );
        op.set_input("cats");
        op.submit().await;

        op.set_input("dogs");

        assert_eq!(op.outcome().message(), Some("Class 'cats' added."));
    }

    #[tokio::test]
    async fn submits_raw_text_when_padded() {
        let (mock, mut op) =
            operation(MockTransport::new().with_response(Ok(json!({"message": "ok"}))));
        op.set_input(" cats ");

        op.submit().await;

        let requests = mock.requests().await;
        let form = requests[0].form.as_ref().unwrap();
        assert_eq!(form.text_value("class_name"), Some(" cats "));
    }
}
