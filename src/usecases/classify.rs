//! Classify one image against the registered classes.

use crate::domain::{
    ClassLabel, ClassificationResult, ImageFile, OperationOutcome, TransportError,
    ValidationError,
};
use crate::ports::{Form, Transport};
use crate::shared::endpoints;
use crate::usecases::submit_workflow::{Settled, SubmitWorkflow, decode};
use serde::Deserialize;
use std::sync::Arc;

pub const CLASSIFY_FALLBACK: &str = "An error occurred during classification.";

#[derive(Deserialize)]
struct ClassifyResponse {
    prediction: String,
}

/// Classify view state. The selected file survives failures so the user can retry.
pub struct ClassifyOperation {
    transport: Arc<dyn Transport>,
    file: Option<ImageFile>,
    prediction: Option<ClassificationResult>,
    workflow: SubmitWorkflow,
}

impl ClassifyOperation {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            file: None,
            prediction: None,
            workflow: SubmitWorkflow::new(endpoints::CLASSIFY, CLASSIFY_FALLBACK),
        }
    }

    pub fn file(&self) -> Option<&ImageFile> {
        self.file.as_ref()
    }

    /// New selection clears any prior prediction and error immediately.
    pub fn select_file(&mut self, file: ImageFile) {
        self.file = Some(file);
        self.prediction = None;
        self.workflow.clear();
    }

    pub fn prediction(&self) -> Option<&ClassificationResult> {
        self.prediction.as_ref()
    }

    pub fn outcome(&self) -> &OperationOutcome {
        self.workflow.outcome()
    }

    pub fn error(&self) -> Option<&str> {
        self.workflow.outcome().error()
    }

    pub fn submit_enabled(&self) -> bool {
        self.workflow.submit_enabled()
    }

    /// Submit the selected file as the single `file` field.
    pub async fn submit(&mut self) -> Settled<ClassificationResult> {
        let file = self.file.as_ref();
        let prediction = &mut self.prediction;
        let settled = self
            .workflow
            .run(
                &*self.transport,
                || {
                    let file = file.ok_or(ValidationError::NoImageToClassify)?;
                    *prediction = None;
                    Ok(Form::new().file(endpoints::FIELD_FILE, file.clone()))
                },
                |body| {
                    let response: ClassifyResponse = decode(body)?;
                    let label = ClassLabel::new(response.prediction).map_err(|_| {
                        TransportError::Decode("empty prediction".to_string())
                    })?;
                    let message = label.to_string();
                    Ok((ClassificationResult { prediction: label }, message))
                },
            )
            .await;
        match &settled {
            Settled::Succeeded(result) => self.prediction = Some(result.clone()),
            Settled::Failed(_) => self.prediction = None,
            Settled::Busy | Settled::Rejected(_) => {}
        }
        settled
    }
}
