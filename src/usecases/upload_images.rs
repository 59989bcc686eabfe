//! Upload a batch of example images to one class.

use crate::domain::{ClassLabel, ClassSet, ImageFile, OperationOutcome, UploadBatch};
use crate::ports::{Form, Transport};
use crate::shared::endpoints;
use crate::usecases::class_registry::{ClassRegistry, FETCH_CLASSES_FAILED};
use crate::usecases::submit_workflow::{Settled, SubmitWorkflow, decode};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

pub const UPLOAD_FALLBACK: &str = "An error occurred while uploading images.";

#[derive(Deserialize)]
struct UploadResponse {
    message: String,
}

/// Upload view state. The class list is fetched once on mount and never refreshed.
pub struct UploadImagesOperation {
    transport: Arc<dyn Transport>,
    classes: ClassSet,
    selected_class: Option<ClassLabel>,
    files: Vec<ImageFile>,
    workflow: SubmitWorkflow,
}

impl UploadImagesOperation {
    fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            classes: ClassSet::default(),
            selected_class: None,
            files: Vec::new(),
            workflow: SubmitWorkflow::new(endpoints::UPLOAD_IMAGES, UPLOAD_FALLBACK),
        }
    }

    /// Create the view and fetch selectable classes. A failed fetch leaves the list
    /// empty and shows a message; uploading is still attempted through validation.
    pub async fn mount(transport: Arc<dyn Transport>) -> Self {
        let mut op = Self::new(Arc::clone(&transport));
        match ClassRegistry::new(transport).list_classes().await {
            Ok(classes) => op.classes = classes,
            Err(e) => {
                warn!(error = %e, "class fetch failed on upload view mount");
                op.workflow.fail_with(FETCH_CLASSES_FAILED);
            }
        }
        op
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    pub fn selected_class(&self) -> Option<&ClassLabel> {
        self.selected_class.as_ref()
    }

    pub fn select_class(&mut self, label: ClassLabel) {
        self.selected_class = Some(label);
    }

    pub fn files(&self) -> &[ImageFile] {
        &self.files
    }

    /// Replace the selected files.
    pub fn select_files(&mut self, files: Vec<ImageFile>) {
        self.files = files;
    }

    pub fn outcome(&self) -> &OperationOutcome {
        self.workflow.outcome()
    }

    pub fn submit_enabled(&self) -> bool {
        self.workflow.submit_enabled()
    }

    /// Submit one multipart request with every selected file under `files`.
    /// Success clears the files and keeps the class; failure keeps both.
    pub async fn submit(&mut self) -> Settled<usize> {
        let selected_class = self.selected_class.as_ref();
        let files = &self.files;
        let settled = self
            .workflow
            .run(
                &*self.transport,
                || {
                    let batch = UploadBatch::new(selected_class, files)?;
                    info!(
                        class_name = %batch.class_name(),
                        files = batch.files().len(),
                        "uploading images"
                    );
                    let (class_name, images) = batch.into_parts();
                    Ok(images.into_iter().fold(
                        Form::new().text(endpoints::FIELD_CLASS_NAME, class_name.as_str()),
                        |form, image| form.file(endpoints::FIELD_FILES, image),
                    ))
                },
                |body| {
                    let response: UploadResponse = decode(body)?;
                    Ok((files.len(), response.message))
                },
            )
            .await;
        if let Settled::Succeeded(_) = settled {
            self.files.clear();
        }
        settled
    }
}
