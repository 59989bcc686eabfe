//! Implements InputPort. Inquire-based menu shell.
//!
//! Each menu entry mounts a fresh operation and drops it on "Back"; the shell
//! itself keeps nothing but the transport handle.

use crate::adapters::fs::ImagePicker;
use crate::adapters::ui::progress::spinner;
use crate::domain::{ClassLabel, DomainError, OperationOutcome};
use crate::ports::{InputPort, Transport};
use crate::usecases::class_registry::NO_CLASSES;
use crate::usecases::{
    AddClassOperation, ClassListView, ClassRegistry, ClassifyOperation, UploadImagesOperation,
};
use async_trait::async_trait;
use crossterm::style::Stylize;
use indicatif::ProgressBar;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, Select, Text};
use std::sync::Arc;
use tracing::debug;

const MENU_ADD_CLASS: &str = "Add Class";
const MENU_UPLOAD: &str = "Upload Images";
const MENU_CLASSIFY: &str = "Classify Image";
const MENU_LIST: &str = "View Classes";
const MENU_EXIT: &str = "Exit";

const ACTION_EDIT_NAME: &str = "Enter class name";
const ACTION_SUBMIT_CLASS: &str = "Add class";
const ACTION_SELECT_CLASS: &str = "Select class";
const ACTION_SELECT_IMAGES: &str = "Select images";
const ACTION_UPLOAD: &str = "Upload images";
const ACTION_SELECT_IMAGE: &str = "Select image";
const ACTION_CLASSIFY: &str = "Classify image";
const ACTION_BACK: &str = "Back";

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("▸").with_fg(Color::LightYellow));
    inquire::set_global_render_config(config);
}

/// Esc and Ctrl-C mean "back"; anything else is a terminal failure.
fn skippable<T>(result: Result<Option<T>, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(value) => Ok(value),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// Draw one state of the class list. Loading is a live spinner, returned so the
/// caller can clear it once the fetch settles.
fn render_class_list(view: &ClassListView) -> Option<ProgressBar> {
    match view {
        ClassListView::Loading => return Some(spinner("Loading classes...")),
        ClassListView::Error(message) => println!("{}", message.as_str().red()),
        ClassListView::Empty => println!("{}", NO_CLASSES),
        ClassListView::Populated(classes) => {
            for class in classes.iter() {
                println!("  • {}", class);
            }
        }
    }
    None
}

fn render_outcome(outcome: &OperationOutcome) {
    match outcome {
        OperationOutcome::Success(message) => println!("{}", message.as_str().green()),
        OperationOutcome::Failure(message) => println!("{}", message.as_str().red()),
        OperationOutcome::Idle | OperationOutcome::Pending => {}
    }
}

/// Available actions; the submit entry is hidden while a submission is Pending.
fn actions(
    setup: &[&'static str],
    submit: &'static str,
    submit_enabled: bool,
) -> Vec<&'static str> {
    let mut out = setup.to_vec();
    if submit_enabled {
        out.push(submit);
    }
    out.push(ACTION_BACK);
    out
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    transport: Arc<dyn Transport>,
    picker: ImagePicker,
}

impl TuiInputPort {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            picker: ImagePicker::new(),
        }
    }

    async fn add_class_view(&self) -> Result<(), DomainError> {
        let mut op = AddClassOperation::new(Arc::clone(&self.transport));
        loop {
            let heading = format!("Add New Class [name: {}]", op.input());
            let options = actions(&[ACTION_EDIT_NAME], ACTION_SUBMIT_CLASS, op.submit_enabled());
            match skippable(Select::new(&heading, options).prompt_skippable())? {
                Some(ACTION_EDIT_NAME) => {
                    let entered = skippable(
                        Text::new("Class name:")
                            .with_initial_value(op.input())
                            .prompt_skippable(),
                    )?;
                    if let Some(value) = entered {
                        op.set_input(value);
                    }
                }
                Some(ACTION_SUBMIT_CLASS) => {
                    let pb = spinner("Adding class...");
                    op.submit().await;
                    pb.finish_and_clear();
                    render_outcome(op.outcome());
                }
                _ => return Ok(()),
            }
        }
    }

    async fn upload_view(&self) -> Result<(), DomainError> {
        let pb = spinner("Fetching classes...");
        let mut op = UploadImagesOperation::mount(Arc::clone(&self.transport)).await;
        pb.finish_and_clear();
        render_outcome(op.outcome());

        loop {
            let heading = format!(
                "Upload Images to Class [class: {}, {} file(s) selected]",
                op.selected_class()
                    .map(ClassLabel::as_str)
                    .unwrap_or("none"),
                op.files().len()
            );
            let options = actions(
                &[ACTION_SELECT_CLASS, ACTION_SELECT_IMAGES],
                ACTION_UPLOAD,
                op.submit_enabled(),
            );
            match skippable(Select::new(&heading, options).prompt_skippable())? {
                Some(ACTION_SELECT_CLASS) => {
                    let classes: Vec<ClassLabel> = op.classes().iter().cloned().collect();
                    if classes.is_empty() {
                        println!("{}", NO_CLASSES);
                        continue;
                    }
                    if let Some(label) =
                        skippable(Select::new("Select class:", classes).prompt_skippable())?
                    {
                        op.select_class(label);
                    }
                }
                Some(ACTION_SELECT_IMAGES) => {
                    let Some(paths) = skippable(
                        Text::new("Image paths (comma separated):").prompt_skippable(),
                    )?
                    else {
                        continue;
                    };
                    match self.picker.pick_many(&paths).await {
                        Ok(files) => op.select_files(files),
                        Err(e) => println!("{}", e.to_string().red()),
                    }
                }
                Some(ACTION_UPLOAD) => {
                    let pb = spinner("Uploading images...");
                    op.submit().await;
                    pb.finish_and_clear();
                    render_outcome(op.outcome());
                }
                _ => return Ok(()),
            }
        }
    }

    async fn classify_view(&self) -> Result<(), DomainError> {
        let mut op = ClassifyOperation::new(Arc::clone(&self.transport));
        loop {
            let heading = format!(
                "Classify New Image [selected: {}]",
                op.file().map(|f| f.file_name.as_str()).unwrap_or("none")
            );
            let options = actions(&[ACTION_SELECT_IMAGE], ACTION_CLASSIFY, op.submit_enabled());
            match skippable(Select::new(&heading, options).prompt_skippable())? {
                Some(ACTION_SELECT_IMAGE) => {
                    let Some(path) =
                        skippable(Text::new("Image path:").prompt_skippable())?
                    else {
                        continue;
                    };
                    match self.picker.pick(path.trim()).await {
                        Ok(file) => op.select_file(file),
                        Err(e) => println!("{}", e.to_string().red()),
                    }
                }
                Some(ACTION_CLASSIFY) => {
                    let pb = spinner("Classifying...");
                    op.submit().await;
                    pb.finish_and_clear();
                    if let Some(result) = op.prediction() {
                        println!("{} {}", "Prediction:".green(), result.prediction);
                    }
                    if let Some(error) = op.error() {
                        println!("{}", error.red());
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    async fn class_list_view(&self) -> Result<(), DomainError> {
        let registry = ClassRegistry::new(Arc::clone(&self.transport));
        println!("{}", "Available Classes".bold());

        let loading = render_class_list(&ClassListView::default());
        let view = ClassListView::mount(&registry).await;
        if let Some(pb) = loading {
            pb.finish_and_clear();
        }
        render_class_list(&view);
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let menu = vec![MENU_ADD_CLASS, MENU_UPLOAD, MENU_CLASSIFY, MENU_LIST, MENU_EXIT];
            let choice = skippable(Select::new("Test-Time Compute Classifier", menu).prompt_skippable())?;
            debug!(?choice, "menu selection");
            match choice {
                Some(MENU_ADD_CLASS) => self.add_class_view().await?,
                Some(MENU_UPLOAD) => self.upload_view().await?,
                Some(MENU_CLASSIFY) => self.classify_view().await?,
                Some(MENU_LIST) => self.class_list_view().await?,
                _ => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_hidden_while_pending() {
        assert_eq!(
            actions(&[ACTION_SELECT_IMAGE], ACTION_CLASSIFY, true),
            [ACTION_SELECT_IMAGE, ACTION_CLASSIFY, ACTION_BACK]
        );
        assert_eq!(
            actions(&[ACTION_SELECT_IMAGE], ACTION_CLASSIFY, false),
            [ACTION_SELECT_IMAGE, ACTION_BACK]
        );
    }

    #[test]
    fn only_loading_list_keeps_a_spinner() {
        let loading = render_class_list(&ClassListView::default());
        assert!(loading.is_some());
        if let Some(pb) = loading {
            pb.finish_and_clear();
        }
        assert!(render_class_list(&ClassListView::Empty).is_none());
        assert!(render_class_list(&ClassListView::Error("Failed to fetch classes.".into())).is_none());
    }

    #[test]
    fn cancel_means_back() {
        let r: Result<Option<()>, _> = skippable(Err(InquireError::OperationCanceled));
        assert!(matches!(r, Ok(None)));
        let r: Result<Option<()>, _> = skippable(Err(InquireError::OperationInterrupted));
        assert!(matches!(r, Ok(None)));
    }
}
