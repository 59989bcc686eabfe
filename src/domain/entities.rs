//! Domain entities. Pure data structures for the classification workflow.
//!
//! No HTTP/terminal types here — adapters map into and out of these.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque class identifier. Non-empty after trimming; uniqueness is the backend's concern.
///
/// The raw text is kept verbatim (surrounding whitespace included) and submitted as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassLabel(String);

impl ClassLabel {
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyClassName);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClassLabel {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ClassLabel> for String {
    fn from(label: ClassLabel) -> Self {
        label.0
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Class labels in backend order. Fetched fresh per view, never cached across views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassSet(Vec<ClassLabel>);

impl ClassSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassLabel> {
        self.0.iter()
    }
}

/// A local image selected by the user. MIME type comes from the picker's accept filter.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

// Payload bytes are omitted so logs stay readable.
impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Non-empty files plus their target class. Only constructible through validation.
#[derive(Debug, Clone)]
pub struct UploadBatch {
    class_name: ClassLabel,
    files: Vec<ImageFile>,
}

impl UploadBatch {
    /// Checks, in order: class selected, then at least one file.
    pub fn new(
        class_name: Option<&ClassLabel>,
        files: &[ImageFile],
    ) -> Result<Self, ValidationError> {
        let class_name = class_name.ok_or(ValidationError::NoClassSelected)?;
        if files.is_empty() {
            return Err(ValidationError::NoImagesSelected);
        }
        Ok(Self {
            class_name: class_name.clone(),
            files: files.to_vec(),
        })
    }

    pub fn class_name(&self) -> &ClassLabel {
        &self.class_name
    }

    pub fn files(&self) -> &[ImageFile] {
        &self.files
    }

    pub fn into_parts(self) -> (ClassLabel, Vec<ImageFile>) {
        (self.class_name, self.files)
    }
}

/// Predicted label for one submitted image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub prediction: ClassLabel,
}

/// Observable state of an operation at any instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OperationOutcome {
    #[default]
    Idle,
    Pending,
    Success(String),
    Failure(String),
}

impl OperationOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Text to display, if any. Idle and Pending show nothing.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(m) | Self::Failure(m) => Some(m),
            Self::Idle | Self::Pending => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(m) => Some(m),
            _ => None,
        }
    }
}
