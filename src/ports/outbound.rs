//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ImageFile, TransportError};

/// Parsed JSON response body.
pub type JsonBody = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Value of one multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(ImageFile),
}

/// Named multipart field. A name may repeat (e.g. `files`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: FieldValue,
}

/// Ordered multipart/form-data payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push(FormField {
            name: name.to_string(),
            value: FieldValue::Text(value.into()),
        });
        self
    }

    pub fn file(mut self, name: &str, file: ImageFile) -> Self {
        self.fields.push(FormField {
            name: name.to_string(),
            value: FieldValue::File(file),
        });
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<FormField> {
        self.fields
    }

    /// Text value of the first field named `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|f| match &f.value {
            FieldValue::Text(v) if f.name == name => Some(v.as_str()),
            _ => None,
        })
    }

    /// All files under `name`, in insertion order.
    pub fn files(&self, name: &str) -> Vec<&ImageFile> {
        self.fields
            .iter()
            .filter_map(|f| match &f.value {
                FieldValue::File(file) if f.name == name => Some(file),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    None,
    Multipart(Form),
}

/// Shared HTTP request/response mechanism for all operations.
///
/// Single attempt per call: no retries, no cancellation, and no guard against
/// overlapping calls (each operation gates itself while Pending).
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Issue `method path` relative to the configured base endpoint.
    ///
    /// # Errors
    /// `TransportError::Backend` when the error body carries a string `detail`;
    /// any other failure maps to the remaining variants.
    async fn submit(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<JsonBody, TransportError>;
}
