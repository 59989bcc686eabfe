//! Core domain layer. No external I/O dependencies.
//!
//! Entities and validation rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    ClassLabel, ClassSet, ClassificationResult, ImageFile, OperationOutcome, UploadBatch,
};
pub use errors::{DomainError, TransportError, ValidationError};
