//! Local image selection. Reads files into ImageFile, applying an `image/*` accept filter.

use crate::domain::{DomainError, ImageFile};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// MIME type for a supported image extension (case-insensitive).
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        _ => return None,
    };
    Some(mime)
}

/// File picker for the terminal shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImagePicker;

impl ImagePicker {
    pub fn new() -> Self {
        Self
    }

    /// Load one image. Non-image extensions are refused before reading.
    pub async fn pick(&self, path: impl AsRef<Path>) -> Result<ImageFile, DomainError> {
        let path = path.as_ref();
        let mime = mime_for_path(path).ok_or_else(|| {
            DomainError::Picker(format!("'{}' is not a supported image", path.display()))
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DomainError::Picker(format!("'{}' has no file name", path.display())))?
            .to_string();
        let bytes = fs::read(path)
            .await
            .map_err(|e| DomainError::Picker(format!("read '{}': {}", path.display(), e)))?;
        debug!(file = %file_name, mime, size = bytes.len(), "image picked");
        Ok(ImageFile::new(file_name, mime, bytes))
    }

    /// Load a comma-separated list of paths. All-or-nothing: the first refusal aborts.
    pub async fn pick_many(&self, paths: &str) -> Result<Vec<ImageFile>, DomainError> {
        let mut files = Vec::new();
        for raw in paths.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            files.push(self.pick(raw).await?);
        }
        Ok(files)
    }
}
