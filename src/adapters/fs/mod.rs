//! Local filesystem adapter: image selection for upload and classify.

pub mod image_picker;

pub use image_picker::{ImagePicker, mime_for_path};
