//! Backend REST contract: paths and multipart field names.

pub const ADD_CLASS: &str = "/add_class";
pub const LIST_CLASSES: &str = "/classes";
pub const UPLOAD_IMAGES: &str = "/upload_images";
pub const CLASSIFY: &str = "/classify";
pub const HEALTH: &str = "/health";

pub const FIELD_CLASS_NAME: &str = "class_name";
/// Repeated once per uploaded image.
pub const FIELD_FILES: &str = "files";
pub const FIELD_FILE: &str = "file";
