//! Application use cases. Each operation owns its own state; none share it.

pub mod add_class;
pub mod class_registry;
pub mod classify;
pub mod health_check;
pub mod submit_workflow;
pub mod upload_images;

pub use add_class::AddClassOperation;
pub use class_registry::{ClassListView, ClassRegistry};
pub use classify::ClassifyOperation;
pub use health_check::HealthCheck;
pub use submit_workflow::{Settled, SubmitWorkflow};
pub use upload_images::UploadImagesOperation;
