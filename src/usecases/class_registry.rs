//! Read path for class labels. Fetched fresh by every consuming view; nothing is cached.

use crate::domain::{ClassSet, TransportError};
use crate::ports::{Method, Payload, Transport};
use crate::shared::endpoints;
use crate::usecases::submit_workflow::decode;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

pub const FETCH_CLASSES_FAILED: &str = "Failed to fetch classes.";
pub const NO_CLASSES: &str = "No classes available.";

#[derive(Deserialize)]
struct ClassesResponse {
    classes: ClassSet,
}

pub struct ClassRegistry {
    transport: Arc<dyn Transport>,
}

impl ClassRegistry {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// One GET, no retry.
    pub async fn list_classes(&self) -> Result<ClassSet, TransportError> {
        let body = self
            .transport
            .submit(Method::Get, endpoints::LIST_CLASSES, Payload::None)
            .await?;
        let response: ClassesResponse = decode(body)?;
        info!(count = response.classes.len(), "classes fetched");
        Ok(response.classes)
    }
}

/// What the listing view renders. Exactly one at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassListView {
    #[default]
    Loading,
    Error(String),
    Empty,
    Populated(ClassSet),
}

impl ClassListView {
    pub fn from_result(result: Result<ClassSet, TransportError>) -> Self {
        match result {
            Ok(classes) if classes.is_empty() => Self::Empty,
            Ok(classes) => Self::Populated(classes),
            Err(e) => {
                warn!(error = %e, "class fetch failed");
                Self::Error(FETCH_CLASSES_FAILED.to_string())
            }
        }
    }

    /// Fetch once and settle.
    pub async fn mount(registry: &ClassRegistry) -> Self {
        Self::from_result(registry.list_classes().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::MockTransport;
    use crate::domain::ClassLabel;
    use serde_json::json;

    fn registry(mock: MockTransport) -> (Arc<MockTransport>, ClassRegistry) {
        let mock = Arc::new(mock);
        let registry = ClassRegistry::new(Arc::clone(&mock) as Arc<dyn Transport>);
        (mock, registry)
    }

    #[tokio::test]
    async fn lists_classes_in_backend_order() {
        let (mock, registry) =
            registry(MockTransport::new().with_response(Ok(json!({"classes": ["dogs", "cats"]}))));

        let classes = registry.list_classes().await.unwrap();
        let labels: Vec<_> = classes.iter().map(ClassLabel::as_str).collect();
        assert_eq!(labels, ["dogs", "cats"]);

        let requests = mock.requests().await;
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].path, "/classes");
        assert_eq!(requests[0].form, None);
    }

    #[test]
    fn view_starts_loading() {
        assert_eq!(ClassListView::default(), ClassListView::Loading);
    }

    #[tokio::test]
    async fn view_is_empty_for_zero_classes() {
        let (_, registry) =
            registry(MockTransport::new().with_response(Ok(json!({"classes": []}))));
        assert_eq!(ClassListView::mount(&registry).await, ClassListView::Empty);
    }

    #[tokio::test]
    async fn view_shows_fixed_error_on_any_failure() {
        for failure in [
            Err(TransportError::Network("refused".into())),
            Err(TransportError::Backend {
                status: 500,
                detail: "boom".into(),
            }),
            Ok(json!({"not_classes": 1})),
        ] {
            let (_, registry) = registry(MockTransport::new().with_response(failure));
            assert_eq!(
                ClassListView::mount(&registry).await,
                ClassListView::Error("Failed to fetch classes.".into())
            );
        }
    }

    #[tokio::test]
    async fn blank_label_in_listing_is_malformed() {
        let (_, registry) =
            registry(MockTransport::new().with_response(Ok(json!({"classes": ["cats", "  "]}))));

        let err = registry.list_classes().await.unwrap_err();

        assert!(matches!(err, TransportError::Decode(_)), "{err:?}");
    }

    #[tokio::test]
    async fn view_populated_with_list() {
        let (_, registry) =
            registry(MockTransport::new().with_response(Ok(json!({"classes": ["cats"]}))));
        let view = ClassListView::mount(&registry).await;
        let ClassListView::Populated(classes) = &view else {
            panic!("expected populated view, got {view:?}");
        };
        assert_eq!(classes.len(), 1);
    }
}
