//! Implements Transport over reqwest. Multipart POSTs and JSON GETs against one base endpoint.

use crate::domain::{DomainError, TransportError};
use crate::ports::{FieldValue, Form, JsonBody, Method, Payload, Transport};
use crate::shared::config::TransportConfig;
use reqwest::multipart;
use serde::Deserialize;
use tracing::{debug, warn};

/// Error body shape returned by the backend (`{"detail": "..."}`).
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// HTTP transport. Base URL and timeout are fixed at construction.
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: TransportConfig,
}

impl ReqwestTransport {
    /// Build the client. Rejects base URLs that are not http(s).
    pub fn new(config: TransportConfig) -> Result<Self, DomainError> {
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(DomainError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                config.base_url
            )));
        }
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DomainError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn multipart_form(form: Form) -> Result<multipart::Form, TransportError> {
        let mut out = multipart::Form::new();
        for field in form.into_fields() {
            out = match field.value {
                FieldValue::Text(value) => out.text(field.name, value),
                FieldValue::File(file) => {
                    let part = multipart::Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.mime_type)
                        .map_err(|e| TransportError::Decode(format!("invalid MIME type: {}", e)))?;
                    out.part(field.name, part)
                }
            };
        }
        Ok(out)
    }
}

/// Map an error-status body to a TransportError.
///
/// Only a non-empty string `detail` counts as a backend message; anything else
/// (no body, non-JSON, FastAPI validation arrays) is a bare status failure.
pub(crate) fn error_from_body(status: u16, body: &str) -> TransportError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(serde_json::Value::String(detail)),
        }) if !detail.is_empty() => TransportError::Backend { status, detail },
        _ => TransportError::Status { status },
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn submit(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<JsonBody, TransportError> {
        let url = self.config.url_for(path);
        let request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        let request = match payload {
            Payload::None => request,
            Payload::Multipart(form) => {
                debug!(path, fields = form.fields().len(), "sending multipart request");
                request.multipart(Self::multipart_form(form)?)
            }
        };

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(format!("reading body: {}", e)))?;

        if !status.is_success() {
            warn!(path, status = %status, body = %text.chars().take(200).collect::<String>(), "backend returned error");
            return Err(error_from_body(status.as_u16(), &text));
        }

        debug!(path, status = %status, body_len = text.len(), "response received");
        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_backend_error() {
        let err = error_from_body(400, r#"{"detail": "Class 'cats' already exists."}"#);
        assert_eq!(
            err,
            TransportError::Backend {
                status: 400,
                detail: "Class 'cats' already exists.".into()
            }
        );
    }

    #[test]
    fn missing_or_unusable_detail_is_status_error() {
        for body in [
            "",
            "Internal Server Error",
            r#"{"error": "boom"}"#,
            r#"{"detail": ""}"#,
            r#"{"detail": null}"#,
            r#"{"detail": [{"loc": ["body", "file"], "msg": "field required"}]}"#,
        ] {
            assert_eq!(
                error_from_body(422, body),
                TransportError::Status { status: 422 },
                "body: {body}"
            );
        }
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = ReqwestTransport::new(TransportConfig::new("localhost:8000", None));
        assert!(matches!(err, Err(DomainError::Config(_))));
    }

    #[test]
    fn accepts_http_and_https_base_urls() {
        for base in ["http://localhost:8000/", "https://classifier.example"] {
            assert!(
                ReqwestTransport::new(TransportConfig::new(
                    base,
                    Some(std::time::Duration::from_secs(5)),
                ))
                .is_ok(),
                "{base}"
            );
        }
    }

    #[tokio::test]
    async fn unreachable_backend_is_network_error() {
        // Port 9 (discard) on loopback is not expected to accept HTTP.
        let transport = ReqwestTransport::new(TransportConfig::new(
            "http://127.0.0.1:9",
            Some(std::time::Duration::from_secs(2)),
        ))
        .unwrap();
        let err = transport
            .submit(Method::Get, "/classes", Payload::None)
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Network(_)), "{err:?}");
        assert_eq!(err.detail(), None);
    }
}
