//! Application configuration. Backend endpoint, request timeout.

use serde::Deserialize;
use std::time::Duration;

/// Backend address used when `CLASSIFIER_API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Base endpoint of the classification service. Read from CLASSIFIER_API_BASE_URL.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Per-request timeout in seconds. Unset means the HTTP client's own default (none).
    /// Read from CLASSIFIER_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Settings injected into the Transport at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl TransportConfig {
    pub fn new(base_url: impl AsRef<str>, timeout: Option<Duration>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Absolute URL for an endpoint path such as `/classes`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, None)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("CLASSIFIER").try_parsing(true));
        if let Ok(path) = std::env::var("CLASSIFIER_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the backend base URL. Defaults to DEFAULT_API_BASE_URL if unset or blank.
    pub fn api_base_url_or_default(&self) -> String {
        self.api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string()
    }

    /// Returns the request timeout. Zero is treated as unset.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|&s| s > 0)
            .map(Duration::from_secs)
    }

    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig::new(self.api_base_url_or_default(), self.request_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_base_url_or_default(), DEFAULT_API_BASE_URL);
        assert_eq!(cfg.request_timeout(), None);
        assert_eq!(cfg.transport_config(), TransportConfig::default());
    }

    #[test]
    fn blank_base_url_falls_back() {
        let cfg = AppConfig {
            api_base_url: Some("   ".into()),
            request_timeout_secs: Some(0),
        };
        assert_eq!(cfg.api_base_url_or_default(), DEFAULT_API_BASE_URL);
        assert_eq!(cfg.request_timeout(), None);
    }

    #[test]
    fn transport_config_normalises_slashes() {
        let cfg = AppConfig {
            api_base_url: Some("http://classifier.local:9000/api/".into()),
            request_timeout_secs: Some(30),
        };
        let tc = cfg.transport_config();
        assert_eq!(tc.base_url, "http://classifier.local:9000/api");
        assert_eq!(tc.timeout, Some(Duration::from_secs(30)));
        assert_eq!(tc.url_for("/classes"), "http://classifier.local:9000/api/classes");
        assert_eq!(tc.url_for("classify"), "http://classifier.local:9000/api/classify");
    }
}
