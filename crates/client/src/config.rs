//! Backend connection settings, resolved once at startup.

use std::time::Duration;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub const BASE_URL_VAR: &str = "BACKEND_BASE_URL";
pub const TIMEOUT_VAR: &str = "API_TIMEOUT";

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BACKEND_BASE_URL must not be empty")]
    EmptyBaseUrl,
    #[error("BACKEND_BASE_URL is not a valid URL: {0}")]
    InvalidBaseUrl(String),
    #[error("API_TIMEOUT must be a whole number of milliseconds, got `{0}`")]
    InvalidTimeout(String),
}

/// Where the backend lives and how long a single request may take.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(
        default = "default_timeout",
        deserialize_with = "timeout_from_millis",
        rename = "timeout_ms"
    )]
    pub timeout: Duration,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_millis(DEFAULT_TIMEOUT_MS)
}

fn timeout_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(&base_url.into())?;
        Ok(Self { base_url, timeout })
    }

    /// Read `BACKEND_BASE_URL` and `API_TIMEOUT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary key lookup.
    ///
    /// Missing keys fall back to the defaults; present but malformed values are
    /// errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup(BASE_URL_VAR) {
            Some(url) => url,
            None => {
                tracing::warn!("{BASE_URL_VAR} not set; using {DEFAULT_BASE_URL}");
                default_base_url()
            }
        };

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            None => {
                tracing::warn!("{TIMEOUT_VAR} not set; using {DEFAULT_TIMEOUT_MS}ms");
                default_timeout()
            }
        };

        Self::new(base_url, timeout)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn reads_url_and_timeout() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "http://api.internal:9100/"),
            (TIMEOUT_VAR, "2500"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://api.internal:9100");
        assert_eq!(config.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn rejects_malformed_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "5s")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout("5s".to_string()));
    }

    #[test]
    fn rejects_empty_or_invalid_base_url() {
        let err = ClientConfig::from_lookup(lookup(&[(BASE_URL_VAR, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::EmptyBaseUrl);

        let err = ClientConfig::from_lookup(lookup(&[(BASE_URL_VAR, "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn deserializes_from_json_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"timeout_ms": 750}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_millis(750));
    }
}
