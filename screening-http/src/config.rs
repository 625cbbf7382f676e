use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ClientConfig::base_url`].
pub const BASE_URL_VAR: &str = "SCREENING_BASE_URL";
/// Environment variable overriding [`ClientConfig::timeout_secs`].
pub const TIMEOUT_VAR: &str = "SCREENING_TIMEOUT_SECS";

/// Connection settings for [`HttpClient`](crate::HttpClient).
///
/// Every key is optional in the TOML file:
///
/// ```toml
/// base_url = "https://screening.example.org/api/"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Bound on a whole request, connect included.
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
}

/// Error type for loading a [`ClientConfig`] or building a client from it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // Host loopback as seen from the Android emulator.
            base_url: "http://10.0.2.2:5000/".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 30,
            user_agent: concat!("screening/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read `path` if given, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml_str(&text)?
            }
            None => Self::default(),
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps variable names to values.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(BASE_URL_VAR) {
            self.base_url = url;
        }
        if let Some(value) = lookup(TIMEOUT_VAR) {
            self.timeout_secs = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: TIMEOUT_VAR,
                value,
            })?;
        }
        Ok(self)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// The base URL, parsed and ending in `/` so endpoint paths join beneath it.
    pub fn base(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        let mut url = Url::parse(self.base_url.trim()).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
