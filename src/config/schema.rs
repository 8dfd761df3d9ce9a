//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Root configuration for the `dbg` tool.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DbgConfig {
    /// Control endpoint settings.
    pub endpoint: EndpointConfig,

    /// Static nginx configuration settings.
    pub nginx: NginxConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Where and how to reach the proxy's control endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL of the control endpoint (e.g., "http://127.0.0.1:18080").
    pub base_url: String,

    /// Total request timeout in seconds.
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:18080".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        }
    }
}

/// Location of the proxy's rendered nginx configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct NginxConfig {
    /// Path dumped by `dbg conf`.
    pub conf_path: PathBuf,
}

impl Default for NginxConfig {
    fn default() -> Self {
        Self {
            conf_path: PathBuf::from("/etc/nginx/nginx.conf"),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Values taken from flags or environment that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub conf_path: Option<PathBuf>,
}

impl DbgConfig {
    /// Apply flag/environment overrides on top of this configuration.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(base_url) = overrides.base_url {
            self.endpoint.base_url = base_url;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.endpoint.timeout_secs = timeout_secs;
        }
        if let Some(conf_path) = overrides.conf_path {
            self.nginx.conf_path = conf_path;
        }
    }
}
