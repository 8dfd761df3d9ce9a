//! Control endpoint client.
//!
//! # Responsibilities
//! - Build the HTTP client with connect and request deadlines
//! - Map a `Resource` onto its URL under the configured base
//! - Perform exactly one GET per call and hand back the body bytes
//!
//! # Design Decisions
//! - No retries: the tool shows current state, failures are reported as-is
//! - Proxy environment variables are ignored; the endpoint is always local
//! - Non-2xx statuses are errors, the body is not rendered

use std::fmt;

use reqwest::Client;
use url::Url;

use crate::config::EndpointConfig;
use crate::config::loader::ConfigError;
use crate::config::validation::ValidationError;
use crate::error::DbgError;

/// A document exposed by the control endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// JSON array of backend pools.
    Backends,
    /// JSON object with general runtime state.
    General,
}

impl Resource {
    /// Path relative to the endpoint base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Backends => "configuration/backends",
            Resource::General => "configuration/general",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Backends => f.write_str("backends"),
            Resource::General => f.write_str("general"),
        }
    }
}

/// Read-only client for the proxy's control endpoint.
#[derive(Debug, Clone)]
pub struct ControlClient {
    client: Client,
    backends_url: Url,
    general_url: Url,
}

impl ControlClient {
    pub fn new(config: &EndpointConfig) -> Result<Self, DbgError> {
        let mut base_url = Url::parse(&config.base_url).map_err(invalid_base_url)?;
        // Url::join replaces the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let backends_url = base_url
            .join(Resource::Backends.path())
            .map_err(invalid_base_url)?;
        let general_url = base_url
            .join(Resource::General.path())
            .map_err(invalid_base_url)?;

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .no_proxy()
            .user_agent(concat!("dbg/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| DbgError::Connection {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            backends_url,
            general_url,
        })
    }

    /// Full URL for a resource.
    pub fn url(&self, resource: Resource) -> &Url {
        match resource {
            Resource::Backends => &self.backends_url,
            Resource::General => &self.general_url,
        }
    }

    /// Fetch the raw body of a resource.
    pub async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, DbgError> {
        let url = self.url(resource).clone();
        tracing::debug!(url = %url, "Fetching control endpoint resource");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| DbgError::Connection {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Control endpoint returned non-success status");
            return Err(DbgError::Status { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| DbgError::Connection {
                url: url.clone(),
                source,
            })?;

        tracing::info!(
            resource = %resource,
            status = %status,
            bytes = body.len(),
            "Control endpoint responded"
        );

        Ok(body.to_vec())
    }
}

fn invalid_base_url(e: url::ParseError) -> DbgError {
    ConfigError::Validation(vec![ValidationError {
        field: "endpoint.base_url",
        message: e.to_string(),
    }])
    .into()
}
