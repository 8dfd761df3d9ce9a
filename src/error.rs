//! Crate-wide error type.
//!
//! # Design Decisions
//! - One enum for every failure a command can hit, so `main` has a single
//!   place that turns errors into a message and an exit code
//! - A backend that is not found is not an error (see `commands::Outcome`)
//! - Usage errors belong to clap and never reach this type

use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use url::Url;

use crate::config::loader::ConfigError;

/// Exit code for failures while talking to the proxy or rendering output.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for invalid configuration (matches clap's usage error code).
pub const EXIT_USAGE: i32 = 2;

/// Errors produced while running a `dbg` command.
#[derive(Debug, thiserror::Error)]
pub enum DbgError {
    /// The request could not be sent or the response body could not be read.
    #[error("request to {url} failed: {}", error_chain(source))]
    Connection {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// The control endpoint answered with a non-success status.
    #[error("{url} returned status {status}")]
    Status { url: Url, status: StatusCode },

    /// The payload was not valid JSON.
    #[error("invalid JSON from control endpoint: {0}")]
    Decode(#[from] serde_json::Error),

    /// The payload was valid JSON but not the expected structure.
    #[error("unexpected backend list shape: {0}")]
    Shape(String),

    /// The proxy configuration file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The tool's own configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Join an error and its sources, reqwest hides the interesting part
/// ("Connection refused") a few levels down.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}

impl DbgError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DbgError::Config(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }

    /// True when stdout was closed by the reader (e.g. `dbg backends | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, DbgError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl From<io::Error> for DbgError {
    fn from(e: io::Error) -> Self {
        DbgError::Output(e)
    }
}
