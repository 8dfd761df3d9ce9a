//! Command actions.
//!
//! # Data Flow
//! ```text
//! Command
//!     → ControlClient::fetch (backends, list, get, general)
//!       or tokio::fs::read (conf)
//!     → render::* (pretty / names / backend / raw)
//!     → writer (stdout in the binary, Vec<u8> in tests)
//! ```

use std::io::Write;
use std::path::PathBuf;

use crate::client::{ControlClient, Resource};
use crate::config::DbgConfig;
use crate::error::DbgError;
use crate::render;

/// A fully parsed `dbg` action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pretty-print the whole backend list.
    Backends,
    /// Print backend names, one per line.
    ListBackends,
    /// Pretty-print one backend by exact name.
    GetBackend { name: String },
    /// Pretty-print the general state object.
    General,
    /// Dump the nginx configuration file.
    Conf,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Backends => "backends",
            Command::ListBackends => "list-backends",
            Command::GetBackend { .. } => "get-backend",
            Command::General => "general",
            Command::Conf => "conf",
        }
    }
}

/// How a successful command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    /// `get` scanned the whole list without a match. Still a success.
    NotFound,
}

/// Everything a command needs to run.
#[derive(Debug, Clone)]
pub struct Context {
    pub client: ControlClient,
    pub conf_path: PathBuf,
}

impl Context {
    pub fn from_config(config: &DbgConfig) -> Result<Self, DbgError> {
        Ok(Self {
            client: ControlClient::new(&config.endpoint)?,
            conf_path: config.nginx.conf_path.clone(),
        })
    }
}

/// Run a command, writing its output to `out`.
pub async fn run<W: Write>(
    command: &Command,
    ctx: &Context,
    out: &mut W,
) -> Result<Outcome, DbgError> {
    tracing::debug!(command = command.name(), "Running command");

    match command {
        Command::Backends => {
            let body = ctx.client.fetch(Resource::Backends).await?;
            render::write_pretty(out, &body)?;
        }
        Command::ListBackends => {
            let body = ctx.client.fetch(Resource::Backends).await?;
            let backends = render::parse_backends(&body)?;
            render::write_names(out, &backends)?;
        }
        Command::GetBackend { name } => {
            let body = ctx.client.fetch(Resource::Backends).await?;
            let backends = render::parse_backends(&body)?;
            match render::find_backend(&backends, name) {
                Some(backend) => render::write_backend(out, backend)?,
                None => {
                    tracing::debug!(name = %name, count = backends.len(), "Backend not found");
                    render::write_not_found(out)?;
                    out.flush()?;
                    return Ok(Outcome::NotFound);
                }
            }
        }
        Command::General => {
            let body = ctx.client.fetch(Resource::General).await?;
            render::write_pretty(out, &body)?;
        }
        Command::Conf => {
            let contents = tokio::fs::read(&ctx.conf_path)
                .await
                .map_err(|source| DbgError::File {
                    path: ctx.conf_path.clone(),
                    source,
                })?;
            tracing::debug!(path = %ctx.conf_path.display(), bytes = contents.len(), "Read nginx configuration");
            render::write_raw(out, &contents)?;
        }
    }

    out.flush()?;
    Ok(Outcome::Rendered)
}
