//! Diagnostic client for a running nginx-based reverse proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!   argv ──▶ cli ──▶ Command ──▶ commands::run ──▶ render ──▶ stdout
//!                                    │     ▲
//!                                    ▼     │
//!                  config ──▶ client (GET /configuration/{backends,general})
//!                                    │
//!                                    ▼
//!                        proxy control endpoint (127.0.0.1:18080)
//! ```
//!
//! `conf` skips the client and reads the nginx configuration file directly.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod observability;
pub mod render;

pub use cli::Cli;
pub use client::{ControlClient, Resource};
pub use commands::{Command, Context, Outcome};
pub use config::DbgConfig;
pub use error::DbgError;
