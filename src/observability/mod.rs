//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config / client / commands produce:
//!     → logging.rs (structured tracing events)
//!
//! Consumers:
//!     → stderr, so diagnostics never interleave with rendered stdout
//! ```
//!
//! # Design Decisions
//! - Quiet by default (warn); `-v` flags or RUST_LOG raise verbosity
//! - Logging is ambient: user-facing results and errors go to stdout
//!   regardless of the log level

pub mod logging;
