//! Output rendering.
//!
//! # Modes
//! - Pretty: re-indent any JSON document (backends, general)
//! - Names: one backend name per line
//! - Backend: a single backend object, or the not-found notice
//! - Raw: bytes copied through untouched (conf)
//!
//! # Design Decisions
//! - Every mode writes to `io::Write` so output can be captured in tests
//! - Payloads are fully decoded and validated before the first byte is
//!   written; a failing render leaves stdout empty
//! - JSON is indented with two spaces and keeps the server's key order

pub mod backend;

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::error::DbgError;

pub use backend::{find_backend, parse_backends, Backend};

/// Printed when `get` finds no backend with the requested name.
pub const NOT_FOUND_MESSAGE: &str = "A backend of this name was not found.";

/// Re-indent a JSON document.
pub fn write_pretty<W: Write>(out: &mut W, body: &[u8]) -> Result<(), DbgError> {
    let value: Value = serde_json::from_slice(body)?;
    write_json(out, &value)
}

/// Write each backend name on its own line, in list order.
pub fn write_names<W: Write>(out: &mut W, backends: &[Backend]) -> Result<(), DbgError> {
    for backend in backends {
        writeln!(out, "{}", backend.name)?;
    }
    Ok(())
}

/// Write a single backend object.
pub fn write_backend<W: Write>(out: &mut W, backend: &Backend) -> Result<(), DbgError> {
    write_json(out, &backend.fields)
}

/// Write the soft not-found notice.
pub fn write_not_found<W: Write>(out: &mut W) -> Result<(), DbgError> {
    writeln!(out, "{}", NOT_FOUND_MESSAGE)?;
    Ok(())
}

/// Copy bytes verbatim; no trailing newline is added.
pub fn write_raw<W: Write>(out: &mut W, bytes: &[u8]) -> Result<(), DbgError> {
    out.write_all(bytes)?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), DbgError> {
    let text = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", text)?;
    Ok(())
}
