//! Backend list model.
//!
//! The control endpoint's backend objects carry upstream lists, balancing
//! parameters and whatever else the proxy version exposes. Only `name` is
//! typed; everything else is kept as the original object so it can be
//! re-encoded untouched.

use serde_json::{Map, Value};

use crate::error::DbgError;

/// A single backend pool as reported by the control endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Backend {
    /// Backend identifier, expected to be unique within a response.
    pub name: String,
    /// The complete original object, `name` included, in server key order.
    pub fields: Map<String, Value>,
}

impl Backend {
    /// Validate one array element. `index` is only used for error messages.
    pub fn from_value(index: usize, value: Value) -> Result<Self, DbgError> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(DbgError::Shape(format!(
                    "element {} is {}, expected an object",
                    index,
                    json_kind(&other)
                )))
            }
        };

        let name = match fields.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(DbgError::Shape(format!(
                    "element {} has a 'name' that is {}, expected a string",
                    index,
                    json_kind(other)
                )))
            }
            None => {
                return Err(DbgError::Shape(format!(
                    "element {} has no 'name' field",
                    index
                )))
            }
        };

        Ok(Self { name, fields })
    }
}

/// Decode a control endpoint payload into an ordered backend list.
pub fn parse_backends(body: &[u8]) -> Result<Vec<Backend>, DbgError> {
    let value: Value = serde_json::from_slice(body)?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(DbgError::Shape(format!(
                "top-level value is {}, expected an array",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Backend::from_value(index, item))
        .collect()
}

/// First backend whose name matches exactly (case-sensitive).
pub fn find_backend<'a>(backends: &'a [Backend], name: &str) -> Option<&'a Backend> {
    backends.iter().find(|b| b.name == name)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
