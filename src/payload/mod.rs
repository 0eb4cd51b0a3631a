//! Wire payload access
//!
//! The wire value is a [`serde_json::Value`] — a tagged variant over
//! object/array/string/number/bool/null. Collaborators never downcast it
//! blindly: the accessors here narrow the variant explicitly and fail with
//! a typed error on mismatch.
//!
//! [`Resource`] is the composition struct resource wrappers embed: a
//! connection reference plus the payload the wrapper was built from.

use crate::connection::Connection;
use crate::error::{Error, Result};
use serde_json::Value;

/// The variant name of a JSON value, used in error messages
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Look up a field on an object payload.
///
/// Fails with `UnexpectedType` when the payload is not an object and
/// `MissingField` when the key is absent.
pub fn field<'a>(payload: &'a Value, name: &str) -> Result<&'a Value> {
    let object = payload
        .as_object()
        .ok_or_else(|| Error::unexpected_type("object", kind(payload)))?;
    object
        .get(name)
        .ok_or_else(|| Error::missing_field(name))
}

/// Narrow a field to a string
pub fn str_field<'a>(payload: &'a Value, name: &str) -> Result<&'a str> {
    let value = field(payload, name)?;
    value
        .as_str()
        .ok_or_else(|| Error::unexpected_type("string", kind(value)))
}

/// Narrow a field to an integer
pub fn int_field(payload: &Value, name: &str) -> Result<i64> {
    let value = field(payload, name)?;
    value
        .as_i64()
        .ok_or_else(|| Error::unexpected_type("integer", kind(value)))
}

/// Narrow a field to a float
pub fn float_field(payload: &Value, name: &str) -> Result<f64> {
    let value = field(payload, name)?;
    value
        .as_f64()
        .ok_or_else(|| Error::unexpected_type("number", kind(value)))
}

/// Narrow a field to a boolean
pub fn bool_field(payload: &Value, name: &str) -> Result<bool> {
    let value = field(payload, name)?;
    value
        .as_bool()
        .ok_or_else(|| Error::unexpected_type("boolean", kind(value)))
}

/// Narrow the payload itself to an array and return its elements
pub fn elements(payload: &Value) -> Result<&[Value]> {
    payload
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::unexpected_type("array", kind(payload)))
}

/// A connection reference paired with a payload.
///
/// Resource wrapper types (repository, issue, ...) embed this by
/// composition and read their named fields through the typed accessors.
#[derive(Debug)]
pub struct Resource<'a> {
    connection: &'a Connection,
    payload: Value,
}

impl<'a> Resource<'a> {
    /// Bundle a payload with the connection it came from
    pub fn new(connection: &'a Connection, payload: Value) -> Self {
        Self {
            connection,
            payload,
        }
    }

    /// The connection this resource was fetched over
    pub fn connection(&self) -> &'a Connection {
        self.connection
    }

    /// The raw payload
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Consume the resource, yielding the payload
    pub fn into_payload(self) -> Value {
        self.payload
    }

    /// Look up a raw field
    pub fn field(&self, name: &str) -> Result<&Value> {
        field(&self.payload, name)
    }

    /// Narrow a field to a string
    pub fn str_field(&self, name: &str) -> Result<&str> {
        str_field(&self.payload, name)
    }

    /// Narrow a field to an integer
    pub fn int_field(&self, name: &str) -> Result<i64> {
        int_field(&self.payload, name)
    }

    /// Narrow a field to a float
    pub fn float_field(&self, name: &str) -> Result<f64> {
        float_field(&self.payload, name)
    }

    /// Narrow a field to a boolean
    pub fn bool_field(&self, name: &str) -> Result<bool> {
        bool_field(&self.payload, name)
    }

    /// The element payloads of an array resource
    pub fn elements(&self) -> Result<&[Value]> {
        elements(&self.payload)
    }

    /// Fetch a related resource over the same connection
    pub async fn fetch(&self, path: &str) -> Result<Resource<'a>> {
        let payload = self.connection.get(path).await?;
        Ok(Resource::new(self.connection, payload))
    }
}

#[cfg(test)]
mod tests;
