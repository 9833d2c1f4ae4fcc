//! JSON interop for host values.
//!
//! This module provides conversion functions for:
//! - `serde_json::Value` → host [`Value`] (total, JSON has no `undefined`)
//! - host [`Value`] → `serde_json::Value` (follows host `JSON.stringify`
//!   semantics for `undefined`)
//!
//! The stringify rules matter for round-trips: an `undefined` object
//! member is dropped from the output, an `undefined` array element
//! serializes as `null`, and a bare `undefined` root serializes as
//! `null`. Absent optional fields therefore vanish from JSON text the
//! same way they vanish on the host side.

use serde_json::Value as Json;

use crate::error::{Error, Result};
use crate::object::Object;
use crate::value::Value;

/// Converts parsed JSON into a host value. Object key order is kept as
/// encountered in the input.
pub fn from_json(json: &Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        // serde_json numbers without the arbitrary-precision feature
        // always have a double form.
        Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => Value::Array(items.iter().map(from_json).collect()),
        Json::Object(map) => {
            let mut obj = Object::with_capacity(map.len());
            for (key, value) in map {
                obj.insert(key.clone(), from_json(value));
            }
            Value::Object(obj)
        }
    }
}

/// Converts a host value into JSON, applying the stringify rules for
/// `undefined` described in the module docs. Non-finite numbers become
/// `null`, as stringify renders them.
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Undefined | Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(Json::Number)
            // NaN and infinities have no JSON form.
            .unwrap_or(Json::Null),
        Value::String(s) => Json::String(s.clone()),
        Value::Array(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Object(obj) => {
            let mut map = serde_json::Map::new();
            for (key, value) in obj.iter() {
                if value.is_undefined() {
                    continue;
                }
                map.insert(key.to_string(), to_json(value));
            }
            Json::Object(map)
        }
    }
}

/// Parses JSON text into a host value.
pub fn parse(text: &str) -> Result<Value> {
    let json: Json = serde_json::from_str(text).map_err(|e| Error::TypeMismatch {
        expected: "JSON",
        found: e.to_string(),
        path: "$".to_string(),
    })?;
    Ok(from_json(&json))
}

/// Serializes a host value to JSON text.
pub fn to_string(value: &Value) -> String {
    to_json(value).to_string()
}
