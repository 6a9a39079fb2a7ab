//! Typed accessors over a field record.
//!
//! A key that is absent (or explicitly `null`) reads as `None`; a key that is
//! present with the wrong JSON type is a hard `AttributeTypeMismatch` naming
//! the key. Values are never silently coerced.

use super::Record;
use crate::error::FieldCodecError;
use serde_json::Value;

fn mismatch(key: &str, expected: &'static str, found: &Value) -> FieldCodecError {
    FieldCodecError::AttributeTypeMismatch {
        key: key.to_string(),
        expected,
        found: found.to_string(),
    }
}

pub(crate) fn opt_string(record: &Record, key: &str) -> Result<Option<String>, FieldCodecError> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(mismatch(key, "string", other)),
    }
}

pub(crate) fn opt_u32(record: &Record, key: &str) -> Result<Option<u32>, FieldCodecError> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
            Some(n) => Ok(Some(n)),
            None => Err(mismatch(key, "unsigned integer", value)),
        },
    }
}

pub(crate) fn opt_bool(record: &Record, key: &str) -> Result<Option<bool>, FieldCodecError> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(mismatch(key, "boolean", other)),
    }
}

pub(crate) fn opt_string_list(
    record: &Record,
    key: &str,
) -> Result<Option<Vec<String>>, FieldCodecError> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    other => return Err(mismatch(key, "array of strings", other)),
                }
            }
            Ok(Some(out))
        }
        Some(other) => Err(mismatch(key, "array of strings", other)),
    }
}

// Emission helpers: a key is written only when its value is defined and
// non-default, so absent keys round-trip back to the variant's defaults.

pub(crate) fn put_string(record: &mut Record, key: &str, value: &str) {
    if !value.is_empty() {
        record.insert(key.to_string(), Value::String(value.to_string()));
    }
}

pub(crate) fn put_opt_string(record: &mut Record, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        record.insert(key.to_string(), Value::String(value.clone()));
    }
}

pub(crate) fn put_opt_u32(record: &mut Record, key: &str, value: &Option<u32>) {
    if let Some(value) = value {
        record.insert(key.to_string(), Value::from(*value));
    }
}

pub(crate) fn put_flag(record: &mut Record, key: &str, value: bool) {
    if value {
        record.insert(key.to_string(), Value::Bool(true));
    }
}

pub(crate) fn put_string_list(record: &mut Record, key: &str, values: &[String]) {
    if !values.is_empty() {
        let items = values.iter().cloned().map(Value::String).collect();
        record.insert(key.to_string(), Value::Array(items));
    }
}
