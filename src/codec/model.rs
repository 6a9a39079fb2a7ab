use super::Record;
use crate::error::ModelCodecError;
use crate::model::{FormDefinition, LayoutTemplate};
use serde_json::Value;

/// Encodes and decodes the form-level metadata section: id, name, and the
/// opaque layout template.
pub struct FormModelCodec;

impl FormModelCodec {
    pub fn encode(&self, form: &FormDefinition) -> Record {
        let mut record = Record::new();
        record.insert("id".to_string(), Value::String(form.id.clone()));
        record.insert("name".to_string(), Value::String(form.name.clone()));
        // The layout is never interpreted, only carried.
        record.insert("layout".to_string(), form.layout.0.clone());
        record
    }

    pub fn decode(
        &self,
        record: &Record,
    ) -> Result<(String, String, LayoutTemplate), ModelCodecError> {
        let id = require_string(record, "id")?;
        let name = require_string(record, "name")?;
        let layout = record
            .get("layout")
            .cloned()
            .map(LayoutTemplate)
            .unwrap_or_default();
        Ok((id, name, layout))
    }
}

fn require_string(record: &Record, key: &str) -> Result<String, ModelCodecError> {
    match record.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        _ => Err(ModelCodecError::MalformedModelRecord {
            key: key.to_string(),
        }),
    }
}
