//! The top-level serializer: assembles the form document from a
//! `FormDefinition` and reconstructs one from its text.
//!
//! Each call is a pure, stateless transform. The serializer only holds the
//! shared read-only registry, so one instance can serve concurrent callers.

use crate::codec::{FieldCodec, FormModelCodec, Record};
use crate::error::{DeserializeError, SerializeError};
use crate::model::FormDefinition;
use crate::registry::FieldTypeRegistry;
use serde_json::Value;

pub struct FormSerializer {
    registry: FieldTypeRegistry,
    model_codec: FormModelCodec,
}

impl FormSerializer {
    /// A serializer over the built-in field types.
    pub fn new() -> Self {
        Self::with_registry(FieldTypeRegistry::with_default_types())
    }

    /// A serializer over a caller-assembled registry, for installations that
    /// add custom field types before traffic begins.
    pub fn with_registry(registry: FieldTypeRegistry) -> Self {
        Self {
            registry,
            model_codec: FormModelCodec,
        }
    }

    pub fn registry(&self) -> &FieldTypeRegistry {
        &self.registry
    }

    /// Produces the form document: a `model` section plus a `fields` array
    /// with one record per field, in the form's field order.
    ///
    /// Fails on the first field whose encode fails, naming its position and
    /// id; no partial document is returned.
    pub fn serialize(&self, form: &FormDefinition) -> Result<String, SerializeError> {
        let field_codec = FieldCodec::new(&self.registry);

        let mut records = Vec::with_capacity(form.fields.len());
        for (index, field) in form.fields.iter().enumerate() {
            let record =
                field_codec
                    .encode(field)
                    .map_err(|source| SerializeError::FieldEncode {
                        index,
                        field_id: field.id.clone(),
                        source,
                    })?;
            records.push(Value::Object(record));
        }

        let mut document = Record::new();
        document.insert(
            "model".to_string(),
            Value::Object(self.model_codec.encode(form)),
        );
        document.insert("fields".to_string(), Value::Array(records));

        // Serializing an in-memory `Value` tree cannot fail.
        Ok(serde_json::to_string_pretty(&Value::Object(document))
            .expect("serializing a JSON value is infallible"))
    }

    /// Reconstructs a form from its document: the model section first, then
    /// each field record in document order, order preserved.
    ///
    /// Fails on the first field whose decode fails, naming its position and
    /// id; no partial form is returned.
    pub fn deserialize(&self, text: &str) -> Result<FormDefinition, DeserializeError> {
        let document: Value = serde_json::from_str(text)
            .map_err(|err| DeserializeError::MalformedDocument(err.to_string()))?;
        let root = document.as_object().ok_or_else(|| {
            DeserializeError::MalformedDocument("top level is not an object".to_string())
        })?;

        let model = section(root, "model")?.as_object().ok_or_else(|| {
            DeserializeError::MalformedDocument("'model' section is not an object".to_string())
        })?;
        let records = section(root, "fields")?.as_array().ok_or_else(|| {
            DeserializeError::MalformedDocument("'fields' section is not an array".to_string())
        })?;

        let (id, name, layout) = self.model_codec.decode(model)?;
        let mut form = FormDefinition::new(id, name);
        form.layout = layout;

        let field_codec = FieldCodec::new(&self.registry);
        for (index, record) in records.iter().enumerate() {
            let field =
                field_codec
                    .decode(record)
                    .map_err(|source| DeserializeError::FieldDecode {
                        index,
                        field_id: record
                            .get("id")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                        source,
                    })?;
            form.add_field(field);
        }

        Ok(form)
    }
}

impl Default for FormSerializer {
    fn default() -> Self {
        Self::new()
    }
}

fn section<'a>(root: &'a Record, name: &str) -> Result<&'a Value, DeserializeError> {
    root.get(name)
        .ok_or_else(|| DeserializeError::MalformedDocument(format!("missing '{}' section", name)))
}
