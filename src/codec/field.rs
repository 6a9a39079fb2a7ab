use super::record::*;
use super::Record;
use crate::error::FieldCodecError;
use crate::model::{FieldDefinition, FieldKind};
use crate::registry::FieldTypeRegistry;
use serde_json::Value;

/// The reserved discriminator key. It appears exactly once per field record,
/// so its occurrence count in a serialized document equals the field count.
pub const CODE_KEY: &str = "code";

/// Encodes and decodes a single field record, dispatching on the field's
/// kind via the registry.
pub struct FieldCodec<'r> {
    registry: &'r FieldTypeRegistry,
}

impl<'r> FieldCodec<'r> {
    pub fn new(registry: &'r FieldTypeRegistry) -> Self {
        Self { registry }
    }

    /// Produces the record for one field: the `code` discriminator, the
    /// shared attributes, then the kind-specific keys. Only keys with a
    /// defined, non-default value are emitted.
    pub fn encode(&self, field: &FieldDefinition) -> Result<Record, FieldCodecError> {
        let code = self.registry.code_for(field)?;

        let mut record = Record::new();
        record.insert(CODE_KEY.to_string(), Value::String(code.to_string()));
        put_string(&mut record, "id", &field.id);
        put_string(&mut record, "name", &field.name);
        put_string(&mut record, "label", &field.label);
        put_string(&mut record, "binding", &field.binding);
        put_opt_string(&mut record, "standaloneClassName", &field.standalone_class_name);

        match &field.kind {
            FieldKind::TextBox {
                placeholder,
                max_length,
            } => {
                put_opt_string(&mut record, "placeholder", placeholder);
                put_opt_u32(&mut record, "maxLength", max_length);
            }
            FieldKind::TextArea { placeholder, rows } => {
                put_opt_string(&mut record, "placeholder", placeholder);
                put_opt_u32(&mut record, "rows", rows);
            }
            FieldKind::IntegerBox { placeholder } | FieldKind::DecimalBox { placeholder } => {
                put_opt_string(&mut record, "placeholder", placeholder);
            }
            FieldKind::CheckBox => {}
            FieldKind::DatePicker { show_time } => {
                put_flag(&mut record, "showTime", *show_time);
            }
            FieldKind::ListBox { options } => {
                put_string_list(&mut record, "options", options);
            }
            FieldKind::RadioGroup { options, inline } => {
                put_string_list(&mut record, "options", options);
                put_flag(&mut record, "inline", *inline);
            }
            FieldKind::SubForm { nested_form } => {
                put_opt_string(&mut record, "nestedForm", nested_form);
            }
            FieldKind::MultipleSubForm {
                creation_form,
                edition_form,
                columns,
            } => {
                put_opt_string(&mut record, "creationForm", creation_form);
                put_opt_string(&mut record, "editionForm", edition_form);
                put_string_list(&mut record, "columns", columns);
            }
        }

        Ok(record)
    }

    /// Reconstructs a field from its record: reads the discriminator first,
    /// asks the registry for an empty instance of that kind, then populates
    /// attributes from the remaining keys. Absent keys keep the kind's
    /// defaults.
    pub fn decode(&self, value: &Value) -> Result<FieldDefinition, FieldCodecError> {
        let record = value.as_object().ok_or_else(|| {
            FieldCodecError::MalformedFieldRecord("field record is not an object".to_string())
        })?;
        let code = match record.get(CODE_KEY) {
            Some(Value::String(code)) => code,
            _ => {
                return Err(FieldCodecError::MalformedFieldRecord(format!(
                    "missing '{}' discriminator",
                    CODE_KEY
                )));
            }
        };

        let mut field = self.registry.instantiate(code)?;

        if let Some(id) = opt_string(record, "id")? {
            field.id = id;
        }
        if let Some(name) = opt_string(record, "name")? {
            field.name = name;
        }
        if let Some(label) = opt_string(record, "label")? {
            field.label = label;
        }
        if let Some(binding) = opt_string(record, "binding")? {
            field.binding = binding;
        }
        field.standalone_class_name = opt_string(record, "standaloneClassName")?;

        match &mut field.kind {
            FieldKind::TextBox {
                placeholder,
                max_length,
            } => {
                *placeholder = opt_string(record, "placeholder")?;
                *max_length = opt_u32(record, "maxLength")?;
            }
            FieldKind::TextArea { placeholder, rows } => {
                *placeholder = opt_string(record, "placeholder")?;
                *rows = opt_u32(record, "rows")?;
            }
            FieldKind::IntegerBox { placeholder } | FieldKind::DecimalBox { placeholder } => {
                *placeholder = opt_string(record, "placeholder")?;
            }
            FieldKind::CheckBox => {}
            FieldKind::DatePicker { show_time } => {
                *show_time = opt_bool(record, "showTime")?.unwrap_or(false);
            }
            FieldKind::ListBox { options } => {
                *options = opt_string_list(record, "options")?.unwrap_or_default();
            }
            FieldKind::RadioGroup { options, inline } => {
                *options = opt_string_list(record, "options")?.unwrap_or_default();
                *inline = opt_bool(record, "inline")?.unwrap_or(false);
            }
            FieldKind::SubForm { nested_form } => {
                *nested_form = opt_string(record, "nestedForm")?;
            }
            FieldKind::MultipleSubForm {
                creation_form,
                edition_form,
                columns,
            } => {
                *creation_form = opt_string(record, "creationForm")?;
                *edition_form = opt_string(record, "editionForm")?;
                *columns = opt_string_list(record, "columns")?.unwrap_or_default();
            }
        }

        Ok(field)
    }
}
