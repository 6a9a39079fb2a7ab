use super::field::FieldDefinition;
use super::layout::LayoutTemplate;
use itertools::Itertools;

/// An identified, named aggregate of fields with an opaque layout template.
///
/// Field insertion order is significant and is preserved across a
/// serialize/deserialize round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDefinition {
    pub id: String,
    pub name: String,
    pub layout: LayoutTemplate,
    pub fields: Vec<FieldDefinition>,
}

impl FormDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layout: LayoutTemplate::default(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, generating a unique id (`field_<n>`) when the
    /// incoming field's id is empty.
    pub fn add_field(&mut self, mut field: FieldDefinition) {
        if field.id.is_empty() {
            field.id = self.next_field_id();
        }
        self.fields.push(field);
    }

    fn next_field_id(&self) -> String {
        let mut n = self.fields.len();
        loop {
            let candidate = format!("field_{}", n);
            if self.fields.iter().all(|f| f.id != candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Finds a field by its id.
    pub fn field_by_id(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Returns the ids that appear on more than one field, in first-seen
    /// order. Serialization does not reject duplicates; a designer front end
    /// can use this to enforce uniqueness at edit time.
    pub fn duplicate_field_ids(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(|f| f.id.as_str())
            .duplicates()
            .collect()
    }
}
