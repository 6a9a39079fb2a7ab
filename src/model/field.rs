use std::fmt;

/// A single form field: the attributes shared by every field kind, plus the
/// kind-specific payload.
///
/// Field ids are expected to be unique within a form. An empty id is filled
/// in by [`FormDefinition::add_field`](super::FormDefinition::add_field).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub id: String,
    pub name: String,
    pub label: String,
    /// The model property path this field reads from and writes to.
    pub binding: String,
    /// Fully qualified type name of the bound value when the field is used
    /// outside a form context.
    pub standalone_class_name: Option<String>,
    pub kind: FieldKind,
}

impl FieldDefinition {
    /// Creates a field of the given kind with all shared attributes empty.
    pub fn empty(kind: FieldKind) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            label: String::new(),
            binding: String::new(),
            standalone_class_name: None,
            kind,
        }
    }
}

/// The closed set of field kinds, each with its own payload.
///
/// Every kind has a stable type code used as the discriminator in serialized
/// form; the mapping lives in the
/// [`FieldTypeRegistry`](crate::registry::FieldTypeRegistry).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    TextBox {
        placeholder: Option<String>,
        max_length: Option<u32>,
    },
    TextArea {
        placeholder: Option<String>,
        rows: Option<u32>,
    },
    IntegerBox {
        placeholder: Option<String>,
    },
    DecimalBox {
        placeholder: Option<String>,
    },
    CheckBox,
    DatePicker {
        show_time: bool,
    },
    ListBox {
        options: Vec<String>,
    },
    RadioGroup {
        options: Vec<String>,
        inline: bool,
    },
    SubForm {
        /// Id of the form rendered for the nested model.
        nested_form: Option<String>,
    },
    MultipleSubForm {
        /// Id of the form used to create new rows.
        creation_form: Option<String>,
        /// Id of the form used to edit existing rows.
        edition_form: Option<String>,
        /// Bindings of the columns shown in the row table.
        columns: Vec<String>,
    },
}

impl FieldKind {
    /// The Rust variant's name, used in diagnostics when a kind has no
    /// registered type code.
    pub fn variant_name(&self) -> &'static str {
        match self {
            FieldKind::TextBox { .. } => "TextBox",
            FieldKind::TextArea { .. } => "TextArea",
            FieldKind::IntegerBox { .. } => "IntegerBox",
            FieldKind::DecimalBox { .. } => "DecimalBox",
            FieldKind::CheckBox => "CheckBox",
            FieldKind::DatePicker { .. } => "DatePicker",
            FieldKind::ListBox { .. } => "ListBox",
            FieldKind::RadioGroup { .. } => "RadioGroup",
            FieldKind::SubForm { .. } => "SubForm",
            FieldKind::MultipleSubForm { .. } => "MultipleSubForm",
        }
    }

    /// Whether this kind references other forms rather than a scalar value.
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            FieldKind::SubForm { .. } | FieldKind::MultipleSubForm { .. }
        )
    }
}

impl fmt::Display for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind.variant_name(), self.id)?;
        if !self.binding.is_empty() {
            write!(f, " -> {}", self.binding)?;
        }
        Ok(())
    }
}
