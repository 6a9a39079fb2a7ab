//! The field type registry: the closed-world mapping between type codes and
//! field kinds.
//!
//! The registry is built once at start-up from the static table of built-in
//! descriptors and shared read-only afterwards. Custom descriptors can be
//! registered before serialization traffic begins.

use crate::error::RegistryError;
use crate::model::{FieldDefinition, FieldKind};
use ahash::AHashMap;
use std::mem::{self, Discriminant};

/// Describes one registrable field type: its wire code and a factory
/// producing an empty payload of that kind.
#[derive(Debug, Clone)]
pub struct FieldTypeDescriptor {
    pub code: &'static str,
    pub factory: fn() -> FieldKind,
}

/// Master macro defining the built-in field types and their empty payloads.
macro_rules! define_field_types {
    ( $( ($code:expr, $empty:expr) ),* $(,)? ) => {
        /// The complete set of built-in field type descriptors, basic types
        /// first, then the relational types.
        pub fn default_descriptors() -> Vec<FieldTypeDescriptor> {
            vec![
                $( FieldTypeDescriptor { code: $code, factory: || $empty }, )*
            ]
        }
    };
}

define_field_types! {
    // Basic types
    ("TextBox", FieldKind::TextBox { placeholder: None, max_length: None }),
    ("TextArea", FieldKind::TextArea { placeholder: None, rows: None }),
    ("IntegerBox", FieldKind::IntegerBox { placeholder: None }),
    ("DecimalBox", FieldKind::DecimalBox { placeholder: None }),
    ("CheckBox", FieldKind::CheckBox),
    ("DatePicker", FieldKind::DatePicker { show_time: false }),
    ("ListBox", FieldKind::ListBox { options: Vec::new() }),
    ("RadioGroup", FieldKind::RadioGroup { options: Vec::new(), inline: false }),

    // Relational types
    ("SubForm", FieldKind::SubForm { nested_form: None }),
    ("MultipleSubForm", FieldKind::MultipleSubForm {
        creation_form: None,
        edition_form: None,
        columns: Vec::new(),
    }),
}

/// Immutable (after construction) two-way mapping between type codes and
/// field kinds.
pub struct FieldTypeRegistry {
    factories: AHashMap<String, fn() -> FieldKind>,
    codes: AHashMap<Discriminant<FieldKind>, String>,
}

impl FieldTypeRegistry {
    /// An empty registry. Most callers want
    /// [`with_default_types`](Self::with_default_types).
    pub fn new() -> Self {
        Self {
            factories: AHashMap::new(),
            codes: AHashMap::new(),
        }
    }

    /// A registry holding every built-in field type.
    pub fn with_default_types() -> Self {
        let mut registry = Self::new();
        for descriptor in default_descriptors() {
            registry.register(descriptor);
        }
        registry
    }

    /// Registers a descriptor. Registering a second code for the same kind
    /// makes the newer code the one used for encoding; both decode.
    pub fn register(&mut self, descriptor: FieldTypeDescriptor) {
        let kind = (descriptor.factory)();
        self.codes
            .insert(mem::discriminant(&kind), descriptor.code.to_string());
        self.factories
            .insert(descriptor.code.to_string(), descriptor.factory);
    }

    /// The wire code for a live field's kind.
    pub fn code_for(&self, field: &FieldDefinition) -> Result<&str, RegistryError> {
        self.codes
            .get(&mem::discriminant(&field.kind))
            .map(String::as_str)
            .ok_or_else(|| RegistryError::UnknownFieldVariant {
                variant: field.kind.variant_name().to_string(),
            })
    }

    /// Creates an empty field of the kind registered for `code`.
    pub fn instantiate(&self, code: &str) -> Result<FieldDefinition, RegistryError> {
        let factory = self
            .factories
            .get(code)
            .ok_or_else(|| RegistryError::UnknownDiscriminator {
                code: code.to_string(),
            })?;
        Ok(FieldDefinition::empty(factory()))
    }

    /// All registered codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for FieldTypeRegistry {
    fn default() -> Self {
        Self::with_default_types()
    }
}
