//! Common test utilities for building form definitions.
use yoshiki::prelude::*;

/// Creates a text field with its shared attributes derived from `name`.
#[allow(dead_code)]
pub fn text_field(id: &str, name: &str) -> FieldDefinition {
    let mut field = FieldDefinition::empty(FieldKind::TextBox {
        placeholder: None,
        max_length: None,
    });
    field.id = id.to_string();
    field.name = name.to_string();
    field.label = name.to_string();
    field.binding = name.to_string();
    field
}

#[allow(dead_code)]
pub fn integer_field(id: &str, name: &str) -> FieldDefinition {
    let mut field = FieldDefinition::empty(FieldKind::IntegerBox { placeholder: None });
    field.id = id.to_string();
    field.name = name.to_string();
    field.label = name.to_string();
    field.binding = name.to_string();
    field
}

#[allow(dead_code)]
pub fn checkbox_field(id: &str, name: &str) -> FieldDefinition {
    let mut field = FieldDefinition::empty(FieldKind::CheckBox);
    field.id = id.to_string();
    field.name = name.to_string();
    field.label = name.to_string();
    field.binding = name.to_string();
    field
}

#[allow(dead_code)]
pub fn multiple_subform_field(id: &str, name: &str, class_name: &str) -> FieldDefinition {
    let mut field = FieldDefinition::empty(FieldKind::MultipleSubForm {
        creation_form: Some(String::new()),
        edition_form: Some(String::new()),
        columns: Vec::new(),
    });
    field.id = id.to_string();
    field.name = name.to_string();
    field.label = name.to_string();
    field.binding = name.to_string();
    field.standalone_class_name = Some(class_name.to_string());
    field
}

/// A form exercising every field type registered in `registry`, one field
/// per type, each with distinctive shared attributes.
#[allow(dead_code)]
pub fn form_with_all_types(registry: &FieldTypeRegistry) -> FormDefinition {
    let mut form = FormDefinition::new("testForm", "testForm");

    let mut codes: Vec<_> = registry.codes().map(str::to_string).collect();
    codes.sort_unstable();

    for type_code in &codes {
        let mut field = registry
            .instantiate(type_code)
            .expect("registry listed an uninstantiable type");
        field.name = format!("{}_field", type_code);
        field.label = format!("{}_field", type_code);
        field.binding = format!("{}_field", type_code);
        field.standalone_class_name = Some(format!("org.test.{}", type_code));
        form.add_field(field);
    }

    form
}
