//! Tests for the field and form-model codecs.
mod common;
use common::*;
use serde_json::json;
use yoshiki::codec::{FieldCodec, FormModelCodec};
use yoshiki::prelude::*;

#[test]
fn test_encode_emits_code_and_shared_attributes() {
    let registry = FieldTypeRegistry::with_default_types();
    let codec = FieldCodec::new(&registry);

    let mut field = text_field("f1", "title");
    field.standalone_class_name = Some("java.lang.String".to_string());

    let record = codec.encode(&field).unwrap();
    assert_eq!(record["code"], json!("TextBox"));
    assert_eq!(record["id"], json!("f1"));
    assert_eq!(record["name"], json!("title"));
    assert_eq!(record["label"], json!("title"));
    assert_eq!(record["binding"], json!("title"));
    assert_eq!(record["standaloneClassName"], json!("java.lang.String"));
}

#[test]
fn test_encode_omits_default_values() {
    let registry = FieldTypeRegistry::with_default_types();
    let codec = FieldCodec::new(&registry);

    let field = text_field("f1", "title");
    let record = codec.encode(&field).unwrap();

    // No placeholder or max length was set, so neither key is emitted.
    assert!(!record.contains_key("placeholder"));
    assert!(!record.contains_key("maxLength"));
    assert!(!record.contains_key("standaloneClassName"));

    let picker = FieldDefinition::empty(FieldKind::DatePicker { show_time: false });
    let record = codec.encode(&picker).unwrap();
    assert!(!record.contains_key("showTime"));
}

#[test]
fn test_encode_variant_specific_keys() {
    let registry = FieldTypeRegistry::with_default_types();
    let codec = FieldCodec::new(&registry);

    let mut listbox = FieldDefinition::empty(FieldKind::ListBox {
        options: vec!["red".to_string(), "green".to_string()],
    });
    listbox.id = "colors".to_string();

    let record = codec.encode(&listbox).unwrap();
    assert_eq!(record["options"], json!(["red", "green"]));

    let subform = FieldDefinition::empty(FieldKind::SubForm {
        nested_form: Some("addressForm".to_string()),
    });
    let record = codec.encode(&subform).unwrap();
    assert_eq!(record["nestedForm"], json!("addressForm"));
}

#[test]
fn test_decode_populates_defaults_for_absent_keys() {
    let registry = FieldTypeRegistry::with_default_types();
    let codec = FieldCodec::new(&registry);

    let field = codec.decode(&json!({ "code": "RadioGroup" })).unwrap();
    assert_eq!(
        field.kind,
        FieldKind::RadioGroup {
            options: Vec::new(),
            inline: false,
        }
    );
    assert!(field.id.is_empty());
    assert!(field.standalone_class_name.is_none());
}

#[test]
fn test_decode_null_reads_as_absent() {
    let registry = FieldTypeRegistry::with_default_types();
    let codec = FieldCodec::new(&registry);

    let field = codec
        .decode(&json!({ "code": "TextBox", "placeholder": null }))
        .unwrap();
    assert_eq!(
        field.kind,
        FieldKind::TextBox {
            placeholder: None,
            max_length: None,
        }
    );
}

#[test]
fn test_decode_rejects_attribute_type_mismatch() {
    let registry = FieldTypeRegistry::with_default_types();
    let codec = FieldCodec::new(&registry);

    let result = codec.decode(&json!({ "code": "DatePicker", "showTime": "yes" }));
    match result {
        Err(FieldCodecError::AttributeTypeMismatch { key, expected, .. }) => {
            assert_eq!(key, "showTime");
            assert_eq!(expected, "boolean");
        }
        other => panic!("Expected AttributeTypeMismatch, got {:?}", other),
    }

    let result = codec.decode(&json!({ "code": "TextBox", "maxLength": -5 }));
    match result {
        Err(FieldCodecError::AttributeTypeMismatch { key, .. }) => assert_eq!(key, "maxLength"),
        other => panic!("Expected AttributeTypeMismatch, got {:?}", other),
    }

    let result = codec.decode(&json!({ "code": "ListBox", "options": ["ok", 12] }));
    match result {
        Err(FieldCodecError::AttributeTypeMismatch { key, .. }) => assert_eq!(key, "options"),
        other => panic!("Expected AttributeTypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_decode_rejects_missing_discriminator() {
    let registry = FieldTypeRegistry::with_default_types();
    let codec = FieldCodec::new(&registry);

    for record in [json!({ "id": "f1" }), json!({ "code": 42 }), json!("text")] {
        match codec.decode(&record) {
            Err(FieldCodecError::MalformedFieldRecord(_)) => {}
            other => panic!("Expected MalformedFieldRecord, got {:?}", other),
        }
    }
}

#[test]
fn test_decode_propagates_unknown_discriminator() {
    let registry = FieldTypeRegistry::with_default_types();
    let codec = FieldCodec::new(&registry);

    match codec.decode(&json!({ "code": "HoloDeck" })) {
        Err(FieldCodecError::Registry(RegistryError::UnknownDiscriminator { code })) => {
            assert_eq!(code, "HoloDeck")
        }
        other => panic!("Expected UnknownDiscriminator, got {:?}", other),
    }
}

#[test]
fn test_field_codec_round_trip_preserves_payload() {
    let registry = FieldTypeRegistry::with_default_types();
    let codec = FieldCodec::new(&registry);

    let mut field = FieldDefinition::empty(FieldKind::MultipleSubForm {
        creation_form: Some("rowCreate".to_string()),
        edition_form: Some("rowEdit".to_string()),
        columns: vec!["name".to_string(), "amount".to_string()],
    });
    field.id = "rows".to_string();
    field.binding = "order.rows".to_string();
    field.standalone_class_name = Some("org.test.Row".to_string());

    let record = codec.encode(&field).unwrap();
    let decoded = codec.decode(&serde_json::Value::Object(record)).unwrap();
    assert_eq!(decoded, field);
}

#[test]
fn test_model_codec_round_trip_with_layout_passthrough() {
    let codec = FormModelCodec;

    let mut form = FormDefinition::new("testForm", "Test Form");
    form.layout = json!({
        "rows": [ { "columns": [ { "span": 12 } ] } ],
        "style": "FLUID",
    })
    .into();

    let record = codec.encode(&form);
    let (id, name, layout) = codec.decode(&record).unwrap();

    assert_eq!(id, "testForm");
    assert_eq!(name, "Test Form");
    assert_eq!(layout, form.layout);
}

#[test]
fn test_model_codec_rejects_missing_keys() {
    let codec = FormModelCodec;

    let no_name = json!({ "id": "f" });
    match codec.decode(no_name.as_object().unwrap()) {
        Err(ModelCodecError::MalformedModelRecord { key }) => assert_eq!(key, "name"),
        other => panic!("Expected MalformedModelRecord, got {:?}", other),
    }

    let no_id = json!({ "name": "f" });
    match codec.decode(no_id.as_object().unwrap()) {
        Err(ModelCodecError::MalformedModelRecord { key }) => assert_eq!(key, "id"),
        other => panic!("Expected MalformedModelRecord, got {:?}", other),
    }
}
