use thiserror::Error;

/// Errors raised by the field type registry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Field variant '{variant}' has no registered type code")]
    UnknownFieldVariant { variant: String },

    #[error("No field type is registered for code '{code}'")]
    UnknownDiscriminator { code: String },
}

/// Errors raised while encoding or decoding a single field record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldCodecError {
    #[error("Field record is malformed: {0}")]
    MalformedFieldRecord(String),

    #[error("Attribute '{key}' expected a {expected}, but found '{found}'")]
    AttributeTypeMismatch {
        key: String,
        expected: &'static str,
        found: String,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors raised while decoding the form model section.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelCodecError {
    #[error("Form model record is malformed: missing or invalid '{key}'")]
    MalformedModelRecord { key: String },
}

/// Errors raised by [`FormSerializer::serialize`](crate::serializer::FormSerializer::serialize).
///
/// A failure on any field aborts the whole call; no partial document is
/// produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SerializeError {
    #[error("Failed to encode field '{field_id}' at position {index}: {source}")]
    FieldEncode {
        index: usize,
        field_id: String,
        source: FieldCodecError,
    },
}

/// Errors raised by [`FormSerializer::deserialize`](crate::serializer::FormSerializer::deserialize).
///
/// A failure on any field aborts the whole call; no partial form is
/// reconstructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeserializeError {
    #[error("Form document is malformed: {0}")]
    MalformedDocument(String),

    #[error("Failed to decode form model section: {0}")]
    Model(#[from] ModelCodecError),

    #[error("Failed to decode field record at position {index} (id '{field_id}'): {source}")]
    FieldDecode {
        index: usize,
        field_id: String,
        source: FieldCodecError,
    },
}
