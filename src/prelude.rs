//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the yoshiki crate. Import
//! this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use yoshiki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let document = std::fs::read_to_string("path/to/form.json")?;
//!
//! let serializer = FormSerializer::new();
//! let form = serializer.deserialize(&document)?;
//!
//! println!("Form '{}' has {} fields", form.name, form.fields.len());
//! # Ok(())
//! # }
//! ```

// Core model types
pub use crate::model::{FieldDefinition, FieldKind, FormDefinition, LayoutTemplate};

// Registry and serialization
pub use crate::codec::{FieldCodec, FormModelCodec};
pub use crate::registry::{FieldTypeDescriptor, FieldTypeRegistry};
pub use crate::serializer::FormSerializer;

// Error types
pub use crate::error::{
    DeserializeError, FieldCodecError, ModelCodecError, RegistryError, SerializeError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
