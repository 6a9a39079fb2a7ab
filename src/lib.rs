//! # Yoshiki - Form Definition Serialization Engine
//!
//! **Yoshiki** converts a typed, polymorphic form model into a pretty-printed
//! JSON interchange document and back, preserving field identity, insertion
//! order, and field kind across the round trip. It is the persistence layer
//! of a form designer: the designer builds a [`FormDefinition`] in memory,
//! Yoshiki turns it into text to store, and later reconstructs an identical
//! form from that text.
//!
//! ## Core Workflow
//!
//! 1.  **Build a Form**: Populate a `FormDefinition` with fields. Each field
//!     carries the attributes shared by all kinds (id, name, label, binding,
//!     standalone class name) plus a kind-specific payload (`FieldKind`).
//! 2.  **Serialize**: `FormSerializer::serialize` produces one JSON document
//!     with a `model` section and an ordered `fields` array, one record per
//!     field. Each record's `code` key is the field kind's discriminator.
//! 3.  **Deserialize**: `FormSerializer::deserialize` parses the document,
//!     looks each `code` up in the [`FieldTypeRegistry`], and rebuilds the
//!     form field by field in document order.
//!
//! The registry is closed-world: the built-in field types are assembled once
//! at start-up, and custom types can be registered before any serialization
//! traffic begins.
//!
//! ## Quick Start
//!
//! ```rust
//! use yoshiki::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut form = FormDefinition::new("invoice", "Invoice");
//!
//!     let mut amount = FieldDefinition::empty(FieldKind::DecimalBox { placeholder: None });
//!     amount.name = "amount".to_string();
//!     amount.label = "Amount".to_string();
//!     amount.binding = "invoice.amount".to_string();
//!     form.add_field(amount);
//!
//!     let mut paid = FieldDefinition::empty(FieldKind::CheckBox);
//!     paid.name = "paid".to_string();
//!     paid.label = "Paid".to_string();
//!     paid.binding = "invoice.paid".to_string();
//!     form.add_field(paid);
//!
//!     let serializer = FormSerializer::new();
//!     let document = serializer.serialize(&form)?;
//!
//!     let restored = serializer.deserialize(&document)?;
//!     assert_eq!(restored.fields.len(), 2);
//!     assert_eq!(restored.fields[0].binding, "invoice.amount");
//!
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod error;
pub mod model;
pub mod prelude;
pub mod registry;
pub mod serializer;

pub use model::{FieldDefinition, FieldKind, FormDefinition, LayoutTemplate};
pub use registry::FieldTypeRegistry;
pub use serializer::FormSerializer;
