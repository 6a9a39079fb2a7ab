pub mod field;
pub mod model;
pub(crate) mod record;

pub use field::*;
pub use model::*;

/// A structured record: one JSON object worth of keys.
pub type Record = serde_json::Map<String, serde_json::Value>;
