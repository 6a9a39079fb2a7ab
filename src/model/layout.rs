use serde::{Deserialize, Serialize};

/// Opaque structured description of a form's visual arrangement.
///
/// This subsystem never interprets the template; it is carried through
/// serialization unchanged. The default is an empty JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutTemplate(pub serde_json::Value);

impl Default for LayoutTemplate {
    fn default() -> Self {
        LayoutTemplate(serde_json::Value::Object(serde_json::Map::new()))
    }
}

impl From<serde_json::Value> for LayoutTemplate {
    fn from(value: serde_json::Value) -> Self {
        LayoutTemplate(value)
    }
}
