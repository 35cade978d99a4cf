//! Validated catalog entry

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One catalog record describing a submitted application
///
/// Only produced by [`validate_app_data`](super::validate_app_data), so every
/// instance satisfies the required-field contract. The submitted object is
/// kept as-is, including key order and any extra keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppEntry(Map<String, Value>);

impl AppEntry {
    pub(super) const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// App name
    pub fn name(&self) -> &str {
        self.str_field("name")
    }

    /// App version
    pub fn version(&self) -> &str {
        self.str_field("version")
    }

    /// Raw field access
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Convert into a plain JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    fn str_field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}
