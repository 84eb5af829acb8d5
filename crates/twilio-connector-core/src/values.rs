//! The untyped field-value mapping supplied with a creation request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field-value mapping supplied by the caller of a create request.
///
/// The semantics of the fields depend on the model being created; the bag
/// itself is schemaless. Fields are never validated locally — adapters read
/// what they need and forward empty strings for anything missing, so the
/// provider reports malformed requests instead of this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueBag(Map<String, Value>);

impl ValueBag {
    /// Creates an empty value bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Inserts a field (builder pattern).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the raw value of a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a field as a string slice, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns a field as a string slice, or `""` when absent.
    ///
    /// Adapters use this to pass missing fields through to the provider
    /// rather than rejecting the request locally.
    pub fn str_or_empty(&self, key: &str) -> &str {
        self.get_str(key).unwrap_or("")
    }

    /// Returns the number of fields in the bag.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ValueBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValueBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_str_accessors() {
        let values = ValueBag::new()
            .with("to", "+359899638562")
            .with("count", 3);

        assert_eq!(values.get_str("to"), Some("+359899638562"));
        assert_eq!(values.str_or_empty("to"), "+359899638562");
        // Missing and non-string fields both read as empty.
        assert_eq!(values.str_or_empty("body"), "");
        assert_eq!(values.str_or_empty("count"), "");
    }

    #[test]
    fn test_collects_from_pairs() {
        let values: ValueBag = [("to", "+359899638562")].into_iter().collect();
        assert_eq!(values.get_str("to"), Some("+359899638562"));
        assert!(!values.is_empty());
    }

    #[test]
    fn test_deserializes_from_json_body() {
        let values: ValueBag =
            serde_json::from_value(json!({"to": "+359899638562", "body": "Hi there !"})).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values.get_str("body"), Some("Hi there !"));
    }
}
