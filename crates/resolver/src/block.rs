use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The generic attribute map of one variant block, as the configuration layer
/// sees it.
///
/// This is the only place untyped values appear; codecs turn it into typed
/// payloads and back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBlock(Map<String, Value>);

impl PropertyBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up an attribute. Explicit nulls are reported as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Returns `true` if the attribute holds a non-empty, non-zero value.
    ///
    /// Empty strings, lists and maps, `false`, `0` and null all count as
    /// unpopulated.
    pub fn is_populated(&self, key: &str) -> bool {
        match self.0.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        }
    }

    /// Returns `true` if the block has no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of attributes in the block.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<PropertyBlock> for Value {
    fn from(block: PropertyBlock) -> Self {
        Value::Object(block.0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn populated_values() {
        let block = PropertyBlock::new()
            .with("s", "x")
            .with("list", json!(["a"]))
            .with("map", json!({"k": "v"}))
            .with("yes", true)
            .with("n", 3);
        for key in ["s", "list", "map", "yes", "n"] {
            assert!(block.is_populated(key), "{key} should be populated");
        }
    }

    #[test]
    fn unpopulated_values() {
        let block = PropertyBlock::new()
            .with("s", "")
            .with("list", json!([]))
            .with("map", json!({}))
            .with("no", false)
            .with("zero", 0)
            .with("null", Value::Null);
        for key in ["s", "list", "map", "no", "zero", "null", "absent"] {
            assert!(!block.is_populated(key), "{key} should not be populated");
        }
    }

    #[test]
    fn get_hides_nulls() {
        let block = PropertyBlock::new().with("a", Value::Null).with("b", "x");
        assert!(block.get("a").is_none());
        assert_eq!(block.get("b"), Some(&json!("x")));
        assert_eq!(block.len(), 2);
        assert!(!block.is_empty());
        assert!(PropertyBlock::new().is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let block = PropertyBlock::new().with("url", "https://example.org");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json, json!({"url": "https://example.org"}));

        let back: PropertyBlock = serde_json::from_value(json).unwrap();
        assert_eq!(back, block);
    }
}
