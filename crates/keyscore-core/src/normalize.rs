//! Tolerant field resolution over loosely-shaped JSON payloads.
//!
//! Some keysco.re endpoints return the same logical attribute under several
//! names (`buildId`, `BuildID`, `buildid`, ...) and sometimes wrap the whole
//! payload in a `{"data": ...}` envelope. [`Fields`] hides both quirks behind
//! a small lookup API: every attribute is read through an ordered list of
//! candidate keys and the first non-empty string wins.

use serde_json::{Map, Value};

/// Key holding the real payload in an envelope object
pub const ENVELOPE_KEY: &str = "data";

/// Returns the payload inside a `{"data": ...}` envelope, or the value
/// itself when there is no envelope (or the envelope holds `null`).
#[must_use]
pub fn unwrap_envelope(value: &Value) -> &Value {
    match value.get(ENVELOPE_KEY) {
        Some(inner) if !inner.is_null() => inner,
        _ => value,
    }
}

/// Read-only view of a JSON object with variant-aware accessors
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// View a JSON object. Returns `None` if the value is not an object.
    #[must_use]
    pub fn new(value: &'a Value) -> Option<Self> {
        value.as_object().map(|map| Self { map })
    }

    /// View the payload of a possibly enveloped value
    #[must_use]
    pub fn unwrapped(value: &'a Value) -> Option<Self> {
        Self::new(unwrap_envelope(value))
    }

    /// String value of a single key. Missing or non-string values read as empty.
    #[must_use]
    pub fn str(&self, key: &str) -> &'a str {
        self.map.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    /// First non-empty string among `keys`, in order
    #[must_use]
    pub fn first_str(&self, keys: &[&str]) -> &'a str {
        keys.iter()
            .map(|key| self.str(key))
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }

    /// First element of a string array, if the array is present and non-empty
    #[must_use]
    pub fn first_of_list(&self, key: &str) -> &'a str {
        self.map
            .get(key)
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// All string elements of an array field; non-string elements are skipped
    #[must_use]
    pub fn str_list(&self, key: &str) -> Vec<String> {
        self.map
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope() {
        let wrapped = json!({"data": {"a": "1"}});
        assert_eq!(unwrap_envelope(&wrapped), &json!({"a": "1"}));

        let bare = json!({"a": "1"});
        assert_eq!(unwrap_envelope(&bare), &bare);

        let null_data = json!({"data": null, "a": "1"});
        assert_eq!(unwrap_envelope(&null_data), &null_data);
    }

    #[test]
    fn test_first_str_priority() {
        let value = json!({"second": "b", "first": "a"});
        let fields = Fields::new(&value).unwrap();
        assert_eq!(fields.first_str(&["first", "second"]), "a");
        assert_eq!(fields.first_str(&["second", "first"]), "b");
        assert_eq!(fields.first_str(&["missing"]), "");
    }

    #[test]
    fn test_first_str_skips_empty_and_non_strings() {
        let value = json!({"a": "", "b": 42, "c": null, "d": "found"});
        let fields = Fields::new(&value).unwrap();
        assert_eq!(fields.first_str(&["a", "b", "c", "d"]), "found");
    }

    #[test]
    fn test_lists() {
        let value = json!({"gpus": ["x", "y"], "empty": [], "mixed": ["a", 1, "b"]});
        let fields = Fields::new(&value).unwrap();
        assert_eq!(fields.first_of_list("gpus"), "x");
        assert_eq!(fields.first_of_list("empty"), "");
        assert_eq!(fields.str_list("mixed"), vec!["a", "b"]);
        assert!(fields.str_list("missing").is_empty());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(Fields::new(&json!([1, 2])).is_none());
        assert!(Fields::unwrapped(&json!({"data": "text"})).is_none());
    }
}
