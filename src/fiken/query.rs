//! Query string parameters for Fiken requests.

use std::collections::BTreeMap;

use serde_json::Value;

/// Query parameters, kept sorted by key so encoded URLs are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value taken from tool arguments.
    ///
    /// Null, empty strings, arrays and objects are skipped.
    pub fn set_json(&mut self, key: impl Into<String>, value: &Value) {
        if let Some(formatted) = format_value(value) {
            self.0.insert(key.into(), formatted);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&self.0)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Format a JSON argument the way Fiken expects it in a query string.
fn format_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(
            n.as_i64()
                .map(|i| i.to_string())
                .or_else(|| n.as_u64().map(|u| u.to_string()))
                // Display drops a trailing ".0", so 2.0 becomes "2".
                .unwrap_or_else(|| n.as_f64().unwrap_or_default().to_string()),
        ),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
