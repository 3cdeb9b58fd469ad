//! Ordered update payloads.
//!
//! The position of a field in the payload decides its placeholder number, so
//! [`UpdatePayload`] keeps insertion order and never reorders keys.

use crate::error::{PatchError, PatchResult};
use crate::value::Value;
use serde::{Deserialize, Deserializer};

/// An ordered mapping of field name to new value.
///
/// Re-inserting a field replaces its value but keeps its original position.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePayload<V = Value> {
    entries: Vec<(String, V)>,
}

impl<V> UpdatePayload<V> {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a field (chainable).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<V>) -> Self {
        self.insert(field, value);
        self
    }

    /// Insert or replace a field, returning the previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<V>) -> Option<V> {
        let field = field.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == field) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((field, value));
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in iteration order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> Default for UpdatePayload<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IntoIterator for UpdatePayload<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, T, V> FromIterator<(K, T)> for UpdatePayload<V>
where
    K: Into<String>,
    T: Into<V>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut payload = Self::new();
        for (field, value) in iter {
            payload.insert(field, value);
        }
        payload
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for UpdatePayload<Value> {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

impl UpdatePayload<Value> {
    /// Build a payload from a JSON request body.
    ///
    /// The body must be an object; member order is kept.
    pub fn from_json(body: serde_json::Value) -> PatchResult<Self> {
        match body {
            serde_json::Value::Object(map) => Ok(map.into()),
            other => Err(PatchError::bad_request(format!(
                "Expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl TryFrom<serde_json::Value> for UpdatePayload<Value> {
    type Error = PatchError;

    fn try_from(body: serde_json::Value) -> PatchResult<Self> {
        Self::from_json(body)
    }
}

impl<'de> Deserialize<'de> for UpdatePayload<Value> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(map.into())
    }
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
