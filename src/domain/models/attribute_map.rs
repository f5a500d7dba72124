//! String-keyed JSON mapping with named-field access.
//!
//! `AttributeMap` wraps a single `serde_json::Map`. Key lookup (`get`,
//! `map["key"]`) and the named accessors (`seed()`, `network_type()`, ...)
//! all go through that one map, so a write through any of them is visible
//! through every other.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::{ParamsError, ParamsResult};

/// Fields printed by the report, in output order.
pub const REPORT_FIELDS: [&str; 6] = [
    "network_type",
    "system_size_x",
    "system_size_y",
    "number_of_trials",
    "number_of_generations",
    "seed",
];

/// Top-level parameter document with attribute-style field reads.
///
/// Nested objects are left as plain [`Value::Object`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
    entries: Map<String, Value>,
}

impl AttributeMap {
    /// Wrap an existing mapping. Insertion order is kept.
    pub const fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Read a field, failing with [`ParamsError::MissingKey`] if it is absent.
    pub fn get(&self, key: &str) -> ParamsResult<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| ParamsError::MissingKey(key.to_string()))
    }

    /// Attribute-style read. Same as [`AttributeMap::get`].
    pub fn field(&self, name: &str) -> ParamsResult<&Value> {
        self.get(name)
    }

    /// Mutable field read, failing with [`ParamsError::MissingKey`] if absent.
    pub fn get_mut(&mut self, key: &str) -> ParamsResult<&mut Value> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| ParamsError::MissingKey(key.to_string()))
    }

    /// Set a field, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Remove a field, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Unwrap back into the plain mapping.
    pub fn into_inner(self) -> Map<String, Value> {
        self.entries
    }

    /// The `network_type` field.
    pub fn network_type(&self) -> ParamsResult<&Value> {
        self.get("network_type")
    }

    /// The `system_size_x` field.
    pub fn system_size_x(&self) -> ParamsResult<&Value> {
        self.get("system_size_x")
    }

    /// The `system_size_y` field.
    pub fn system_size_y(&self) -> ParamsResult<&Value> {
        self.get("system_size_y")
    }

    /// The `number_of_trials` field.
    pub fn number_of_trials(&self) -> ParamsResult<&Value> {
        self.get("number_of_trials")
    }

    /// The `number_of_generations` field.
    pub fn number_of_generations(&self) -> ParamsResult<&Value> {
        self.get("number_of_generations")
    }

    /// The `seed` field.
    pub fn seed(&self) -> ParamsResult<&Value> {
        self.get("seed")
    }
}

impl From<Map<String, Value>> for AttributeMap {
    fn from(entries: Map<String, Value>) -> Self {
        Self::new(entries)
    }
}

impl From<AttributeMap> for Map<String, Value> {
    fn from(map: AttributeMap) -> Self {
        map.into_inner()
    }
}

/// # Panics
///
/// Panics if `key` is not present, like the std map types.
impl Index<&str> for AttributeMap {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.entries.get(key) {
            Some(value) => value,
            None => panic!("no parameter named {key:?}"),
        }
    }
}

/// # Panics
///
/// Panics if `key` is not present. Use [`AttributeMap::insert`] to add keys.
impl IndexMut<&str> for AttributeMap {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.entries.get_mut(key) {
            Some(value) => value,
            None => panic!("no parameter named {key:?}"),
        }
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Render a value the way the report prints it: strings unquoted,
/// everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
