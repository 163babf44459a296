//! Raw query snapshots: the string-keyed form delivered by a navigation
//! layer, before any typing is applied.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// The raw value(s) carried under one query-string key. Transports may
/// deliver one string or, for repeated keys, several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    One(String),
    Many(Vec<String>),
}

impl RawValue {
    /// The carried tokens as a slice, regardless of arity.
    pub fn tokens(&self) -> &[String] {
        match self {
            RawValue::One(value) => std::slice::from_ref(value),
            RawValue::Many(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RawValue::One(_) => 1,
            RawValue::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::One(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::One(value)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(values: Vec<String>) -> Self {
        RawValue::Many(values)
    }
}

impl From<Vec<&str>> for RawValue {
    fn from(values: Vec<&str>) -> Self {
        RawValue::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// A raw query snapshot: ordered mapping from key to [`RawValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryMap {
    entries: BTreeMap<String, RawValue>,
}

impl QueryMap {
    pub fn new() -> QueryMap {
        QueryMap::default()
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Appends a token under `key`, promoting an existing single value to a
    /// multi-value. Used when accumulating repeated keys off the wire.
    pub fn append(&mut self, key: impl Into<String>, token: impl Into<String>) {
        let token = token.into();
        match self.entries.entry(key.into()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(RawValue::One(token));
            }
            btree_map::Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                let mut tokens = match std::mem::replace(slot, RawValue::Many(Vec::new())) {
                    RawValue::One(first) => vec![first],
                    RawValue::Many(values) => values,
                };
                tokens.push(token);
                *slot = RawValue::Many(tokens);
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
