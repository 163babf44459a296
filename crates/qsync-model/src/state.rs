//! Decoded typed state.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::value::Value;

/// The decoded state object an application reads: one value per schema
/// field, total over the schema (absent keys decode to their defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypedState {
    values: BTreeMap<String, Value>,
}

impl TypedState {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    pub fn string_list(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).and_then(Value::as_str_list)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(Value::as_num)
    }

    pub fn number_list(&self, name: &str) -> Option<&[f64]> {
        self.values.get(name).and_then(Value::as_num_list)
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(Value::as_bool)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, Value)> for TypedState {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        TypedState {
            values: iter.into_iter().collect(),
        }
    }
}
