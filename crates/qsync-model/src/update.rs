//! Partial update requests.
//!
//! Callers may mix typed values with raw strings taken straight from input
//! sources (form fields, CLI arguments); the codec coerces both through the
//! same rules. Only the named fields are touched by an update.

use std::collections::BTreeMap;

use crate::value::Value;

/// One updated field value.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateValue {
    /// An already-typed value; coercion is a fixed point on these.
    Typed(Value),
    /// A raw token, coerced under the field's declared type.
    Raw(String),
    /// Raw tokens for a list field (or a repeated-key scalar).
    RawList(Vec<String>),
    /// Unset the field: its key is removed and decoding falls back to the
    /// default.
    Clear,
}

impl From<Value> for UpdateValue {
    fn from(value: Value) -> Self {
        UpdateValue::Typed(value)
    }
}

impl From<&str> for UpdateValue {
    fn from(value: &str) -> Self {
        UpdateValue::Raw(value.to_string())
    }
}

impl From<String> for UpdateValue {
    fn from(value: String) -> Self {
        UpdateValue::Raw(value)
    }
}

impl From<f64> for UpdateValue {
    fn from(value: f64) -> Self {
        UpdateValue::Typed(Value::Num(value))
    }
}

impl From<i64> for UpdateValue {
    fn from(value: i64) -> Self {
        UpdateValue::Typed(Value::Num(value as f64))
    }
}

impl From<bool> for UpdateValue {
    fn from(value: bool) -> Self {
        UpdateValue::Typed(Value::Bool(value))
    }
}

impl From<Vec<String>> for UpdateValue {
    fn from(values: Vec<String>) -> Self {
        UpdateValue::RawList(values)
    }
}

impl From<Vec<&str>> for UpdateValue {
    fn from(values: Vec<&str>) -> Self {
        UpdateValue::RawList(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<f64>> for UpdateValue {
    fn from(values: Vec<f64>) -> Self {
        UpdateValue::Typed(Value::NumList(values))
    }
}

/// A partial mapping from field name to new value, built fluently:
///
/// ```
/// use qsync_model::Update;
///
/// let update = Update::new().set("tab", "tab2").set("page", 3i64).clear("filter");
/// assert_eq!(update.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    entries: BTreeMap<String, UpdateValue>,
}

impl Update {
    pub fn new() -> Update {
        Update::default()
    }

    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<UpdateValue>) -> Update {
        self.entries.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn clear(mut self, name: impl Into<String>) -> Update {
        self.entries.insert(name.into(), UpdateValue::Clear);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<UpdateValue>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&UpdateValue> {
        self.entries.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UpdateValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
