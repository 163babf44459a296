//! Typed field values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::FieldType;

/// A decoded, schema-conformant value.
///
/// `None` is the explicit "no value" sentinel: the natural empty value for
/// number fields (which have no meaningful zero) and the decoded result of
/// an absent number key without a configured default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    StrList(Vec<String>),
    Num(f64),
    NumList(Vec<f64>),
    Bool(bool),
    None,
}

impl Value {
    /// The type-dependent empty value used when a schema entry declares no
    /// default: `""` for strings, `[]` for lists, `false` for booleans, and
    /// `None` for numbers.
    pub fn empty(field_type: FieldType) -> Value {
        match field_type {
            FieldType::String => Value::Str(String::new()),
            FieldType::StringList => Value::StrList(Vec::new()),
            FieldType::Number => Value::None,
            FieldType::NumberList => Value::NumList(Vec::new()),
            FieldType::Bool => Value::Bool(false),
        }
    }

    /// Returns true if this value has the shape the given field type expects.
    /// `None` is accepted for `Number` only.
    pub fn matches(&self, field_type: FieldType) -> bool {
        matches!(
            (self, field_type),
            (Value::Str(_), FieldType::String)
                | (Value::StrList(_), FieldType::StringList)
                | (Value::Num(_), FieldType::Number)
                | (Value::None, FieldType::Number)
                | (Value::NumList(_), FieldType::NumberList)
                | (Value::Bool(_), FieldType::Bool)
        )
    }

    pub fn is_empty_list(&self) -> bool {
        match self {
            Value::StrList(values) => values.is_empty(),
            Value::NumList(values) => values.is_empty(),
            _ => false,
        }
    }

    pub fn is_nonempty_list(&self) -> bool {
        match self {
            Value::StrList(values) => !values.is_empty(),
            Value::NumList(values) => !values.is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str_list(&self) -> Option<&[String]> {
        match self {
            Value::StrList(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_num_list(&self) -> Option<&[f64]> {
        match self {
            Value::NumList(values) => Some(values),
            _ => None,
        }
    }
}

/// Formats a number the way it appears on the wire: integral values without
/// a trailing `.0`, everything else via the shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(value) => f.write_str(value),
            Value::StrList(values) => f.write_str(&values.join(", ")),
            Value::Num(value) => f.write_str(&format_number(*value)),
            Value::NumList(values) => {
                let rendered: Vec<String> = values.iter().map(|v| format_number(*v)).collect();
                f.write_str(&rendered.join(", "))
            }
            Value::Bool(value) => write!(f, "{value}"),
            Value::None => Ok(()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Num(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Num(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::StrList(values)
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Value::StrList(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Value::NumList(values)
    }
}
