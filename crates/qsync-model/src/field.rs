//! Field types, field specs, and schemas.
//!
//! A caller declares state as a mapping from field name to [`FieldSpec`];
//! [`Schema::build`] normalizes every spec into a canonical [`Field`] record
//! (type plus resolved default) and validates default shapes up front.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::value::Value;

/// The primitive type of a query-string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "string[]")]
    StringList,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "number[]")]
    NumberList,
    #[serde(rename = "boolean")]
    Bool,
}

impl FieldType {
    /// Returns the canonical name used in schema files and display output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::StringList => "string[]",
            FieldType::Number => "number",
            FieldType::NumberList => "number[]",
            FieldType::Bool => "boolean",
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, FieldType::StringList | FieldType::NumberList)
    }

    /// The scalar counterpart of a list type; scalar types map to themselves.
    pub fn scalar(&self) -> FieldType {
        match self {
            FieldType::StringList => FieldType::String,
            FieldType::NumberList => FieldType::Number,
            other => *other,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(FieldType::String),
            "string[]" => Ok(FieldType::StringList),
            "number" => Ok(FieldType::Number),
            "number[]" => Ok(FieldType::NumberList),
            "boolean" => Ok(FieldType::Bool),
            other => Err(SchemaError::UnknownType(other.to_string())),
        }
    }
}

/// A caller-supplied field declaration: either a bare type tag or a full
/// descriptor with an explicit default.
///
/// Serialized forms (e.g. in a JSON schema file):
///
/// ```json
/// { "num": "number", "tab": { "type": "string", "default": "tab1" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldSpec {
    Shorthand(FieldType),
    Full {
        #[serde(rename = "type")]
        field_type: FieldType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Value>,
    },
}

impl FieldSpec {
    pub fn shorthand(field_type: FieldType) -> FieldSpec {
        FieldSpec::Shorthand(field_type)
    }

    pub fn with_default(field_type: FieldType, default: impl Into<Value>) -> FieldSpec {
        FieldSpec::Full {
            field_type,
            default: Some(default.into()),
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            FieldSpec::Shorthand(field_type) => *field_type,
            FieldSpec::Full { field_type, .. } => *field_type,
        }
    }

    /// Expands this spec into its canonical record, substituting the
    /// type-dependent empty value when no default is declared.
    pub fn normalize(&self) -> Field {
        match self {
            FieldSpec::Shorthand(field_type) => Field {
                field_type: *field_type,
                default: Value::empty(*field_type),
            },
            FieldSpec::Full {
                field_type,
                default,
            } => Field {
                field_type: *field_type,
                default: default
                    .clone()
                    .unwrap_or_else(|| Value::empty(*field_type)),
            },
        }
    }
}

impl From<FieldType> for FieldSpec {
    fn from(field_type: FieldType) -> Self {
        FieldSpec::Shorthand(field_type)
    }
}

/// The canonical normalized form of a [`FieldSpec`]: declared type plus the
/// resolved default. This doubles as the default-table entry for the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub field_type: FieldType,
    pub default: Value,
}

/// An immutable mapping from field name to normalized [`Field`].
///
/// Defaults are resolved once at build time, so the default table is part of
/// the schema itself rather than a separately memoized structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    fields: BTreeMap<String, Field>,
}

impl Schema {
    /// Builds a schema from field declarations, rejecting any declared
    /// default whose shape does not match its field type.
    pub fn build<K, S>(specs: impl IntoIterator<Item = (K, S)>) -> Result<Schema>
    where
        K: Into<String>,
        S: Into<FieldSpec>,
    {
        let mut fields = BTreeMap::new();
        for (name, spec) in specs {
            let name = name.into();
            let field = spec.into().normalize();
            if !field.default.matches(field.field_type) {
                return Err(SchemaError::DefaultTypeMismatch {
                    field: name,
                    field_type: field.field_type,
                });
            }
            fields.insert(name, field);
        }
        Ok(Schema { fields })
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The default value for a field, if the field is declared.
    pub fn default_for(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).map(|field| &field.default)
    }
}
