//! Schema sources: the built-in demo schema and JSON schema files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use qsync_model::field::{FieldSpec, FieldType, Schema};
use qsync_model::value::Value;

/// The demo schema: a free string, an optional number, a pet multi-select
/// with a non-empty default (exercising the explicitly-empty-list sentinel),
/// and a checkbox.
pub fn builtin_schema() -> Result<Schema> {
    let schema = Schema::build([
        ("str", FieldSpec::shorthand(FieldType::String)),
        ("num", FieldSpec::shorthand(FieldType::Number)),
        (
            "pets",
            FieldSpec::with_default(FieldType::StringList, Value::StrList(vec!["dog".into()])),
        ),
        ("bool", FieldSpec::shorthand(FieldType::Bool)),
    ])?;
    Ok(schema)
}

/// Loads a schema from a JSON file mapping field names to specs, e.g.
/// `{"num": "number", "tab": {"type": "string", "default": "tab1"}}`.
/// Falls back to the built-in demo schema when no path is given.
pub fn load_schema(path: Option<&Path>) -> Result<Schema> {
    let Some(path) = path else {
        return builtin_schema();
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading schema file {}", path.display()))?;
    let specs: BTreeMap<String, FieldSpec> = serde_json::from_str(&text)
        .with_context(|| format!("parsing schema file {}", path.display()))?;
    let schema = Schema::build(specs)
        .with_context(|| format!("validating schema file {}", path.display()))?;
    Ok(schema)
}
