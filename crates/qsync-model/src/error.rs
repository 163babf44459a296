use thiserror::Error;

use crate::field::FieldType;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("field `{field}`: default value does not match declared type `{field_type}`")]
    DefaultTypeMismatch { field: String, field_type: FieldType },
    #[error("unknown field type `{0}` (expected string, string[], number, number[], or boolean)")]
    UnknownType(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
