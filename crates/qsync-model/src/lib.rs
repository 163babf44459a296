//! Data model for typed query-string state.
//!
//! - **field**: field types, specs (shorthand or full descriptor), schemas
//! - **value**: typed values and the number "no value" sentinel
//! - **query**: raw query snapshots as delivered by a navigation layer
//! - **state**: decoded typed state
//! - **update**: partial update requests (typed or raw values)

pub mod error;
pub mod field;
pub mod query;
pub mod state;
pub mod update;
pub mod value;

pub use error::{Result, SchemaError};
pub use field::{Field, FieldSpec, FieldType, Schema};
pub use query::{QueryMap, RawValue};
pub use state::TypedState;
pub use update::{Update, UpdateValue};
pub use value::{Value, format_number};
