//! Decoding raw query snapshots into typed state.

use qsync_model::field::Schema;
use qsync_model::query::QueryMap;
use qsync_model::state::TypedState;

use crate::coerce::{Coerced, coerce};

/// Decodes a raw snapshot against a schema.
///
/// Total over the schema: every declared field gets a value, with absent or
/// unrepresentable input falling back to the field default. Fields are
/// decoded independently; keys outside the schema are ignored.
pub fn decode(schema: &Schema, snapshot: &QueryMap) -> TypedState {
    schema
        .fields()
        .map(|(name, field)| {
            let value = match coerce(snapshot.get(name), field.field_type) {
                Coerced::Value(value) => value,
                Coerced::Absent => field.default.clone(),
                Coerced::Unrepresentable => {
                    tracing::debug!(
                        field = name,
                        field_type = field.field_type.as_str(),
                        "query value not representable, using default"
                    );
                    field.default.clone()
                }
            };
            (name.to_string(), value)
        })
        .collect()
}
