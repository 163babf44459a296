//! Diff encoding: turning a partial update into the next raw snapshot.
//!
//! The encoder writes only what differs from the defaults. A field set to
//! its default has its key removed; absence recovers the default on decode,
//! which keeps query strings minimal.

use qsync_model::field::Schema;
use qsync_model::query::{QueryMap, RawValue};
use qsync_model::update::Update;
use qsync_model::value::Value;

use crate::EMPTY_LIST_SENTINEL;
use crate::coerce::{Coerced, coerce_update, value_tokens};

/// Computes the snapshot that results from applying `update` on top of
/// `current`. Keys not named by the update are copied through untouched.
///
/// Update values that are cleared, unrepresentable, or equal to the field
/// default remove their key. The one exception: an empty list on a field
/// whose default list is non-empty writes the reserved
/// [`EMPTY_LIST_SENTINEL`] token, so decoding does not fall back to the
/// non-empty default.
pub fn encode(schema: &Schema, current: &QueryMap, update: &Update) -> QueryMap {
    let mut next = current.clone();
    for (name, update_value) in update.iter() {
        let Some(field) = schema.get(name) else {
            tracing::warn!(field = name, "update names a field outside the schema, ignoring");
            continue;
        };
        match coerce_update(update_value, field.field_type) {
            Coerced::Absent => {
                tracing::debug!(field = name, "cleared, key removed");
                next.remove(name);
            }
            Coerced::Unrepresentable => {
                tracing::warn!(
                    field = name,
                    field_type = field.field_type.as_str(),
                    "update value not representable, key removed"
                );
                next.remove(name);
            }
            Coerced::Value(value) => {
                if value == field.default {
                    tracing::debug!(field = name, "equal to default, key removed");
                    next.remove(name);
                } else if value.is_empty_list() && field.default.is_nonempty_list() {
                    tracing::debug!(field = name, "explicitly empty list, sentinel written");
                    next.insert(name, RawValue::One(EMPTY_LIST_SENTINEL.to_string()));
                } else {
                    next.insert(name, to_raw(&value));
                }
            }
        }
    }
    next
}

/// Serialization shape: scalars as a single token, lists as an ordered
/// multi-value (one token per element).
fn to_raw(value: &Value) -> RawValue {
    let tokens = value_tokens(value).unwrap_or_default();
    match value {
        Value::StrList(_) | Value::NumList(_) => RawValue::Many(tokens),
        _ => RawValue::One(tokens.into_iter().next().unwrap_or_default()),
    }
}
