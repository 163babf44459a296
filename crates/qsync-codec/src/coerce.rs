//! Type coercion: raw tokens (or already-typed values) into typed values.
//!
//! Coercion is pure and never errors. A token that does not parse under its
//! declared type is *unrepresentable* and gets dropped: scalar fields fall
//! back to their default, list fields silently lose the element.

use qsync_model::field::FieldType;
use qsync_model::query::RawValue;
use qsync_model::update::UpdateValue;
use qsync_model::value::{Value, format_number};

use crate::EMPTY_LIST_SENTINEL;

/// Outcome of coercing one field occurrence.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    /// No input at all; the caller substitutes the field default.
    Absent,
    /// Input present but not representable under the declared type.
    Unrepresentable,
    /// A typed value. List coercion always lands here, even when every
    /// element was filtered out: a present-but-empty list is a value.
    Value(Value),
}

/// Coerces a raw query value (or its absence) under a field type.
pub fn coerce(raw: Option<&RawValue>, field_type: FieldType) -> Coerced {
    match raw {
        None => Coerced::Absent,
        Some(raw) => coerce_tokens(raw.tokens(), field_type),
    }
}

/// Coerces an update value under a field type. Already-typed values pass
/// through their wire tokens, which makes coercion a fixed point on them.
pub fn coerce_update(value: &UpdateValue, field_type: FieldType) -> Coerced {
    match value {
        UpdateValue::Clear => Coerced::Absent,
        UpdateValue::Raw(token) => coerce_tokens(std::slice::from_ref(token), field_type),
        UpdateValue::RawList(tokens) => coerce_tokens(tokens, field_type),
        UpdateValue::Typed(typed) => match value_tokens(typed) {
            None => Coerced::Absent,
            Some(tokens) => coerce_tokens(&tokens, field_type),
        },
    }
}

fn coerce_tokens(tokens: &[String], field_type: FieldType) -> Coerced {
    if field_type.is_list() {
        let scalar = field_type.scalar();
        let elements: Vec<Value> = tokens
            .iter()
            .filter(|token| token.as_str() != EMPTY_LIST_SENTINEL)
            .filter_map(|token| coerce_scalar_token(token, scalar))
            .collect();
        return Coerced::Value(collect_list(elements, field_type));
    }
    match tokens {
        [] => Coerced::Unrepresentable,
        [token] => match coerce_scalar_token(token, field_type) {
            Some(value) => Coerced::Value(value),
            None => Coerced::Unrepresentable,
        },
        // A repeated key under a scalar type: strings concatenate the way
        // loosely-typed hosts stringify sequences; number and boolean have
        // no multi-token reading.
        many => match field_type {
            FieldType::String => Coerced::Value(Value::Str(many.join(","))),
            _ => Coerced::Unrepresentable,
        },
    }
}

fn coerce_scalar_token(token: &str, scalar: FieldType) -> Option<Value> {
    match scalar {
        FieldType::String => Some(Value::Str(token.to_string())),
        FieldType::Number => parse_number(token).map(Value::Num),
        FieldType::Bool => match token {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
        FieldType::StringList | FieldType::NumberList => unreachable!("scalar rule on list type"),
    }
}

/// Parses a number token. Empty and non-finite results are unrepresentable,
/// never zero or NaN.
fn parse_number(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn collect_list(elements: Vec<Value>, field_type: FieldType) -> Value {
    match field_type {
        FieldType::StringList => Value::StrList(
            elements
                .into_iter()
                .filter_map(|value| value.as_str().map(str::to_string))
                .collect(),
        ),
        FieldType::NumberList => Value::NumList(
            elements.into_iter().filter_map(|value| value.as_num()).collect(),
        ),
        _ => unreachable!("list collection on scalar type"),
    }
}

/// The wire tokens for a typed value; `None` for [`Value::None`] (nothing to
/// serialize). A lone scalar becomes a one-element sequence.
pub(crate) fn value_tokens(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::None => None,
        Value::Str(s) => Some(vec![s.clone()]),
        Value::Num(n) => Some(vec![format_number(*n)]),
        Value::Bool(b) => Some(vec![b.to_string()]),
        Value::StrList(values) => Some(values.clone()),
        Value::NumList(values) => Some(values.iter().map(|n| format_number(*n)).collect()),
    }
}
