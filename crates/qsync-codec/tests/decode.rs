//! Decoder behavior against raw snapshots.

use qsync_codec::{decode, parse_query};
use qsync_model::field::{FieldSpec, FieldType, Schema};
use qsync_model::value::Value;

fn demo_schema() -> Schema {
    Schema::build([
        ("str", FieldSpec::shorthand(FieldType::String)),
        ("num", FieldSpec::with_default(FieldType::Number, Value::Num(42.0))),
        ("pets", FieldSpec::shorthand(FieldType::StringList)),
        ("nums", FieldSpec::shorthand(FieldType::NumberList)),
        ("bool", FieldSpec::shorthand(FieldType::Bool)),
    ])
    .unwrap()
}

#[test]
fn absent_keys_decode_to_defaults() {
    let schema = demo_schema();
    let state = decode(&schema, &parse_query(""));
    assert_eq!(state.string("str"), Some(""));
    assert_eq!(state.number("num"), Some(42.0));
    assert_eq!(state.string_list("pets"), Some(&[][..]));
    assert_eq!(state.boolean("bool"), Some(false));
    assert_eq!(state.len(), schema.len());
}

#[test]
fn unrepresentable_number_falls_back_to_default() {
    let schema = demo_schema();
    let state = decode(&schema, &parse_query("num=abc"));
    assert_eq!(state.number("num"), Some(42.0));
}

#[test]
fn unrepresentable_boolean_falls_back_to_default() {
    let schema = demo_schema();
    let state = decode(&schema, &parse_query("bool=yes"));
    assert_eq!(state.boolean("bool"), Some(false));
}

#[test]
fn list_keeps_valid_elements_in_order() {
    let schema = demo_schema();
    let state = decode(&schema, &parse_query("nums=1&nums=x&nums=3"));
    assert_eq!(state.number_list("nums"), Some(&[1.0, 3.0][..]));
}

#[test]
fn fully_filtered_list_is_a_present_empty_list() {
    let schema = Schema::build([(
        "nums",
        FieldSpec::with_default(FieldType::NumberList, Value::NumList(vec![7.0])),
    )])
    .unwrap();
    // The key is present, so the non-empty default must not apply.
    let state = decode(&schema, &parse_query("nums=x"));
    assert_eq!(state.number_list("nums"), Some(&[][..]));
}

#[test]
fn lone_value_decodes_as_one_element_list() {
    let schema = demo_schema();
    let state = decode(&schema, &parse_query("pets=dog"));
    assert_eq!(state.string_list("pets"), Some(&["dog".to_string()][..]));
}

#[test]
fn keys_outside_the_schema_are_ignored() {
    let schema = demo_schema();
    let state = decode(&schema, &parse_query("other=1&str=hi"));
    assert_eq!(state.string("str"), Some("hi"));
    assert!(state.get("other").is_none());
}

#[test]
fn sentinel_only_value_decodes_to_empty_list() {
    let schema = Schema::build([(
        "pets",
        FieldSpec::with_default(FieldType::StringList, Value::StrList(vec!["cat".into()])),
    )])
    .unwrap();
    let state = decode(&schema, &parse_query("pets=%5B%5D"));
    assert_eq!(state.string_list("pets"), Some(&[][..]));
}

#[test]
fn decoding_is_pure_and_repeatable() {
    let schema = demo_schema();
    let snapshot = parse_query("str=a&num=7&pets=dog&pets=cat");
    assert_eq!(decode(&schema, &snapshot), decode(&schema, &snapshot));
}
