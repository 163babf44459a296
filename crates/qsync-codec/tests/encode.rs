//! Diff encoder behavior.

use qsync_codec::{EMPTY_LIST_SENTINEL, encode, parse_query};
use qsync_model::field::{FieldSpec, FieldType, Schema};
use qsync_model::query::RawValue;
use qsync_model::update::{Update, UpdateValue};
use qsync_model::value::Value;

fn schema() -> Schema {
    Schema::build([
        ("tab", FieldSpec::with_default(FieldType::String, Value::Str("tab1".into()))),
        ("num", FieldSpec::with_default(FieldType::Number, Value::Num(42.0))),
        ("pets", FieldSpec::with_default(FieldType::StringList, Value::StrList(vec!["cat".into()]))),
        ("tags", FieldSpec::shorthand(FieldType::StringList)),
        ("bool", FieldSpec::shorthand(FieldType::Bool)),
    ])
    .unwrap()
}

#[test]
fn non_default_value_is_written() {
    let next = encode(&schema(), &parse_query(""), &Update::new().set("tab", "tab2"));
    assert_eq!(next.get("tab"), Some(&RawValue::One("tab2".into())));
}

#[test]
fn default_value_is_never_written() {
    let next = encode(&schema(), &parse_query(""), &Update::new().set("tab", "tab1"));
    assert!(!next.contains_key("tab"));
}

#[test]
fn setting_back_to_default_removes_the_key() {
    let current = parse_query("tab=tab2&num=7");
    let next = encode(&schema(), &current, &Update::new().set("tab", "tab1"));
    assert!(!next.contains_key("tab"));
    // Untouched keys are copied through.
    assert_eq!(next.get("num"), Some(&RawValue::One("7".into())));
}

#[test]
fn typed_default_is_omitted_too() {
    let next = encode(
        &schema(),
        &parse_query(""),
        &Update::new().set("num", Value::Num(42.0)),
    );
    assert!(!next.contains_key("num"));
}

#[test]
fn clear_removes_the_key() {
    let current = parse_query("num=7");
    let next = encode(&schema(), &current, &Update::new().clear("num"));
    assert!(!next.contains_key("num"));
}

#[test]
fn unrepresentable_update_degrades_to_removal() {
    let current = parse_query("num=7");
    let next = encode(&schema(), &current, &Update::new().set("num", "abc"));
    assert!(!next.contains_key("num"));
}

#[test]
fn lists_serialize_as_ordered_multi_values() {
    let next = encode(
        &schema(),
        &parse_query(""),
        &Update::new().set("tags", vec!["a", "b"]),
    );
    assert_eq!(next.get("tags"), Some(&RawValue::Many(vec!["a".into(), "b".into()])));
}

#[test]
fn empty_list_with_nonempty_default_writes_the_sentinel() {
    let next = encode(
        &schema(),
        &parse_query(""),
        &Update::new().set("pets", Value::StrList(Vec::new())),
    );
    assert_eq!(next.get("pets"), Some(&RawValue::One(EMPTY_LIST_SENTINEL.into())));
}

#[test]
fn empty_list_with_empty_default_removes_the_key() {
    let current = parse_query("tags=a");
    let next = encode(
        &schema(),
        &current,
        &Update::new().set("tags", Value::StrList(Vec::new())),
    );
    assert!(!next.contains_key("tags"));
}

#[test]
fn unknown_fields_are_skipped() {
    let current = parse_query("tab=tab2");
    let next = encode(&schema(), &current, &Update::new().set("missing", "x"));
    assert_eq!(next, current);
}

#[test]
fn untouched_fields_survive_a_partial_update() {
    let current = parse_query("tab=tab2&bool=true&tags=a&tags=b");
    let next = encode(&schema(), &current, &Update::new().set("num", 7i64));
    assert_eq!(next.get("tab"), Some(&RawValue::One("tab2".into())));
    assert_eq!(next.get("bool"), Some(&RawValue::One("true".into())));
    assert_eq!(next.get("tags"), Some(&RawValue::Many(vec!["a".into(), "b".into()])));
    assert_eq!(next.get("num"), Some(&RawValue::One("7".into())));
}

#[test]
fn raw_and_typed_updates_encode_identically() {
    let raw = encode(&schema(), &parse_query(""), &Update::new().set("num", "7"));
    let typed = encode(
        &schema(),
        &parse_query(""),
        &Update::new().set("num", UpdateValue::Typed(Value::Num(7.0))),
    );
    assert_eq!(raw, typed);
}
