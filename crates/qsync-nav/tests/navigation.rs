//! End-to-end engine behavior: decode, diff, dispatch, history.

use qsync_codec::parse_query;
use qsync_model::field::{FieldSpec, FieldType, Schema};
use qsync_model::query::{QueryMap, RawValue};
use qsync_model::value::Value;
use qsync_nav::{
    DispatchOptions, HistoryMode, MemoryNavigator, NavError, Navigator, QueryState,
    TransitionOptions,
};

fn tab_schema() -> Schema {
    Schema::build([(
        "tab",
        FieldSpec::with_default(FieldType::String, Value::Str("tab1".into())),
    )])
    .unwrap()
}

/// Records every navigate call for dispatch assertions.
#[derive(Default)]
struct RecordingNavigator {
    current: QueryMap,
    calls: Vec<(QueryMap, HistoryMode, TransitionOptions)>,
}

impl Navigator for RecordingNavigator {
    fn current(&self) -> &QueryMap {
        &self.current
    }

    fn navigate(
        &mut self,
        query: QueryMap,
        mode: HistoryMode,
        transition: &TransitionOptions,
    ) -> Result<(), NavError> {
        self.calls.push((query.clone(), mode, transition.clone()));
        self.current = query;
        Ok(())
    }
}

#[test]
fn tab_scenario_full_cycle() {
    let schema = tab_schema();
    let mut state = QueryState::new(&schema, MemoryNavigator::new());

    // No tab key: default applies.
    assert_eq!(state.params().string("tab"), Some("tab1"));

    // Non-default value lands in the snapshot and decodes back.
    state.set_param("tab", "tab2").unwrap();
    assert_eq!(
        state.navigator().current().get("tab"),
        Some(&RawValue::One("tab2".into()))
    );
    assert_eq!(state.params().string("tab"), Some("tab2"));

    // Setting back to the default removes the key entirely.
    state.set_param("tab", "tab1").unwrap();
    assert!(!state.navigator().current().contains_key("tab"));
    assert_eq!(state.params().string("tab"), Some("tab1"));
}

#[test]
fn set_params_dispatches_exactly_one_call() {
    let schema = Schema::build([
        ("a", FieldSpec::shorthand(FieldType::String)),
        ("b", FieldSpec::shorthand(FieldType::Number)),
    ])
    .unwrap();
    let mut state = QueryState::new(&schema, RecordingNavigator::default());
    state
        .set_params(&qsync_model::Update::new().set("a", "x").set("b", 3i64))
        .unwrap();
    assert_eq!(state.navigator().calls.len(), 1);
}

#[test]
fn transition_options_pass_through_verbatim() {
    let schema = tab_schema();
    let options = DispatchOptions::new()
        .replace()
        .with_transition(TransitionOptions::new().with("scroll", false));
    let mut state = QueryState::with_options(&schema, RecordingNavigator::default(), options);
    state.set_param("tab", "tab2").unwrap();

    let (_, mode, transition) = &state.navigator().calls[0];
    assert_eq!(*mode, HistoryMode::Replace);
    assert_eq!(transition.get("scroll"), Some(&serde_json::Value::Bool(false)));
}

#[test]
fn push_mode_grows_history_and_replace_does_not() {
    let schema = tab_schema();
    let mut pushed = QueryState::new(&schema, MemoryNavigator::new());
    pushed.set_param("tab", "tab2").unwrap();
    pushed.set_param("tab", "tab3").unwrap();
    assert_eq!(pushed.navigator().history_len(), 3);

    let mut replaced = QueryState::with_options(
        &schema,
        MemoryNavigator::new(),
        DispatchOptions::new().replace(),
    );
    replaced.set_param("tab", "tab2").unwrap();
    replaced.set_param("tab", "tab3").unwrap();
    assert_eq!(replaced.navigator().history_len(), 1);
}

#[test]
fn unknown_field_is_rejected_without_navigating() {
    let schema = tab_schema();
    let mut state = QueryState::new(&schema, RecordingNavigator::default());
    let result = state.set_param("nope", "x");
    assert!(matches!(result, Err(NavError::UnknownField(name)) if name == "nope"));
    assert!(state.navigator().calls.is_empty());
}

#[test]
fn external_history_moves_show_up_in_params() {
    let schema = tab_schema();
    let mut state = QueryState::new(&schema, MemoryNavigator::new());
    state.set_param("tab", "tab2").unwrap();
    assert_eq!(state.params().string("tab"), Some("tab2"));

    // The host going back is an external event; the next read re-decodes.
    state.navigator_mut().back();
    assert_eq!(state.params().string("tab"), Some("tab1"));
    state.navigator_mut().forward();
    assert_eq!(state.params().string("tab"), Some("tab2"));
}

#[test]
fn href_projects_without_navigating() {
    let schema = tab_schema();
    let state = QueryState::new(&schema, MemoryNavigator::new());
    let href = state.href(&qsync_model::Update::new().set("tab", "tab2"));
    assert_eq!(href, "?tab=tab2");
    assert_eq!(state.navigator().history_len(), 1);
    assert!(state.navigator().current().is_empty());
}

#[test]
fn href_at_defaults_is_bare() {
    let schema = tab_schema();
    let state = QueryState::new(&schema, MemoryNavigator::new());
    assert_eq!(state.href(&qsync_model::Update::new().set("tab", "tab1")), "?");
}

#[test]
fn empty_list_vs_nonempty_default_disambiguates_across_a_cycle() {
    let schema = Schema::build([(
        "pets",
        FieldSpec::with_default(FieldType::StringList, Value::StrList(vec!["cat".into()])),
    )])
    .unwrap();
    let mut state = QueryState::new(&schema, MemoryNavigator::new());

    assert_eq!(state.params().string_list("pets"), Some(&["cat".to_string()][..]));

    state.set_param("pets", Value::StrList(Vec::new())).unwrap();
    assert_eq!(state.params().string_list("pets"), Some(&[][..]));

    state.set_param("pets", vec!["dog", "hamster"]).unwrap();
    assert_eq!(
        state.params().string_list("pets"),
        Some(&["dog".to_string(), "hamster".to_string()][..])
    );
}

#[test]
fn partial_updates_leave_other_keys_alone() {
    let schema = Schema::build([
        ("tab", FieldSpec::with_default(FieldType::String, Value::Str("tab1".into()))),
        ("page", FieldSpec::shorthand(FieldType::Number)),
    ])
    .unwrap();
    let navigator = MemoryNavigator::with_query(parse_query("tab=tab2&page=3"));
    let mut state = QueryState::new(&schema, navigator);
    state.set_param("page", 4i64).unwrap();
    assert_eq!(state.params().string("tab"), Some("tab2"));
    assert_eq!(state.params().number("page"), Some(4.0));
}
