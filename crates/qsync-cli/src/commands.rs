//! Command implementations.

use std::collections::BTreeMap;

use anyhow::{Result, bail};

use qsync_cli::schema::load_schema;
use qsync_codec::{decode, format_query, parse_query};
use qsync_model::field::Schema;
use qsync_model::update::{Update, UpdateValue};
use qsync_nav::{DispatchOptions, MemoryNavigator, Navigator, QueryState};

use crate::cli::{SessionArgs, SetArgs, ShowArgs};
use crate::render::print_state;

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let schema = load_schema(args.schema.as_deref())?;
    let snapshot = parse_query(&args.query);
    let state = decode(&schema, &snapshot);
    print_state(&schema, &state, &snapshot);
    Ok(())
}

pub fn run_set(args: &SetArgs) -> Result<()> {
    let schema = load_schema(args.schema.as_deref())?;
    let update = parse_assignments(&args.assignments)?;
    let navigator = MemoryNavigator::with_query(parse_query(&args.query));
    let options = dispatch_options(args.replace);
    let mut state = QueryState::with_options(&schema, navigator, options);
    state.set_params(&update)?;
    println!("?{}", format_query(state.navigator().current()));
    Ok(())
}

pub fn run_link(args: &SetArgs) -> Result<()> {
    let schema = load_schema(args.schema.as_deref())?;
    let update = parse_assignments(&args.assignments)?;
    for name in update.keys() {
        if !schema.contains(name) {
            bail!("unknown field `{name}` (schema declares: {})", field_names(&schema));
        }
    }
    let navigator = MemoryNavigator::with_query(parse_query(&args.query));
    let state = QueryState::new(&schema, navigator);
    println!("{}", state.href(&update));
    Ok(())
}

pub fn run_session(args: &SessionArgs) -> Result<()> {
    let schema = load_schema(args.schema.as_deref())?;
    let mut navigator = MemoryNavigator::with_query(parse_query(&args.query));
    println!("start    ?{}", format_query(navigator.current()));
    for step in &args.steps {
        run_step(&schema, &mut navigator, step)?;
    }
    Ok(())
}

fn run_step(schema: &Schema, navigator: &mut MemoryNavigator, step: &str) -> Result<()> {
    let mut words = step.split_whitespace();
    let Some(op) = words.next() else {
        bail!("empty session step");
    };
    match op {
        "set" | "replace" => {
            let assignments: Vec<String> = words.map(str::to_string).collect();
            if assignments.is_empty() {
                bail!("step `{op}` needs at least one KEY=VALUE assignment");
            }
            let update = parse_assignments(&assignments)?;
            let options = dispatch_options(op == "replace");
            let mut state = QueryState::with_options(schema, &mut *navigator, options);
            state.set_params(&update)?;
            println!("{op:<8} ?{}", format_query(state.navigator().current()));
        }
        "back" => {
            let moved = navigator.back();
            print_move("back", navigator, moved);
        }
        "forward" => {
            let moved = navigator.forward();
            print_move("forward", navigator, moved);
        }
        "show" => {
            let state = decode(schema, navigator.current());
            print_state(schema, &state, navigator.current());
        }
        other => bail!("unknown session step `{other}` (expected set, replace, back, forward, or show)"),
    }
    Ok(())
}

fn print_move(op: &str, navigator: &MemoryNavigator, moved: bool) {
    let note = if moved { "" } else { "  (no entry)" };
    println!("{op:<8} ?{}{note}", format_query(navigator.current()));
}

fn dispatch_options(replace: bool) -> DispatchOptions {
    if replace {
        DispatchOptions::new().replace()
    } else {
        DispatchOptions::new()
    }
}

fn field_names(schema: &Schema) -> String {
    schema.fields().map(|(name, _)| name).collect::<Vec<_>>().join(", ")
}

/// Parses `KEY=VALUE` tokens into an update. A lone `KEY=` clears the field;
/// repeated `KEY=V` tokens build a list in argument order.
fn parse_assignments(tokens: &[String]) -> Result<Update> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for token in tokens {
        let Some((key, value)) = token.split_once('=') else {
            bail!("invalid assignment `{token}` (expected KEY=VALUE)");
        };
        if key.is_empty() {
            bail!("invalid assignment `{token}` (empty key)");
        }
        grouped.entry(key.to_string()).or_default().push(value.to_string());
    }
    let mut update = Update::new();
    for (key, mut values) in grouped {
        let value = if values.len() == 1 {
            let single = values.pop().unwrap_or_default();
            if single.is_empty() {
                UpdateValue::Clear
            } else {
                UpdateValue::Raw(single)
            }
        } else {
            UpdateValue::RawList(values)
        };
        update.insert(key, value);
    }
    Ok(update)
}
