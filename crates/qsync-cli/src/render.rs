//! Table rendering for decoded state.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use qsync_model::field::Schema;
use qsync_model::query::QueryMap;
use qsync_model::state::TypedState;

pub fn print_state(schema: &Schema, state: &TypedState, snapshot: &QueryMap) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Value"),
        header_cell("Source"),
    ]);
    for (name, field) in schema.fields() {
        let rendered = state.get(name).map(ToString::to_string).unwrap_or_default();
        let source = if snapshot.contains_key(name) {
            "query"
        } else {
            "default"
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(field.field_type.as_str()),
            Cell::new(rendered),
            Cell::new(source),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
