//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use ranklist::config::AppConfig;
use ranklist::messages::{FormMsg, ListMsg, Msg};
use ranklist::model::{AppModel, ColumnCount, InputEdit, RowId};
use ranklist::theme::Theme;
use ranklist::update::update;

/// Create an empty test model with the given column count
///
/// No config or theme files are read.
pub fn test_model(columns: u8) -> AppModel {
    let config = AppConfig {
        columns: columns as i64,
        ..AppConfig::default()
    };
    AppModel::new(800, 600, config, Theme::default())
}

/// Create a test model holding `rows`, renumbered, one row per slice
///
/// Each row gets exactly as many slots as it has values.
pub fn model_with_rows(columns: u8, rows: &[&[&str]]) -> AppModel {
    let mut model = test_model(columns);
    for values in rows {
        let position = model.list.next_position();
        let fields = values.iter().map(|v| Some(v.to_string())).collect();
        let row = model.list.build_row(fields, position);
        model.list.append(row);
    }
    model.list.renumber();
    model
}

/// Single-column model with one row per name
pub fn named_rows(names: &[&str]) -> AppModel {
    let rows: Vec<&[&str]> = names.iter().map(std::slice::from_ref).collect();
    model_with_rows(1, &rows)
}

pub fn cols(n: u8) -> ColumnCount {
    ColumnCount::clamped(n as i64)
}

/// First field of every row, in display order
pub fn first_fields(model: &AppModel) -> Vec<String> {
    model
        .list
        .iter()
        .map(|r| r.field(0).unwrap_or_default().to_string())
        .collect()
}

/// Displayed position labels, in display order
pub fn labels(model: &AppModel) -> Vec<String> {
    model.list.labels().iter().map(|s| s.to_string()).collect()
}

/// Id of the row currently at 0-based `index`
pub fn row_at(model: &AppModel, index: usize) -> RowId {
    model.list.rows()[index].id
}

/// Id of the first row whose first field equals `name`
pub fn row_named(model: &AppModel, name: &str) -> RowId {
    model
        .list
        .iter()
        .find(|r| r.field(0) == Some(name))
        .map(|r| r.id)
        .unwrap_or_else(|| panic!("no row named {name}"))
}

/// Fill the open form's inputs in order and submit
pub fn submit_form(model: &mut AppModel, values: &[&str]) {
    for (i, value) in values.iter().enumerate() {
        update(
            model,
            Msg::Form(FormMsg::FocusField {
                index: i,
                cursor: None,
            }),
        );
        update(
            model,
            Msg::Form(FormMsg::Input(InputEdit::InsertText(value.to_string()))),
        );
    }
    update(model, Msg::Form(FormMsg::Submit));
}

/// Open the create form, fill it, and submit
pub fn add_row(model: &mut AppModel, values: &[&str]) {
    update(model, Msg::Form(FormMsg::OpenCreate));
    submit_form(model, values);
}

/// Replace the position editor's text with `text`
pub fn type_position(model: &mut AppModel, text: &str) {
    update(model, Msg::List(ListMsg::RepositionInput(InputEdit::CursorEnd)));
    let len = model
        .ui
        .position_edit
        .as_ref()
        .map_or(0, |pe| pe.input.text().chars().count());
    for _ in 0..len {
        update(
            model,
            Msg::List(ListMsg::RepositionInput(InputEdit::DeleteBackward)),
        );
    }
    update(
        model,
        Msg::List(ListMsg::RepositionInput(InputEdit::InsertText(text.to_string()))),
    );
}
