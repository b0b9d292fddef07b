//! Scrolling tests - list viewport offset, clamping, and window events

mod common;

use common::{add_row, named_rows, row_at};

use ranklist::commands::Cmd;
use ranklist::messages::{AppMsg, ListMsg, Msg};
use ranklist::model::{AppModel, ColumnCount};
use ranklist::update::update;

fn long_list() -> AppModel {
    let names: Vec<String> = (0..30).map(|i| format!("row{}", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    named_rows(&refs)
}

#[test]
fn test_short_list_does_not_scroll() {
    let mut model = named_rows(&["a", "b"]);
    assert_eq!(model.max_scroll(), 0.0);
    assert!(update(&mut model, Msg::List(ListMsg::Scroll(50.0))).is_none());
    assert_eq!(model.ui.scroll_offset, 0.0);
}

#[test]
fn test_scroll_down_and_up() {
    let mut model = long_list();
    assert!(model.max_scroll() > 100.0);

    update(&mut model, Msg::List(ListMsg::Scroll(100.0)));
    assert_eq!(model.ui.scroll_offset, 100.0);

    update(&mut model, Msg::List(ListMsg::Scroll(-40.0)));
    assert_eq!(model.ui.scroll_offset, 60.0);
}

#[test]
fn test_scroll_is_clamped_at_both_ends() {
    let mut model = long_list();

    update(&mut model, Msg::List(ListMsg::Scroll(f32::MAX)));
    assert_eq!(model.ui.scroll_offset, model.max_scroll());

    update(&mut model, Msg::List(ListMsg::Scroll(f32::MIN)));
    assert_eq!(model.ui.scroll_offset, 0.0);
}

#[test]
fn test_new_row_is_scrolled_into_view() {
    let mut model = long_list();
    add_row(&mut model, &["newest"]);

    assert!(model.ui.scroll_offset > 0.0);
    assert_eq!(model.ui.scroll_offset, model.max_scroll());
}

#[test]
fn test_removing_rows_clamps_scroll() {
    let mut model = long_list();
    update(&mut model, Msg::List(ListMsg::Scroll(f32::MAX)));
    let before = model.ui.scroll_offset;

    for _ in 0..10 {
        let id = row_at(&model, 0);
        update(&mut model, Msg::List(ListMsg::Remove(id)));
    }

    assert!(model.ui.scroll_offset < before);
    assert_eq!(model.ui.scroll_offset, model.max_scroll());
}

#[test]
fn test_taller_window_clamps_scroll() {
    let mut model = long_list();
    update(&mut model, Msg::List(ListMsg::Scroll(f32::MAX)));

    let cmd = update(&mut model, Msg::resize(800, 4000));
    assert!(matches!(cmd, Some(Cmd::Redraw)));
    assert_eq!(model.window_size, (800, 4000));
    assert_eq!(model.ui.scroll_offset, 0.0);
}

#[test]
fn test_wider_layout_clamps_scroll() {
    let rows: Vec<[&str; 4]> = (0..30).map(|_| ["a", "b", "c", "d"]).collect();
    let refs: Vec<&[&str]> = rows.iter().map(|r| &r[..]).collect();
    let mut model = common::model_with_rows(1, &refs);
    update(&mut model, Msg::List(ListMsg::Scroll(f32::MAX)));
    let before = model.ui.scroll_offset;

    update(&mut model, Msg::set_columns(ColumnCount::new(4).expect("valid")));

    assert!(model.ui.scroll_offset < before);
    assert!(model.ui.scroll_offset <= model.max_scroll());
}

#[test]
fn test_scale_factor_change_reinitializes_renderer() {
    let mut model = named_rows(&["a"]);
    let cmd = update(&mut model, Msg::App(AppMsg::ScaleFactorChanged(2.0)));
    assert!(matches!(cmd, Some(Cmd::ReinitializeRenderer)));
    assert_eq!(model.metrics.scale_factor, 2.0);
}

#[test]
fn test_quit() {
    let mut model = named_rows(&["a"]);
    let cmd = update(&mut model, Msg::App(AppMsg::Quit));
    assert!(matches!(cmd, Some(Cmd::Quit)));
}
