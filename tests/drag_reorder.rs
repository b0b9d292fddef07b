//! Drag-reorder tests
//!
//! Pointer positions are derived from the rendered row geometry so the tests
//! don't depend on font metrics or padding.

mod common;

use common::{first_fields, labels, named_rows, row_named};

use ranklist::messages::{DragMsg, ListMsg, Msg};
use ranklist::model::{AppModel, DragOrigin, DragState, RowBounds, RowId};
use ranklist::update::update;
use ranklist::view::geometry::row_bounds;

fn bounds_of(model: &AppModel, id: RowId) -> RowBounds {
    row_bounds(model)
        .into_iter()
        .find(|b| b.id == id)
        .expect("row is laid out")
}

fn start(model: &mut AppModel, row: RowId) {
    update(
        model,
        Msg::Drag(DragMsg::Start {
            row,
            origin: DragOrigin::Handle,
        }),
    );
}

fn over(model: &mut AppModel, pointer_y: f32) {
    update(model, Msg::Drag(DragMsg::Over { pointer_y }));
}

fn end(model: &mut AppModel) {
    update(model, Msg::Drag(DragMsg::End));
}

#[test]
fn test_drag_last_row_to_top() {
    let mut model = named_rows(&["a", "b", "c"]);
    let (a, c) = (row_named(&model, "a"), row_named(&model, "c"));

    start(&mut model, c);
    let y = bounds_of(&model, a).top + 1.0;
    over(&mut model, y);
    end(&mut model);

    assert_eq!(first_fields(&model), vec!["c", "a", "b"]);
    assert_eq!(labels(&model), vec!["1.", "2.", "3."]);
    assert_eq!(model.drag, DragState::Idle);
}

#[test]
fn test_drag_first_row_below_everything_moves_to_end() {
    let mut model = named_rows(&["a", "b", "c"]);
    let (a, c) = (row_named(&model, "a"), row_named(&model, "c"));

    start(&mut model, a);
    let last = bounds_of(&model, c);
    over(&mut model, last.top + last.height + 5.0);
    end(&mut model);

    assert_eq!(first_fields(&model), vec!["b", "c", "a"]);
}

#[test]
fn test_drag_between_midpoints_targets_next_row() {
    let mut model = named_rows(&["a", "b", "c", "d"]);
    let (a, b, d) = (
        row_named(&model, "a"),
        row_named(&model, "b"),
        row_named(&model, "d"),
    );

    start(&mut model, d);
    // Below a's midpoint, above b's: d lands between them
    let first = bounds_of(&model, a);
    let second = bounds_of(&model, b);
    let y = (first.top + first.height / 2.0 + second.top + second.height / 2.0) / 2.0;
    over(&mut model, y);
    end(&mut model);

    assert_eq!(first_fields(&model), vec!["a", "d", "b", "c"]);
}

#[test]
fn test_labels_are_stale_until_drag_ends() {
    let mut model = named_rows(&["a", "b", "c"]);
    let (a, c) = (row_named(&model, "a"), row_named(&model, "c"));

    start(&mut model, c);
    let y = bounds_of(&model, a).top + 1.0;
    over(&mut model, y);

    assert_eq!(first_fields(&model), vec!["c", "a", "b"]);
    assert_eq!(labels(&model), vec!["3.", "1.", "2."]);

    end(&mut model);
    assert_eq!(labels(&model), vec!["1.", "2.", "3."]);
}

#[test]
fn test_repeated_over_at_same_point_is_stable() {
    let mut model = named_rows(&["a", "b", "c"]);
    let (a, c) = (row_named(&model, "a"), row_named(&model, "c"));

    start(&mut model, c);
    let y = bounds_of(&model, a).top + 1.0;
    over(&mut model, y);
    let after_first = first_fields(&model);
    over(&mut model, y);

    assert_eq!(first_fields(&model), after_first);
}

#[test]
fn test_release_runs_exactly_one_renumber_pass() {
    let mut model = named_rows(&["a", "b", "c"]);
    let (a, b, c) = (
        row_named(&model, "a"),
        row_named(&model, "b"),
        row_named(&model, "c"),
    );
    let passes = model.list.renumber_passes();

    start(&mut model, c);
    let top = bounds_of(&model, a).top + 1.0;
    over(&mut model, top);
    let middle = bounds_of(&model, b);
    let y = middle.top + middle.height / 2.0 + 1.0;
    over(&mut model, y);
    over(&mut model, y);
    assert_eq!(model.list.renumber_passes(), passes);

    end(&mut model);
    assert_eq!(model.list.renumber_passes(), passes + 1);
    assert_eq!(labels(&model), vec!["1.", "2.", "3."]);
}

#[test]
fn test_drop_in_place_keeps_order() {
    let mut model = named_rows(&["a", "b", "c"]);
    let b = row_named(&model, "b");

    start(&mut model, b);
    let own = bounds_of(&model, b);
    over(&mut model, own.top + own.height / 2.0);
    end(&mut model);

    assert_eq!(first_fields(&model), vec!["a", "b", "c"]);
}

#[test]
fn test_over_without_drag_is_ignored() {
    let mut model = named_rows(&["a", "b"]);
    let cmd = update(&mut model, Msg::Drag(DragMsg::Over { pointer_y: 0.0 }));
    assert!(cmd.is_none());
    assert_eq!(first_fields(&model), vec!["a", "b"]);
}

#[test]
fn test_end_without_drag_does_not_renumber() {
    let mut model = named_rows(&["a"]);
    let passes = model.list.renumber_passes();
    assert!(update(&mut model, Msg::Drag(DragMsg::End)).is_none());
    assert_eq!(model.list.renumber_passes(), passes);
}

#[test]
fn test_start_on_unknown_row_is_ignored() {
    let mut model = named_rows(&["a"]);
    start(&mut model, RowId(777));
    assert!(!model.drag.is_dragging());
}

#[test]
fn test_removing_dragged_row_ends_drag() {
    let mut model = named_rows(&["a", "b"]);
    let a = row_named(&model, "a");

    start(&mut model, a);
    update(&mut model, Msg::List(ListMsg::Remove(a)));

    assert!(!model.drag.is_dragging());
    assert_eq!(first_fields(&model), vec!["b"]);
}

#[test]
fn test_drag_from_row_body_behaves_like_handle() {
    let mut model = named_rows(&["a", "b"]);
    let (a, b) = (row_named(&model, "a"), row_named(&model, "b"));

    update(
        &mut model,
        Msg::Drag(DragMsg::Start {
            row: b,
            origin: DragOrigin::Row,
        }),
    );
    let y = bounds_of(&model, a).top;
    over(&mut model, y);
    end(&mut model);

    assert_eq!(first_fields(&model), vec!["b", "a"]);
}
