//! Benchmarks for reordering: insertion point search, drag steps, renumbering
//!
//! Run with: cargo bench reorder

mod support;
use support::make_model;

use ranklist::messages::{DragMsg, Msg};
use ranklist::model::{drop_position, DragOrigin};
use ranklist::update::update;
use ranklist::view::geometry::row_bounds;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Insertion point search
// ============================================================================

#[divan::bench(args = [10, 100, 1000, 10000])]
fn drop_position_search(bencher: divan::Bencher, rows: usize) {
    let model = make_model(rows, 2);
    let bounds = row_bounds(&model);
    let dragged = model.list.rows()[rows / 2].id;
    let pointer_y = bounds[rows / 4].top + 1.0;

    bencher.bench(|| drop_position(divan::black_box(&bounds), dragged, pointer_y));
}

#[divan::bench(args = [10, 100, 1000])]
fn row_bounds_layout(bencher: divan::Bencher, rows: usize) {
    let model = make_model(rows, 3);
    bencher.bench(|| row_bounds(divan::black_box(&model)));
}

// ============================================================================
// Full drag step (layout + search + move)
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn drag_over_step(bencher: divan::Bencher, rows: usize) {
    bencher
        .with_inputs(|| {
            let mut model = make_model(rows, 2);
            let last = model.list.rows()[rows - 1].id;
            update(
                &mut model,
                Msg::Drag(DragMsg::Start {
                    row: last,
                    origin: DragOrigin::Handle,
                }),
            );
            let y = row_bounds(&model)[0].top + 1.0;
            (model, y)
        })
        .bench_local_values(|(mut model, y)| {
            update(&mut model, Msg::Drag(DragMsg::Over { pointer_y: y }));
            model
        });
}

// ============================================================================
// Renumbering pass
// ============================================================================

#[divan::bench(args = [10, 100, 1000, 10000])]
fn renumber(bencher: divan::Bencher, rows: usize) {
    let mut model = make_model(rows, 1);
    bencher.bench_local(|| model.list.renumber());
}
