//! Benchmarks for tile planning, range mapping, and resize dragging.
//!
//! Run with: cargo bench -p filmstrip-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use filmstrip_layout::{
    DimensionBounds, GridWindow, Participant, PointerPosition, ReorderPolicy, ResizeAxis,
    ResizeDragController, TileGrid, ViewportWindow, map_range,
};
use std::hint::black_box;

/// A call with `n` participants and the moderator somewhere in the middle.
fn make_participants(n: usize) -> Vec<Participant> {
    (0..n)
        .map(|i| {
            let id = format!("participant-{i}");
            if i == n / 2 {
                Participant::moderator(id)
            } else {
                Participant::normal(id)
            }
        })
        .collect()
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/tile_plan");

    for n in [4, 16, 64, 256] {
        let participants = make_participants(n);
        for columns in [3u32, 7] {
            let grid = TileGrid::new(columns).expect("benchmark grids have columns");
            group.bench_with_input(
                BenchmarkId::new(format!("columns_{columns}"), n),
                &participants,
                |b, participants| b.iter(|| black_box(grid.plan(participants))),
            );
        }
    }

    group.finish();
}

fn bench_map_range(c: &mut Criterion) {
    let window = ViewportWindow::Grid(GridWindow {
        row_start: 3,
        row_stop: 9,
        column_start: 0,
        column_stop: 4,
    });
    c.bench_function("layout/map_range_grid", |b| {
        b.iter(|| {
            black_box(map_range(
                black_box(window),
                5,
                ReorderPolicy::LOCAL_TILE_FIRST,
            ))
        })
    });
}

fn bench_drag(c: &mut Criterion) {
    let bounds = DimensionBounds::new(120, 900).expect("ordered bounds");
    c.bench_function("layout/drag_100_moves", |b| {
        b.iter(|| {
            let mut controller = ResizeDragController::new();
            controller.pointer_down(ResizeAxis::Horizontal, PointerPosition::new(800, 0), 300);
            for x in (700..800).rev() {
                black_box(controller.pointer_move(PointerPosition::new(x, 0), bounds));
            }
            black_box(controller.pointer_up())
        })
    });
}

criterion_group!(benches, bench_plan, bench_map_range, bench_drag);
criterion_main!(benches);
