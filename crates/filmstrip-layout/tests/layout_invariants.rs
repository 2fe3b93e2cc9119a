//! Property-style invariants for tile placement, range mapping, and resize
//! dragging.
//!
//! Random participant lists and pointer streams are fed through the public
//! API; each case checks the structural guarantees the host relies on when it
//! re-renders every frame.

use filmstrip_layout::{
    DimensionBounds, GridWindow, MODERATOR_HEIGHT, MODERATOR_WIDTH, Participant, PointerPosition,
    ReorderPolicy, ResizeAxis, ResizeDragController, TileGrid, TileRect, ViewportRange,
    ViewportWindow, map_range,
};
use proptest::prelude::*;

fn participants_strategy() -> impl Strategy<Value = Vec<Participant>> {
    prop::collection::vec(any::<bool>(), 0..40).prop_map(|roles| {
        roles
            .into_iter()
            .enumerate()
            .map(|(i, moderator)| {
                let id = format!("p{i}");
                if moderator {
                    Participant::moderator(id)
                } else {
                    Participant::normal(id)
                }
            })
            .collect()
    })
}

fn with_single_moderator() -> impl Strategy<Value = Vec<Participant>> {
    (1usize..30)
        .prop_flat_map(|len| (Just(len), 0..len))
        .prop_map(|(len, moderator_at)| {
            (0..len)
                .map(|i| {
                    let id = format!("p{i}");
                    if i == moderator_at {
                        Participant::moderator(id)
                    } else {
                        Participant::normal(id)
                    }
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn planning_is_deterministic(participants in participants_strategy(), columns in 1u32..8) {
        let grid = TileGrid::new(columns).unwrap();
        prop_assert_eq!(grid.plan(&participants), grid.plan(&participants));
    }

    #[test]
    fn planned_tiles_never_overlap(participants in participants_strategy(), columns in 1u32..8) {
        let plan = TileGrid::new(columns).unwrap().plan(&participants);
        prop_assert_eq!(plan.len(), participants.len());
        let rects: Vec<TileRect> = plan.iter().map(|t| t.rect()).collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                prop_assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn output_order_matches_input(participants in participants_strategy(), columns in 1u32..8) {
        let plan = TileGrid::new(columns).unwrap().plan(&participants);
        for (tile, participant) in plan.iter().zip(&participants) {
            prop_assert_eq!(&tile.participant_id, &participant.id);
        }
    }

    #[test]
    fn sole_moderator_owns_origin(participants in with_single_moderator(), columns in 1u32..8) {
        let plan = TileGrid::new(columns).unwrap().plan(&participants);
        let reserved = TileRect::new(0, 0, MODERATOR_WIDTH, MODERATOR_HEIGHT);
        for (tile, participant) in plan.iter().zip(&participants) {
            if participant.is_moderator() {
                prop_assert_eq!(tile.rect(), reserved);
            } else {
                prop_assert_eq!((tile.width, tile.height), (1, 1));
                prop_assert!(!reserved.contains(tile.x, tile.y));
            }
        }
    }

    #[test]
    fn normal_tiles_avoid_origin_region(participants in participants_strategy(), columns in 1u32..8) {
        let plan = TileGrid::new(columns).unwrap().plan(&participants);
        let reserved = TileRect::new(0, 0, MODERATOR_WIDTH, MODERATOR_HEIGHT);
        for tile in plan.iter().filter(|t| t.width == 1 && t.height == 1) {
            prop_assert!(!reserved.contains(tile.x, tile.y), "{:?} inside reserved region", tile);
        }
    }

    #[test]
    fn at_most_one_enlarged_tile(participants in participants_strategy(), columns in 1u32..8) {
        let plan = TileGrid::new(columns).unwrap().plan(&participants);
        let enlarged = plan.iter().filter(|t| t.width > 1 || t.height > 1).count();
        prop_assert!(enlarged <= 1);
    }

    #[test]
    fn mapped_list_range_is_ordered(
        start in 0usize..500,
        stop in 0usize..500,
        reordering in any::<bool>(),
        local in any::<bool>(),
    ) {
        let window = ViewportWindow::List(ViewportRange::new(start, stop));
        let mapped = map_range(window, 1, ReorderPolicy::new(reordering, local)).unwrap();
        prop_assert!(mapped.stop >= mapped.start);
    }

    #[test]
    fn mapped_grid_range_is_ordered(
        rows in (0usize..50, 0usize..50),
        cols in (0usize..8, 0usize..8),
        columns in 1u32..8,
        reordering in any::<bool>(),
    ) {
        let window = ViewportWindow::Grid(GridWindow {
            row_start: rows.0,
            row_stop: rows.1,
            column_start: cols.0,
            column_stop: cols.1,
        });
        let mapped = map_range(window, columns, ReorderPolicy::new(reordering, true)).unwrap();
        prop_assert!(mapped.stop >= mapped.start);
    }

    #[test]
    fn committed_widths_stay_in_bounds(
        anchor_dimension in 0u32..2_000,
        anchor_x in -1_000i32..3_000,
        moves in prop::collection::vec(-1_000i32..3_000, 1..20),
        min in 0u32..500,
        span in 0u32..1_500,
    ) {
        let bounds = DimensionBounds::new(min, min + span).unwrap();
        let mut controller = ResizeDragController::new();
        controller.pointer_down(ResizeAxis::Horizontal, PointerPosition::new(anchor_x, 0), anchor_dimension);
        for x in moves {
            let step = controller.pointer_move(PointerPosition::new(x, 0), bounds);
            if let Some(dimension) = step.effect.committed_dimension() {
                prop_assert!(dimension >= bounds.min() && dimension <= bounds.max());
                let unclamped = i64::from(anchor_dimension) + i64::from(anchor_x) - i64::from(x);
                let expected = unclamped.clamp(i64::from(bounds.min()), i64::from(bounds.max()));
                prop_assert_eq!(i64::from(dimension), expected);
            }
        }
        controller.pointer_up();
        prop_assert!(!controller.is_active());
    }
}
