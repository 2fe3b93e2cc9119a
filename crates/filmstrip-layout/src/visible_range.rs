#![forbid(unsafe_code)]

//! Translation from virtualized viewport indices to participant indices.
//!
//! A virtualized list or grid reports which of *its* items are on screen.
//! When thumbnail reordering puts the local participant's tile at viewport
//! index 0, viewport indices and remote-participant array indices drift apart
//! by one. The two spaces get distinct types here ([`ViewportRange`] and
//! [`ParticipantRange`]) so crossing between them always goes through
//! [`ViewportRange::to_participant_range`].
//!
//! # Usage
//!
//! ```
//! use filmstrip_layout::visible_range::{
//!     map_range, ParticipantRange, ReorderPolicy, ViewportRange, ViewportWindow,
//! };
//!
//! let window = ViewportWindow::List(ViewportRange::new(1, 5));
//! let mapped = map_range(window, 1, ReorderPolicy::LOCAL_TILE_FIRST).unwrap();
//! assert_eq!(mapped, ParticipantRange::new(0, 4));
//! ```
//!
//! # Invariants
//!
//! 1. Output satisfies `start <= stop` for every input.
//! 2. Without the local-tile offset, indices pass through unchanged.
//! 3. With the offset, both ends shift down by one and `start` floors at 0.
//!
//! # Failure Modes
//!
//! - A grid window with zero columns is rejected with
//!   [`LayoutError::InvalidColumns`]; list windows ignore the column count.
//! - Inverted ranges reported mid-scroll are clamped to `stop = start`,
//!   never surfaced.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Inclusive index range in the viewport's own item space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ViewportRange {
    pub start: usize,
    pub stop: usize,
}

impl ViewportRange {
    #[must_use]
    pub const fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    /// Flatten a 2-D grid window into row-major viewport indices.
    pub fn from_grid(window: GridWindow, columns: u32) -> Result<Self, LayoutError> {
        if columns == 0 {
            return Err(LayoutError::InvalidColumns { columns });
        }
        let columns = columns as usize;
        Ok(Self {
            start: window
                .row_start
                .saturating_mul(columns)
                .saturating_add(window.column_start),
            stop: window
                .row_stop
                .saturating_mul(columns)
                .saturating_add(window.column_stop),
        })
    }

    /// Translate into participant-array space under `policy`.
    #[must_use]
    pub fn to_participant_range(self, policy: ReorderPolicy) -> ParticipantRange {
        let (start, stop) = if policy.offsets_local_tile() {
            (self.start.saturating_sub(1), self.stop.saturating_sub(1))
        } else {
            (self.start, self.stop)
        };
        if stop < start {
            tracing::trace!(start, stop, "clamping inverted visible range");
        }
        ParticipantRange::new(start, stop)
    }
}

/// Visible cells of a virtualized grid, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridWindow {
    pub row_start: usize,
    pub row_stop: usize,
    pub column_start: usize,
    pub column_stop: usize,
}

/// What a virtualized viewport reported as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ViewportWindow {
    List(ViewportRange),
    Grid(GridWindow),
}

impl ViewportWindow {
    /// Flat viewport range for this window.
    pub fn flatten(self, grid_columns: u32) -> Result<ViewportRange, LayoutError> {
        match self {
            Self::List(range) => Ok(range),
            Self::Grid(window) => ViewportRange::from_grid(window, grid_columns),
        }
    }
}

/// Inclusive index range into the remote-participant array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ParticipantRange {
    pub start: usize,
    pub stop: usize,
}

impl ParticipantRange {
    /// Build a range, collapsing an inverted `stop` onto `start`.
    #[must_use]
    pub const fn new(start: usize, stop: usize) -> Self {
        let stop = if stop < start { start } else { stop };
        Self { start, stop }
    }

    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.stop
    }

    /// Number of indices covered (inclusive range, so never zero).
    ///
    /// A range whose public fields were set inverted counts as one index.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.stop.saturating_sub(self.start).saturating_add(1)
    }
}

/// Whether the local participant's tile occupies viewport index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ReorderPolicy {
    pub reordering_enabled: bool,
    pub local_tile_included: bool,
}

impl ReorderPolicy {
    /// Viewport and participant indices line up.
    pub const PASSTHROUGH: Self = Self {
        reordering_enabled: false,
        local_tile_included: false,
    };

    /// The local tile is injected at viewport index 0.
    pub const LOCAL_TILE_FIRST: Self = Self {
        reordering_enabled: true,
        local_tile_included: true,
    };

    #[must_use]
    pub const fn new(reordering_enabled: bool, local_tile_included: bool) -> Self {
        Self {
            reordering_enabled,
            local_tile_included,
        }
    }

    /// Whether viewport indices are one ahead of participant indices.
    #[must_use]
    pub const fn offsets_local_tile(&self) -> bool {
        self.reordering_enabled && self.local_tile_included
    }
}

/// Map a viewport window to the participant indices that must be rendered.
pub fn map_range(
    window: ViewportWindow,
    grid_columns: u32,
    policy: ReorderPolicy,
) -> Result<ParticipantRange, LayoutError> {
    Ok(window.flatten(grid_columns)?.to_participant_range(policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(start: usize, stop: usize) -> ViewportWindow {
        ViewportWindow::List(ViewportRange::new(start, stop))
    }

    #[test]
    fn reordering_offsets_by_one() {
        let mapped = map_range(list(1, 5), 3, ReorderPolicy::LOCAL_TILE_FIRST).unwrap();
        assert_eq!(mapped, ParticipantRange::new(0, 4));
    }

    #[test]
    fn passthrough_keeps_indices() {
        let mapped = map_range(list(1, 5), 3, ReorderPolicy::PASSTHROUGH).unwrap();
        assert_eq!(mapped, ParticipantRange::new(1, 5));
    }

    #[test]
    fn offset_needs_both_flags() {
        let reorder_only = ReorderPolicy::new(true, false);
        let local_only = ReorderPolicy::new(false, true);
        assert_eq!(
            map_range(list(2, 6), 1, reorder_only).unwrap(),
            ParticipantRange::new(2, 6)
        );
        assert_eq!(
            map_range(list(2, 6), 1, local_only).unwrap(),
            ParticipantRange::new(2, 6)
        );
    }

    #[test]
    fn start_floors_at_zero() {
        let mapped = map_range(list(0, 3), 1, ReorderPolicy::LOCAL_TILE_FIRST).unwrap();
        assert_eq!(mapped, ParticipantRange::new(0, 2));
    }

    #[test]
    fn only_local_tile_visible_clamps_stop() {
        let mapped = map_range(list(0, 0), 1, ReorderPolicy::LOCAL_TILE_FIRST).unwrap();
        assert_eq!(mapped, ParticipantRange::new(0, 0));
    }

    #[test]
    fn inverted_input_is_clamped() {
        let mapped = map_range(list(7, 3), 1, ReorderPolicy::PASSTHROUGH).unwrap();
        assert_eq!(mapped, ParticipantRange::new(7, 7));
    }

    #[test]
    fn grid_window_flattens_row_major() {
        let window = ViewportWindow::Grid(GridWindow {
            row_start: 1,
            row_stop: 3,
            column_start: 0,
            column_stop: 2,
        });
        assert_eq!(window.flatten(4).unwrap(), ViewportRange::new(4, 14));
        assert_eq!(
            map_range(window, 4, ReorderPolicy::LOCAL_TILE_FIRST).unwrap(),
            ParticipantRange::new(3, 13)
        );
    }

    #[test]
    fn grid_with_zero_columns_is_rejected() {
        let window = ViewportWindow::Grid(GridWindow::default());
        assert_eq!(
            map_range(window, 0, ReorderPolicy::PASSTHROUGH),
            Err(LayoutError::InvalidColumns { columns: 0 })
        );
    }

    #[test]
    fn list_ignores_column_count() {
        assert!(map_range(list(0, 2), 0, ReorderPolicy::PASSTHROUGH).is_ok());
    }

    #[test]
    fn participant_range_is_inclusive() {
        let range = ParticipantRange::new(2, 4);
        assert_eq!(range.len(), 3);
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
    }

    #[test]
    fn inverted_participant_range_does_not_underflow() {
        let built = ParticipantRange::new(5, 3);
        assert_eq!(built, ParticipantRange::new(5, 5));
        assert_eq!(built.len(), 1);

        let raw = ParticipantRange { start: 5, stop: 3 };
        assert_eq!(raw.len(), 1);
        assert!(!raw.contains(4));
    }
}
