#![forbid(unsafe_code)]

//! Tile placement for the participant grid.
//!
//! [`TileGrid::plan`] assigns every participant a rectangle of grid cells.
//! A single moderator receives an enlarged [`MODERATOR_WIDTH`] x
//! [`MODERATOR_HEIGHT`] tile pinned to the grid origin; everyone else gets one
//! cell, filled row-major around the reserved region. The region stays
//! reserved even when nobody holds the moderator role, so tiles do not jump
//! when a moderator joins.
//!
//! # Usage
//!
//! ```
//! use filmstrip_core::Participant;
//! use filmstrip_layout::tiles::TileGrid;
//!
//! let grid = TileGrid::new(4).expect("four columns is a valid grid");
//! let plan = grid.plan(&[Participant::normal("a"), Participant::moderator("m")]);
//! assert_eq!(plan.get("m").map(|t| t.rect()), Some(grid.moderator_region()));
//! assert_eq!(plan.get("a").map(|t| (t.x, t.y)), Some((2, 0)));
//! ```
//!
//! # Invariants
//!
//! 1. One output tile per input participant, in input order.
//! 2. No two tiles of one plan share a cell.
//! 3. At most one moderator tile; later moderators are placed as normal tiles.
//! 4. No normal tile lands inside the reserved region, wherever (or whether)
//!    a moderator sits in the input.
//! 5. Placement is a pure function of `(participants, columns)`.
//!
//! # Failure Modes
//!
//! - `columns == 0` is rejected by [`TileGrid::new`] with
//!   [`LayoutError::InvalidColumns`].
//! - With fewer than [`MODERATOR_WIDTH`] columns the moderator tile is wider
//!   than the grid. Placement still terminates and stays collision-free; a
//!   warning is logged so the host can pick a wider grid.

use filmstrip_core::{GridShape, Participant, ParticipantId, TileRect};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Width of the moderator tile, in cells.
pub const MODERATOR_WIDTH: u32 = 2;

/// Height of the moderator tile, in cells.
pub const MODERATOR_HEIGHT: u32 = 2;

/// Grid position assigned to one participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePosition {
    pub participant_id: ParticipantId,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl TilePosition {
    fn new(participant_id: ParticipantId, rect: TileRect) -> Self {
        Self {
            participant_id,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }

    /// The occupied cells as a rectangle.
    #[must_use]
    pub const fn rect(&self) -> TileRect {
        TileRect::new(self.x, self.y, self.width, self.height)
    }

    /// Stable key the rendering layer uses for this tile's element.
    #[must_use]
    pub fn item_key(&self) -> String {
        format!("remote_{}", self.participant_id)
    }
}

/// A validated grid width used to plan tile positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    columns: u32,
}

impl TileGrid {
    /// Create a planner for a grid with `columns` columns.
    pub fn new(columns: u32) -> Result<Self, LayoutError> {
        if columns == 0 {
            return Err(LayoutError::InvalidColumns { columns });
        }
        Ok(Self { columns })
    }

    /// Create a planner from a host grid shape. Only `columns` affects placement.
    pub fn from_shape(shape: GridShape) -> Result<Self, LayoutError> {
        Self::new(shape.columns)
    }

    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// The region reserved for the moderator tile.
    #[must_use]
    pub const fn moderator_region(&self) -> TileRect {
        TileRect::new(0, 0, MODERATOR_WIDTH, MODERATOR_HEIGHT)
    }

    /// Row-major cell for a linear cursor position.
    const fn cell_at(&self, index: u32) -> (u32, u32) {
        (index % self.columns, index / self.columns)
    }

    /// Place every participant on the grid.
    pub fn plan(&self, participants: &[Participant]) -> TilePlan {
        let has_moderator = participants.iter().any(Participant::is_moderator);
        let region = self.moderator_region();

        if has_moderator && self.columns < MODERATOR_WIDTH {
            tracing::warn!(
                columns = self.columns,
                moderator_width = MODERATOR_WIDTH,
                "moderator tile is wider than the grid"
            );
        }

        let mut tiles = Vec::with_capacity(participants.len());
        let mut moderator_placed = false;
        let mut cursor: u32 = MODERATOR_WIDTH;

        for participant in participants {
            if participant.is_moderator() && !moderator_placed {
                moderator_placed = true;
                tiles.push(TilePosition::new(participant.id.clone(), region));
                continue;
            }

            // The region only spans the first MODERATOR_HEIGHT rows, so this
            // advances at most MODERATOR_HEIGHT * columns cells.
            loop {
                let (x, y) = self.cell_at(cursor);
                if !region.contains(x, y) {
                    break;
                }
                cursor = cursor.saturating_add(1);
            }

            let (x, y) = self.cell_at(cursor);
            tiles.push(TilePosition::new(participant.id.clone(), TileRect::cell(x, y)));
            cursor = cursor.saturating_add(1);
        }

        tracing::debug!(
            participants = participants.len(),
            columns = self.columns,
            moderator = moderator_placed,
            "planned filmstrip tiles"
        );

        TilePlan::from_tiles(tiles)
    }
}

/// Plan tile positions for `participants` on a grid with `columns` columns.
///
/// Returns one [`TilePosition`] per participant, in input order.
pub fn plan_tiles(
    participants: &[Participant],
    columns: u32,
) -> Result<Vec<TilePosition>, LayoutError> {
    Ok(TileGrid::new(columns)?.plan(participants).into_tiles())
}

/// Output of one planning pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TilePlan {
    tiles: Vec<TilePosition>,
    by_id: FxHashMap<ParticipantId, usize>,
}

impl TilePlan {
    fn from_tiles(tiles: Vec<TilePosition>) -> Self {
        let mut by_id = FxHashMap::default();
        by_id.reserve(tiles.len());
        for (index, tile) in tiles.iter().enumerate() {
            if by_id.contains_key(&tile.participant_id) {
                tracing::warn!(
                    participant = %tile.participant_id,
                    index,
                    "duplicate participant id in tile plan"
                );
                continue;
            }
            by_id.insert(tile.participant_id.clone(), index);
        }
        Self { tiles, by_id }
    }

    /// Tiles in input order.
    #[must_use]
    pub fn tiles(&self) -> &[TilePosition] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &TilePosition> {
        self.tiles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile for a participant id. The first occurrence wins on duplicates.
    #[must_use]
    pub fn get(&self, participant_id: &str) -> Option<&TilePosition> {
        self.by_id
            .get(participant_id)
            .and_then(|&index| self.tiles.get(index))
    }

    /// The enlarged moderator tile, if one was placed.
    #[must_use]
    pub fn moderator(&self) -> Option<&TilePosition> {
        self.tiles
            .iter()
            .find(|tile| tile.width == MODERATOR_WIDTH && tile.height == MODERATOR_HEIGHT)
    }

    /// Number of grid rows the plan occupies.
    #[must_use]
    pub fn rows_used(&self) -> u32 {
        self.tiles
            .iter()
            .map(|tile| tile.rect().bottom())
            .max()
            .unwrap_or(0)
    }

    /// Whether every tile fits inside the host's grid shape.
    #[must_use]
    pub fn fits_within(&self, shape: GridShape) -> bool {
        self.tiles.iter().all(|tile| {
            let rect = tile.rect();
            rect.right() <= shape.columns && rect.bottom() <= shape.rows
        })
    }

    #[must_use]
    pub fn into_tiles(self) -> Vec<TilePosition> {
        self.tiles
    }
}
