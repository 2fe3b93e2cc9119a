#![forbid(unsafe_code)]

//! Host layout context that decides where the local tile goes.

use serde::{Deserialize, Serialize};

use crate::visible_range::ReorderPolicy;

/// Which conference layout is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilmstripLayout {
    #[default]
    TileView,
    VerticalFilmstrip,
    HorizontalFilmstrip,
    StageFilmstrip,
}

impl FilmstripLayout {
    /// Whether remote thumbnails are rendered as a 2-D grid in this layout.
    #[must_use]
    pub const fn is_grid(self) -> bool {
        matches!(self, Self::TileView)
    }
}

/// Facts about the local client that affect thumbnail ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ReorderContext {
    pub layout: FilmstripLayout,
    /// Reordering is enabled; the local tile moves to the front.
    pub thumbnails_reordered: bool,
    /// The user hid their own tile.
    pub disable_self_view: bool,
    /// This client is a recorder and never renders a local tile.
    pub i_am_recorder: bool,
}

impl ReorderContext {
    /// Whether the local tile is part of the virtualized viewport.
    #[must_use]
    pub const fn local_tile_included(&self) -> bool {
        !self.disable_self_view && !self.i_am_recorder && self.layout.is_grid()
    }

    /// Mapper policy for this context.
    #[must_use]
    pub const fn reorder_policy(&self) -> ReorderPolicy {
        ReorderPolicy::new(self.thumbnails_reordered, self.local_tile_included())
    }
}
