#![forbid(unsafe_code)]

//! Host-facing adapter for the virtualized thumbnail view.
//!
//! [`FilmstripView`] holds the state a render pass needs between frames: the
//! grid width, the local client's [`ReorderContext`], and the reordering
//! switch from [`FilmstripConfig`]. Virtualized containers call
//! [`on_list_items_rendered`](FilmstripView::on_list_items_rendered) or
//! [`on_grid_items_rendered`](FilmstripView::on_grid_items_rendered) after
//! each render; the mapped participant range goes to the sink.
//!
//! # Failure Modes
//!
//! A zero-column grid is rejected when the view is created or resized, so
//! per-frame callbacks never see one.

use filmstrip_core::{Participant, ParticipantId};
use filmstrip_layout::{
    GridWindow, ItemKey, LayoutError, ParticipantRange, ReorderContext, TileGrid, TilePlan,
    ViewportRange, ViewportWindow, grid_item_key, list_item_key, map_range,
};

use crate::config::{FilmstripConfig, ReorderingConfig};
use crate::sink::FilmstripSink;

/// Render-time filmstrip state bound to a sink.
#[derive(Debug)]
pub struct FilmstripView<S: FilmstripSink> {
    reordering: ReorderingConfig,
    context: ReorderContext,
    grid: TileGrid,
    sink: S,
}

impl<S: FilmstripSink> FilmstripView<S> {
    pub fn new(
        config: &FilmstripConfig,
        context: ReorderContext,
        columns: u32,
        sink: S,
    ) -> Result<Self, LayoutError> {
        Ok(Self {
            reordering: config.reordering,
            context,
            grid: TileGrid::new(columns)?,
            sink,
        })
    }

    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.grid.columns()
    }

    pub fn set_columns(&mut self, columns: u32) -> Result<(), LayoutError> {
        self.grid = TileGrid::new(columns)?;
        Ok(())
    }

    pub fn set_context(&mut self, context: ReorderContext) {
        self.context = context;
    }

    /// The host context with the configured reordering switch applied.
    #[must_use]
    pub fn effective_context(&self) -> ReorderContext {
        ReorderContext {
            thumbnails_reordered: self.context.thumbnails_reordered
                && self.reordering.enable_thumbnail_reordering,
            ..self.context
        }
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// A virtualized list rendered items `start..=stop`.
    pub fn on_list_items_rendered(&mut self, start: usize, stop: usize) -> ParticipantRange {
        let range = ViewportRange::new(start, stop)
            .to_participant_range(self.effective_context().reorder_policy());
        self.publish(range);
        range
    }

    /// A virtualized grid rendered the cells in `window`.
    pub fn on_grid_items_rendered(
        &mut self,
        window: GridWindow,
    ) -> Result<ParticipantRange, LayoutError> {
        let range = map_range(
            ViewportWindow::Grid(window),
            self.grid.columns(),
            self.effective_context().reorder_policy(),
        )?;
        self.publish(range);
        Ok(range)
    }

    /// Tile placement for the current grid width.
    #[must_use]
    pub fn plan_tiles(&self, participants: &[Participant]) -> TilePlan {
        self.grid.plan(participants)
    }

    #[must_use]
    pub fn list_item_key<'a>(&self, index: usize, remote: &'a [ParticipantId]) -> ItemKey<'a> {
        list_item_key(index, remote)
    }

    /// Key for the grid cell at `row`, `column`.
    pub fn grid_item_key<'a>(
        &self,
        row: usize,
        column: usize,
        remote: &'a [ParticipantId],
    ) -> Result<ItemKey<'a>, LayoutError> {
        grid_item_key(
            row,
            column,
            self.grid.columns(),
            remote,
            &self.effective_context(),
        )
    }

    fn publish(&mut self, range: ParticipantRange) {
        tracing::trace!(start = range.start, stop = range.stop, "visible participants");
        self.sink.visible_participants_changed(range);
    }
}
