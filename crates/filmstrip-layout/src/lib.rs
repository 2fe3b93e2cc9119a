#![forbid(unsafe_code)]

//! Layout solvers for the conference filmstrip.
//!
//! # Role in the filmstrip
//! Three independent pieces, each usable on its own:
//!
//! - [`tiles`]: collision-free grid placement with a reserved moderator tile.
//! - [`visible_range`]: virtualized viewport indices to participant indices.
//! - [`resize`]: the drag state machine behind a panel's resize handle.
//!
//! [`item_key`] and [`context`] carry the supporting rules for keying
//! virtualized slots and deciding whether the local tile sits in the viewport.
//!
//! Planners are pure functions of their inputs. The drag controller is the
//! only stateful piece and owns nothing beyond its own session record.

pub mod context;
pub mod error;
pub mod item_key;
pub mod resize;
pub mod tiles;
pub mod visible_range;

pub use context::{FilmstripLayout, ReorderContext};
pub use error::LayoutError;
pub use filmstrip_core::{
    GridShape, Participant, ParticipantId, ParticipantRole, PointerPosition, ResizeAxis, TileRect,
};
pub use item_key::{ItemKey, grid_item_key, list_item_key};
pub use resize::{
    DimensionBounds, ResizeCancelReason, ResizeDragController, ResizeDragEffect,
    ResizeDragNoopReason, ResizeDragState, ResizeDragTransition, ResizeInputEvent,
};
pub use tiles::{MODERATOR_HEIGHT, MODERATOR_WIDTH, TileGrid, TilePlan, TilePosition, plan_tiles};
pub use visible_range::{
    GridWindow, ParticipantRange, ReorderPolicy, ViewportRange, ViewportWindow, map_range,
};
