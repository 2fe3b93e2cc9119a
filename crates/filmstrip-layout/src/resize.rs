#![forbid(unsafe_code)]

//! Resize-handle drag lifecycle.
//!
//! [`ResizeDragController`] turns pointer events on a panel's resize handle
//! into committed panel dimensions. Every step returns a
//! [`ResizeDragTransition`] describing what happened, including explicit
//! no-op diagnostics for events that arrive when they cannot apply.
//!
//! ```text
//! Idle --pointer down--> Dragging --pointer up / cancel--> Idle
//!                        Dragging --pointer move--> Dragging (commit if changed)
//! ```
//!
//! Each move is computed from the anchor captured at pointer-down, never from
//! the previous move, so a throttled or irregular move cadence cannot
//! accumulate drift.

use filmstrip_core::{PointerPosition, ResizeAxis};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Inclusive limits for a panel dimension.
///
/// Bounds track the live viewport, so the host passes fresh bounds with every
/// pointer move instead of configuring them once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionBounds {
    min: u32,
    max: u32,
}

impl DimensionBounds {
    pub fn new(min: u32, max: u32) -> Result<Self, LayoutError> {
        if min > max {
            return Err(LayoutError::InvalidDimensionBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Bounds where `min` wins over a smaller `max`.
    ///
    /// A viewport narrower than the minimum panel size still allows the
    /// minimum; the panel overflows rather than collapsing.
    #[must_use]
    pub const fn floored(min: u32, max: u32) -> Self {
        let max = if max < min { min } else { max };
        Self { min, max }
    }

    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Clamp a (possibly negative) candidate dimension into the bounds.
    #[must_use]
    pub fn clamp(&self, candidate: i64) -> u32 {
        let clamped = candidate.clamp(i64::from(self.min), i64::from(self.max));
        // In range of u32 by construction of the bounds.
        clamped as u32
    }
}

/// Drag lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResizeDragState {
    Idle,
    Dragging {
        axis: ResizeAxis,
        /// Axis-relevant pointer coordinate at pointer-down.
        anchor_coordinate: i32,
        /// Panel dimension at pointer-down.
        anchor_dimension: u32,
        /// Last dimension handed to the host.
        committed_dimension: u32,
    },
}

/// Why an event was safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeDragNoopReason {
    /// Move or release delivered after the session ended.
    IdleWithoutActiveDrag,
    /// Second pointer-down while a drag is running.
    DragAlreadyInProgress,
    /// The clamped dimension equals the last committed one.
    DimensionUnchanged,
}

/// Why a drag ended without a pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeCancelReason {
    /// The hosting view was torn down mid-drag.
    Unmounted,
    /// The host reset the controller explicitly.
    Programmatic,
}

/// Observable effect of one lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum ResizeDragEffect {
    /// Resizing started; other layout-affecting work may pause.
    Started {
        axis: ResizeAxis,
        anchor_coordinate: i32,
        anchor_dimension: u32,
    },
    /// A new panel dimension for the host to apply.
    Committed {
        axis: ResizeAxis,
        previous: u32,
        dimension: u32,
    },
    /// Resizing ended on pointer release.
    Ended { axis: ResizeAxis, dimension: u32 },
    /// Resizing ended without a pointer release.
    Canceled {
        axis: ResizeAxis,
        dimension: u32,
        reason: ResizeCancelReason,
    },
    Noop { reason: ResizeDragNoopReason },
}

impl ResizeDragEffect {
    /// The dimension to apply, if this effect commits one.
    #[must_use]
    pub const fn committed_dimension(&self) -> Option<u32> {
        match self {
            Self::Committed { dimension, .. } => Some(*dimension),
            _ => None,
        }
    }

    /// Whether this effect ends a drag session.
    #[must_use]
    pub const fn ends_session(&self) -> bool {
        matches!(self, Self::Ended { .. } | Self::Canceled { .. })
    }
}

/// One state-machine step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeDragTransition {
    pub transition_id: u64,
    pub from: ResizeDragState,
    pub to: ResizeDragState,
    pub effect: ResizeDragEffect,
}

/// Pointer input for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeInputEvent {
    /// Press on the resize handle.
    PointerDown {
        axis: ResizeAxis,
        position: PointerPosition,
        current_dimension: u32,
    },
    /// Pointer moved anywhere in the document.
    PointerMove {
        position: PointerPosition,
        bounds: DimensionBounds,
    },
    /// Pointer released anywhere in the document.
    PointerUp,
}

/// Drag controller for one resizable panel.
///
/// Two panels need two controllers; nothing is shared between instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeDragController {
    state: ResizeDragState,
    transition_counter: u64,
}

impl Default for ResizeDragController {
    fn default() -> Self {
        Self {
            state: ResizeDragState::Idle,
            transition_counter: 0,
        }
    }
}

impl ResizeDragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> ResizeDragState {
        self.state
    }

    /// Whether a drag session is running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, ResizeDragState::Dragging { .. })
    }

    /// Apply one pointer event.
    pub fn apply_event(&mut self, event: &ResizeInputEvent) -> ResizeDragTransition {
        match *event {
            ResizeInputEvent::PointerDown {
                axis,
                position,
                current_dimension,
            } => self.pointer_down(axis, position, current_dimension),
            ResizeInputEvent::PointerMove { position, bounds } => {
                self.pointer_move(position, bounds)
            }
            ResizeInputEvent::PointerUp => self.pointer_up(),
        }
    }

    /// Start a drag from the handle.
    pub fn pointer_down(
        &mut self,
        axis: ResizeAxis,
        position: PointerPosition,
        current_dimension: u32,
    ) -> ResizeDragTransition {
        let from = self.state;
        let effect = match self.state {
            ResizeDragState::Idle => {
                let anchor_coordinate = axis.coordinate(position);
                self.state = ResizeDragState::Dragging {
                    axis,
                    anchor_coordinate,
                    anchor_dimension: current_dimension,
                    committed_dimension: current_dimension,
                };
                tracing::info!(
                    axis = axis.label(),
                    anchor_coordinate,
                    anchor_dimension = current_dimension,
                    "filmstrip resize started"
                );
                ResizeDragEffect::Started {
                    axis,
                    anchor_coordinate,
                    anchor_dimension: current_dimension,
                }
            }
            ResizeDragState::Dragging { .. } => {
                noop(ResizeDragNoopReason::DragAlreadyInProgress)
            }
        };
        self.finish(from, effect)
    }

    /// Recompute the dimension for a pointer move and commit it if it changed.
    pub fn pointer_move(
        &mut self,
        position: PointerPosition,
        bounds: DimensionBounds,
    ) -> ResizeDragTransition {
        let from = self.state;
        let effect = match self.state {
            ResizeDragState::Idle => noop(ResizeDragNoopReason::IdleWithoutActiveDrag),
            ResizeDragState::Dragging {
                axis,
                anchor_coordinate,
                anchor_dimension,
                committed_dimension,
            } => {
                let delta = drag_delta(axis, anchor_coordinate, axis.coordinate(position));
                let dimension = bounds.clamp(i64::from(anchor_dimension) + delta);
                if dimension == committed_dimension {
                    noop(ResizeDragNoopReason::DimensionUnchanged)
                } else {
                    self.state = ResizeDragState::Dragging {
                        axis,
                        anchor_coordinate,
                        anchor_dimension,
                        committed_dimension: dimension,
                    };
                    tracing::debug!(
                        axis = axis.label(),
                        previous = committed_dimension,
                        dimension,
                        "filmstrip dimension committed"
                    );
                    ResizeDragEffect::Committed {
                        axis,
                        previous: committed_dimension,
                        dimension,
                    }
                }
            }
        };
        self.finish(from, effect)
    }

    /// End the drag on pointer release.
    pub fn pointer_up(&mut self) -> ResizeDragTransition {
        let from = self.state;
        let effect = match self.state {
            ResizeDragState::Idle => noop(ResizeDragNoopReason::IdleWithoutActiveDrag),
            ResizeDragState::Dragging {
                axis,
                committed_dimension,
                ..
            } => {
                self.state = ResizeDragState::Idle;
                tracing::info!(
                    axis = axis.label(),
                    dimension = committed_dimension,
                    "filmstrip resize ended"
                );
                ResizeDragEffect::Ended {
                    axis,
                    dimension: committed_dimension,
                }
            }
        };
        self.finish(from, effect)
    }

    /// Unconditionally return to Idle.
    ///
    /// Used on teardown paths where no pointer release will ever arrive.
    /// Returns `None` if the controller was already idle.
    pub fn force_cancel(&mut self, reason: ResizeCancelReason) -> Option<ResizeDragTransition> {
        let from = self.state;
        match from {
            ResizeDragState::Idle => None,
            ResizeDragState::Dragging {
                axis,
                committed_dimension,
                ..
            } => {
                self.state = ResizeDragState::Idle;
                tracing::info!(
                    axis = axis.label(),
                    dimension = committed_dimension,
                    ?reason,
                    "filmstrip resize canceled"
                );
                Some(self.finish(
                    from,
                    ResizeDragEffect::Canceled {
                        axis,
                        dimension: committed_dimension,
                        reason,
                    },
                ))
            }
        }
    }

    fn finish(&mut self, from: ResizeDragState, effect: ResizeDragEffect) -> ResizeDragTransition {
        if let ResizeDragEffect::Noop { reason } = effect {
            tracing::trace!(?reason, "resize event ignored");
        }
        self.transition_counter = self.transition_counter.saturating_add(1);
        ResizeDragTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state,
            effect,
        }
    }
}

const fn noop(reason: ResizeDragNoopReason) -> ResizeDragEffect {
    ResizeDragEffect::Noop { reason }
}

/// Signed growth of the panel for a pointer displacement.
///
/// The width panel is docked right, so moving left grows it; the height panel
/// is docked top, so moving down grows it.
fn drag_delta(axis: ResizeAxis, anchor: i32, current: i32) -> i64 {
    match axis {
        ResizeAxis::Horizontal => i64::from(anchor) - i64::from(current),
        ResizeAxis::Vertical => i64::from(current) - i64::from(anchor),
    }
}
