#![forbid(unsafe_code)]

//! A resizable filmstrip panel wired to its host.
//!
//! [`ResizablePanel`] drives a [`ResizeDragController`] from raw pointer
//! events and forwards the outcome to a [`FilmstripSink`]. It adds what the
//! bare controller leaves to its caller:
//!
//! - anchor fallback to the configured default when the user never resized,
//! - viewport-derived bounds with the configured minimum,
//! - leading-edge throttling of moves,
//! - ownership of the document-wide pointer listeners.
//!
//! # Usage
//!
//! ```
//! use filmstrip_core::PointerPosition;
//! use filmstrip_runtime::{FilmstripNotification, ResizablePanel, ResizeConfig, panel_axis};
//! use web_time::Instant;
//!
//! let mut panel = ResizablePanel::new(
//!     panel_axis(false),
//!     ResizeConfig::default(),
//!     Vec::<FilmstripNotification>::new(),
//! );
//! panel.pointer_down(PointerPosition::new(800, 0), Some(300));
//! panel.pointer_move(PointerPosition::new(780, 0), 900, Instant::now());
//! panel.pointer_up();
//! assert_eq!(panel.sink().len(), 3);
//! ```
//!
//! # Invariants
//!
//! 1. `resizing_changed(true)` is sent once per drag and always paired with a
//!    later `resizing_changed(false)`, including on unmount.
//! 2. Dimensions are only sent when they change.
//! 3. Unmounting releases the listeners even if no drag was running.
//! 4. An unmounted panel refuses new drags until it is mounted again, since
//!    nothing would deliver the pointer release.

use filmstrip_core::{PointerPosition, ResizeAxis};
use filmstrip_layout::{
    DimensionBounds, ResizeCancelReason, ResizeDragController, ResizeDragEffect,
    ResizeDragTransition,
};
use web_time::Instant;

use crate::config::ResizeConfig;
use crate::sink::FilmstripSink;
use crate::subscription::ListenerGuard;
use crate::throttle::MoveThrottle;

/// Resize axis for a panel docked on top (`true`) or on the right.
#[must_use]
pub const fn panel_axis(top_panel: bool) -> ResizeAxis {
    if top_panel {
        ResizeAxis::Vertical
    } else {
        ResizeAxis::Horizontal
    }
}

/// One resizable panel and its drag session.
#[derive(Debug)]
pub struct ResizablePanel<S: FilmstripSink> {
    axis: ResizeAxis,
    config: ResizeConfig,
    controller: ResizeDragController,
    throttle: MoveThrottle,
    listeners: Option<ListenerGuard>,
    unmounted: bool,
    sink: S,
}

impl<S: FilmstripSink> ResizablePanel<S> {
    pub fn new(axis: ResizeAxis, config: ResizeConfig, sink: S) -> Self {
        Self {
            axis,
            config,
            controller: ResizeDragController::new(),
            throttle: MoveThrottle::new(config.throttle_interval()),
            listeners: None,
            unmounted: false,
            sink,
        }
    }

    #[must_use]
    pub const fn axis(&self) -> ResizeAxis {
        self.axis
    }

    #[must_use]
    pub fn controller(&self) -> &ResizeDragController {
        &self.controller
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Take ownership of the document-wide pointer listeners.
    ///
    /// A previously mounted guard is released first.
    pub fn mount(&mut self, listeners: ListenerGuard) {
        if let Some(mut previous) = self.listeners.replace(listeners) {
            previous.release();
        }
        self.unmounted = false;
        tracing::debug!(axis = self.axis.label(), "filmstrip panel mounted");
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.listeners.as_ref().is_some_and(ListenerGuard::is_active)
    }

    /// Press on the resize handle.
    ///
    /// `user_dimension` is the size the user last dragged to, if any.
    /// Returns `None` once the panel has been unmounted.
    pub fn pointer_down(
        &mut self,
        position: PointerPosition,
        user_dimension: Option<u32>,
    ) -> Option<ResizeDragTransition> {
        if self.unmounted {
            tracing::debug!(axis = self.axis.label(), "pointer down on unmounted panel");
            return None;
        }
        let anchor = user_dimension.unwrap_or_else(|| self.config.default_for(self.axis));
        let transition = self.controller.pointer_down(self.axis, position, anchor);
        if matches!(transition.effect, ResizeDragEffect::Started { .. }) {
            self.throttle.reset();
            self.sink.resizing_changed(true);
        }
        Some(transition)
    }

    /// Pointer moved somewhere in the document.
    ///
    /// `max_dimension` is the largest size the current viewport allows.
    /// Returns `None` when the throttle swallowed the move.
    pub fn pointer_move(
        &mut self,
        position: PointerPosition,
        max_dimension: u32,
        now: Instant,
    ) -> Option<ResizeDragTransition> {
        if self.controller.is_active() && !self.throttle.admit(now) {
            tracing::trace!(
                axis = self.axis.label(),
                dropped = self.throttle.dropped(),
                "pointer move throttled"
            );
            return None;
        }
        let bounds = DimensionBounds::floored(self.config.min_for(self.axis), max_dimension);
        let transition = self.controller.pointer_move(position, bounds);
        if let ResizeDragEffect::Committed {
            axis, dimension, ..
        } = transition.effect
        {
            self.sink.dimension_committed(axis, dimension);
        }
        Some(transition)
    }

    /// Pointer released somewhere in the document.
    pub fn pointer_up(&mut self) -> ResizeDragTransition {
        let transition = self.controller.pointer_up();
        if transition.effect.ends_session() {
            self.throttle.reset();
            self.sink.resizing_changed(false);
        }
        transition
    }

    /// Release the listeners and abandon any running drag.
    pub fn unmount(&mut self) -> Option<ResizeDragTransition> {
        self.unmounted = true;
        if let Some(mut listeners) = self.listeners.take() {
            listeners.release();
            tracing::debug!(axis = self.axis.label(), "filmstrip panel unmounted");
        }
        let canceled = self.controller.force_cancel(ResizeCancelReason::Unmounted);
        if canceled.is_some() {
            self.throttle.reset();
            self.sink.resizing_changed(false);
        }
        canceled
    }
}

impl<S: FilmstripSink> Drop for ResizablePanel<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
