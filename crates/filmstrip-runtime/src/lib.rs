#![forbid(unsafe_code)]

//! Filmstrip Runtime
//!
//! Ties the pure solvers in `filmstrip-layout` to a host application.
//!
//! # Key Components
//!
//! - [`FilmstripConfig`] - Resize limits, throttle cadence, and reordering switch
//! - [`ResizablePanel`] - Drag controller plus throttle, anchors, and listener ownership
//! - [`FilmstripView`] - Virtualized-view callbacks, tile planning, and item keys
//! - [`FilmstripSink`] - Where state changes go
//! - [`ListenerGuard`] - Scoped removal of document-wide pointer listeners
//! - [`MoveThrottle`] - Leading-edge pointer move throttle
//!
//! # Role in the filmstrip
//! The layout crate decides *what* the filmstrip looks like; this crate
//! decides *when* that work runs and where the results are reported.

pub mod config;
pub mod filmstrip;
pub mod panel;
pub mod sink;
pub mod subscription;
pub mod throttle;

pub use config::{
    ConfigError, DEFAULT_FILMSTRIP_WIDTH, DEFAULT_RESIZE_THROTTLE_MS, FilmstripConfig,
    ReorderingConfig, ResizeConfig, TOP_FILMSTRIP_HEIGHT,
};
pub use filmstrip::FilmstripView;
pub use panel::{ResizablePanel, panel_axis};
pub use sink::{FilmstripNotification, FilmstripSink};
pub use subscription::ListenerGuard;
pub use throttle::MoveThrottle;
