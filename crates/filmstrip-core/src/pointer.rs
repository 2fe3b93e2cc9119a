#![forbid(unsafe_code)]

//! Pointer coordinates and resize axes.

use serde::{Deserialize, Serialize};

/// Pointer position in viewport pixels, as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Which panel dimension a resize handle controls.
///
/// ```text
/// Horizontal: panel docked on the right, handle on its left edge.
///             Dragging left (decreasing x) widens the panel.
/// Vertical:   panel docked on the top, handle on its bottom edge.
///             Dragging down (increasing y) makes the panel taller.
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeAxis {
    /// Resizes the panel width; tracks the pointer's x coordinate.
    Horizontal,
    /// Resizes the panel height; tracks the pointer's y coordinate.
    Vertical,
}

impl ResizeAxis {
    /// The pointer coordinate this axis tracks.
    #[must_use]
    pub const fn coordinate(self, position: PointerPosition) -> i32 {
        match self {
            Self::Horizontal => position.x,
            Self::Vertical => position.y,
        }
    }

    /// Stable lowercase label for logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}
