#![forbid(unsafe_code)]

//! Configuration errors raised by the layout solvers.

use std::fmt;

/// Caller-supplied static input the solvers refuse to guess around.
///
/// Runtime data shapes (empty participant lists, empty visible ranges,
/// stale pointer events) are never reported through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The grid must have at least one column.
    InvalidColumns { columns: u32 },
    /// Resize bounds where the minimum exceeds the maximum.
    InvalidDimensionBounds { min: u32, max: u32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColumns { columns } => {
                write!(f, "grid columns must be >= 1 (got {columns})")
            }
            Self::InvalidDimensionBounds { min, max } => {
                write!(f, "dimension bounds must satisfy min <= max (got {min} > {max})")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
