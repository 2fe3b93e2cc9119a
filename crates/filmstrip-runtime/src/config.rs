#![forbid(unsafe_code)]

//! Tunable filmstrip parameters.
//!
//! [`FilmstripConfig`] gathers the resize limits, anchor fallbacks, throttle
//! cadence, and reordering switch that would otherwise be scattered
//! constants. It can be loaded from TOML or JSON at startup.
//!
//! ```toml
//! # filmstrip.toml
//! [resize]
//! min_width = 120
//! throttle_interval_ms = 50
//!
//! [reordering]
//! enable_thumbnail_reordering = false
//! ```
//!
//! ```rust,ignore
//! let config = FilmstripConfig::from_toml_file("filmstrip.toml")?;
//! let config = FilmstripConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! `FilmstripConfig::default()` reproduces the stock filmstrip: a 120px
//! vertical strip, a 180px top panel, and a 50ms move throttle.

#[cfg(feature = "config-files")]
use std::path::Path;
use std::time::Duration;

use filmstrip_core::ResizeAxis;
use serde::{Deserialize, Serialize};

/// Default and minimum width of the vertical filmstrip, in pixels.
pub const DEFAULT_FILMSTRIP_WIDTH: u32 = 120;

/// Default and minimum height of the top-panel filmstrip, in pixels.
pub const TOP_FILMSTRIP_HEIGHT: u32 = 180;

/// Minimum spacing between processed pointer moves during a resize.
pub const DEFAULT_RESIZE_THROTTLE_MS: u64 = 50;

/// Top-level filmstrip configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilmstripConfig {
    pub resize: ResizeConfig,
    pub reordering: ReorderingConfig,
}

/// Resize handle limits and cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Smallest width the vertical filmstrip can be dragged to.
    pub min_width: u32,
    /// Smallest height the top panel can be dragged to.
    pub min_height: u32,
    /// Anchor width when the user has not resized the strip yet.
    pub default_width: u32,
    /// Anchor height when the user has not resized the top panel yet.
    pub default_height: u32,
    pub throttle_interval_ms: u64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_FILMSTRIP_WIDTH,
            min_height: TOP_FILMSTRIP_HEIGHT,
            default_width: DEFAULT_FILMSTRIP_WIDTH,
            default_height: TOP_FILMSTRIP_HEIGHT,
            throttle_interval_ms: DEFAULT_RESIZE_THROTTLE_MS,
        }
    }
}

impl ResizeConfig {
    /// Lower bound for the dimension `axis` controls.
    #[must_use]
    pub const fn min_for(&self, axis: ResizeAxis) -> u32 {
        match axis {
            ResizeAxis::Horizontal => self.min_width,
            ResizeAxis::Vertical => self.min_height,
        }
    }

    /// Anchor fallback for the dimension `axis` controls.
    #[must_use]
    pub const fn default_for(&self, axis: ResizeAxis) -> u32 {
        match axis {
            ResizeAxis::Horizontal => self.default_width,
            ResizeAxis::Vertical => self.default_height,
        }
    }

    #[must_use]
    pub const fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_interval_ms)
    }
}

/// Thumbnail ordering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderingConfig {
    /// Move the local participant's tile to the front of the grid.
    pub enable_thumbnail_reordering: bool,
}

impl Default for ReorderingConfig {
    fn default() -> Self {
        Self {
            enable_thumbnail_reordering: true,
        }
    }
}

impl FilmstripConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config-files")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(s)
            .map_err(ConfigError::Toml)?
            .validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-files")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-files")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(s)
            .map_err(ConfigError::Json)?
            .validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-files")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Check every parameter. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let resize = &self.resize;

        if resize.throttle_interval_ms == 0 {
            errors.push("resize.throttle_interval_ms must be > 0".into());
        }
        if resize.min_width == 0 {
            errors.push("resize.min_width must be > 0".into());
        }
        if resize.min_height == 0 {
            errors.push("resize.min_height must be > 0".into());
        }
        if resize.default_width < resize.min_width {
            errors.push(format!(
                "resize.default_width must be >= min_width ({}), got {}",
                resize.min_width, resize.default_width
            ));
        }
        if resize.default_height < resize.min_height {
            errors.push(format!(
                "resize.default_height must be >= min_height ({}), got {}",
                resize.min_height, resize.default_height
            ));
        }

        errors
    }

    /// Return `self` if [`validate`](Self::validate) finds nothing.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Errors that can occur when loading a filmstrip configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config-files")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config-files")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config-files")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config-files")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config-files")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config-files")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
