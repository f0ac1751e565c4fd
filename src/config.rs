//! Tunables for the viewer and for logging.
//!
//! Everything is a plain struct with a `Default`; callers override fields
//! with struct-update syntax where they need to.

use std::env;
use std::path::PathBuf;

use crate::model::CameraState;
use crate::view::Color;

/// Bounds applied to the camera distance when a pinch rescales it (km).
/// Only meaningful when `0 < min <= max`; see [`DistanceLimits::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceLimits {
    pub min: f64,
    pub max: f64,
}

impl DistanceLimits {
    pub fn is_valid(&self) -> bool {
        self.min > 0.0 && self.min <= self.max
    }

    /// Never panics; with invalid bounds `max` wins.
    pub fn clamp(&self, distance: f64) -> f64 {
        distance.max(self.min).min(self.max)
    }
}

impl Default for DistanceLimits {
    fn default() -> Self {
        Self {
            min: 10_000.0,
            max: 100_000_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub earth: Color,
    pub moon: Color,
    pub link: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            earth: Color::BLUE,
            moon: Color::GREY,
            link: Color::WHITE,
        }
    }
}

/// Viewer configuration: initial camera, input sensitivity and scene styling.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub camera: CameraState,
    /// Radians of rotation per pixel of pointer travel, shared by mouse and touch.
    pub sensitivity: f64,
    /// Numerator of the perspective divide.
    pub perspective_k: f64,
    /// Points whose rotated depth plus camera distance falls below this are not projected.
    pub min_depth_km: f64,
    /// Pinch moves with a finger spread below this (px) are ignored.
    pub min_pinch_spread_px: f64,
    pub distance_limits: DistanceLimits,
    pub earth_radius_px: f64,
    pub moon_radius_px: f64,
    pub palette: Palette,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            camera: CameraState::default(),
            sensitivity: 0.005,
            perspective_k: 500.0,
            min_depth_km: 1.0,
            min_pinch_spread_px: 1.0,
            distance_limits: DistanceLimits::default(),
            earth_radius_px: 10.0,
            moon_radius_px: 5.0,
            palette: Palette::default(),
        }
    }
}

/// Logging setup. `RUST_LOG` still wins over `default_filter` when set.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub default_filter: String,
    /// Daily-rolling log file; native only.
    pub file: Option<PathBuf>,
}

impl LogConfig {
    pub const FILE_VAR: &'static str = "MOONVIEW_LOG_FILE";

    pub fn from_env() -> Self {
        Self {
            file: env::var(Self::FILE_VAR).ok().filter(|s| !s.is_empty()).map(PathBuf::from),
            ..Self::default()
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            file: None,
        }
    }
}
