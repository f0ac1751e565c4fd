use glam::{DVec2, DVec3};
use tracing::{debug, warn};

use crate::config::{Palette, ViewConfig};
use crate::model::CameraState;
use crate::view::projector::Projector;
use crate::view::surface::DrawingSurface;

/// Where Earth and Moon ended up on screen for the last frame; `None` for a
/// body that could not be projected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLayout {
    pub earth: Option<DVec2>,
    pub moon: Option<DVec2>,
}

/// Draws the Earth at the origin, the Moon, and the line between them.
#[derive(Debug, Clone)]
pub struct SceneRenderer {
    pub projector: Projector,
    pub earth_radius_px: f64,
    pub moon_radius_px: f64,
    pub palette: Palette,
}

impl SceneRenderer {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            projector: Projector::new(config.perspective_k, config.min_depth_km),
            earth_radius_px: config.earth_radius_px,
            moon_radius_px: config.moon_radius_px,
            palette: config.palette,
        }
    }

    /// Overwrite the whole surface with a frame for `moon` (km) seen through `camera`.
    pub fn render_at<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        camera: &CameraState,
        moon: DVec3,
    ) -> FrameLayout {
        let center = surface.center();
        surface.fill_background(self.palette.background);

        let earth = self.projector.project(DVec3::ZERO, camera, center);
        let moon_px = self.projector.project(moon, camera, center);

        match earth {
            Some(e) => surface.fill_circle(e, self.earth_radius_px, self.palette.earth),
            None => warn!(distance = camera.distance, "earth is behind the camera"),
        }
        match moon_px {
            Some(m) => surface.fill_circle(m, self.moon_radius_px, self.palette.moon),
            None => warn!(?moon, distance = camera.distance, "moon is behind the camera"),
        }
        if let (Some(e), Some(m)) = (earth, moon_px) {
            surface.stroke_line(e, m, self.palette.link);
        }

        debug!(?earth, moon = ?moon_px, "frame rendered");
        FrameLayout { earth, moon: moon_px }
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}
