use chrono::{DateTime, Utc};
use glam::DVec3;
use tracing::info;

use crate::config::ViewConfig;
use crate::controller::camera_controller::CameraController;
use crate::controller::input::{InputEvent, InputResponse};
use crate::model::{CameraState, LaunchSummary, MissionParams, MOON_ORBIT_A};
use crate::view::{DrawingSurface, FrameLayout, SceneRenderer};

/// One orbit view: owns the camera, the gesture sessions, and the Moon
/// position currently on screen.
pub struct Viewer {
    camera: CameraState,
    controller: CameraController,
    renderer: SceneRenderer,
    moon: DVec3,
    last_frame: Option<FrameLayout>,
}

impl Viewer {
    /// Moon position drawn before the first compute.
    pub const DEFAULT_MOON: DVec3 = DVec3::new(MOON_ORBIT_A, 0.0, 0.0);

    pub fn new(config: &ViewConfig) -> Self {
        Self {
            camera: config.camera,
            controller: CameraController::new(config),
            renderer: SceneRenderer::new(config),
            moon: Self::DEFAULT_MOON,
            last_frame: None,
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    pub fn moon(&self) -> DVec3 {
        self.moon
    }

    pub fn last_frame(&self) -> Option<FrameLayout> {
        self.last_frame
    }

    /// Draw `moon` (km) and keep it as the current Moon for later redraws.
    pub fn render_at<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S, moon: DVec3) -> FrameLayout {
        self.moon = moon;
        self.redraw(surface)
    }

    pub fn redraw<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> FrameLayout {
        let frame = self.renderer.render_at(surface, &self.camera, self.moon);
        self.last_frame = Some(frame);
        frame
    }

    /// Compute action: locate the Moon at `time`, draw it, and report.
    pub fn compute<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        time: DateTime<Utc>,
        params: MissionParams,
    ) -> LaunchSummary {
        let summary = LaunchSummary::at(time, params);
        info!(%time, jd = summary.julian_date, "compute");
        self.render_at(surface, summary.moon_position);
        summary
    }

    /// Update the camera from `event` without drawing.
    pub fn handle_input(&mut self, event: &InputEvent) -> InputResponse {
        self.controller.handle(&mut self.camera, event)
    }

    /// Update the camera and redraw if it moved.
    pub fn on_input<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S, event: &InputEvent) -> InputResponse {
        let response = self.handle_input(event);
        if response.camera_changed {
            self.redraw(surface);
        }
        response
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}
