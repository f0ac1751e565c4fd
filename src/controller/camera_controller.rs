use glam::DVec2;
use tracing::{debug, trace, warn};

use crate::config::{DistanceLimits, ViewConfig};
use crate::controller::input::{InputEvent, InputResponse};
use crate::model::{CameraState, MouseDrag, TouchGesture};

/// Turns pointer and touch streams into camera updates.
///
/// Mouse and touch sessions are tracked separately and never cancel each
/// other; both feed the same rotation routine.
#[derive(Debug, Clone)]
pub struct CameraController {
    pub sensitivity: f64,
    pub min_pinch_spread: f64,
    pub distance_limits: DistanceLimits,
    touch: TouchGesture,
    mouse: MouseDrag,
}

impl CameraController {
    pub fn new(config: &ViewConfig) -> Self {
        let distance_limits = if config.distance_limits.is_valid() {
            config.distance_limits
        } else {
            warn!(limits = ?config.distance_limits, "invalid distance limits, using defaults");
            DistanceLimits::default()
        };
        Self {
            sensitivity: config.sensitivity,
            min_pinch_spread: config.min_pinch_spread_px,
            distance_limits,
            touch: TouchGesture::Idle,
            mouse: MouseDrag::default(),
        }
    }

    pub fn touch(&self) -> TouchGesture {
        self.touch
    }

    pub fn mouse(&self) -> MouseDrag {
        self.mouse
    }

    /// Feed one event; the camera is only written from here.
    pub fn handle(&mut self, camera: &mut CameraState, event: &InputEvent) -> InputResponse {
        let before = *camera;
        let mut response = InputResponse::default();

        match event {
            InputEvent::PointerDown { x, y } => {
                self.mouse = MouseDrag { last: Some(DVec2::new(*x, *y)) };
            }
            InputEvent::PointerMove { x, y } => {
                self.mouse = self.mouse_move(self.mouse, DVec2::new(*x, *y), camera);
            }
            InputEvent::PointerUp => {
                self.mouse = MouseDrag::default();
            }
            InputEvent::TouchStart { touches } => {
                let next = self.touch_start(self.touch, touches, camera);
                self.set_touch(next);
            }
            InputEvent::TouchMove { touches } => {
                response.prevent_default = true;
                let next = self.touch_move(self.touch, touches, camera);
                self.set_touch(next);
            }
            InputEvent::TouchEnd { .. } => {
                self.set_touch(TouchGesture::Idle);
            }
        }

        response.camera_changed = *camera != before;
        if response.camera_changed {
            trace!(distance = camera.distance, yaw = camera.yaw, pitch = camera.pitch, "camera updated");
        }
        response
    }

    fn set_touch(&mut self, next: TouchGesture) {
        if std::mem::discriminant(&next) != std::mem::discriminant(&self.touch) {
            debug!(from = self.touch.name(), to = next.name(), "touch gesture");
        }
        self.touch = next;
    }

    fn rotate(&self, camera: &mut CameraState, last: DVec2, current: DVec2) {
        let d = current - last;
        camera.orbit(d.x, d.y, self.sensitivity);
    }

    fn mouse_move(&self, drag: MouseDrag, at: DVec2, camera: &mut CameraState) -> MouseDrag {
        match drag.last {
            Some(last) => {
                self.rotate(camera, last, at);
                MouseDrag { last: Some(at) }
            }
            None => drag,
        }
    }

    /// One contact starts a rotation, two start a pinch; any other count
    /// leaves the current gesture alone.
    fn touch_start(&self, state: TouchGesture, touches: &[DVec2], camera: &CameraState) -> TouchGesture {
        match touches {
            [p] => TouchGesture::Rotating { last: *p },
            [a, b] => {
                let spread = a.distance(*b);
                if spread >= self.min_pinch_spread {
                    TouchGesture::Pinching { start_spread: spread, start_distance: camera.distance }
                } else {
                    TouchGesture::PinchPending
                }
            }
            _ => state,
        }
    }

    fn touch_move(&self, state: TouchGesture, touches: &[DVec2], camera: &mut CameraState) -> TouchGesture {
        match (state, touches) {
            (TouchGesture::Rotating { last }, [p]) => {
                self.rotate(camera, last, *p);
                TouchGesture::Rotating { last: *p }
            }
            (TouchGesture::Pinching { start_spread, start_distance }, [a, b]) => {
                let spread = a.distance(*b);
                if !(spread >= self.min_pinch_spread) {
                    return state;
                }
                let wanted = start_distance * (start_spread / spread);
                let clamped = self.distance_limits.clamp(wanted);
                if clamped != wanted {
                    warn!(wanted, clamped, "pinch distance clamped");
                }
                camera.distance = clamped;
                state
            }
            (TouchGesture::PinchPending, [a, b]) => {
                let spread = a.distance(*b);
                if spread >= self.min_pinch_spread {
                    TouchGesture::Pinching { start_spread: spread, start_distance: camera.distance }
                } else {
                    state
                }
            }
            // Contact count does not match the gesture
            _ => state,
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn setup() -> (CameraController, CameraState) {
        (CameraController::default(), CameraState::default())
    }

    #[test]
    fn test_single_touch_rotates_vertical_axis() {
        let (mut ctl, mut cam) = setup();
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(100.0, 100.0)]));
        let r = ctl.handle(&mut cam, &InputEvent::touch_move(&[(110.0, 100.0)]));

        assert!(r.prevent_default);
        assert!(r.camera_changed);
        assert_abs_diff_eq!(cam.yaw, 0.3 + 0.05, epsilon = 1e-12);
        assert_eq!(cam.pitch, 0.4);
        assert_eq!(ctl.touch(), TouchGesture::Rotating { last: DVec2::new(110.0, 100.0) });
    }

    #[test]
    fn test_rotation_tracks_deltas() {
        let (mut ctl, mut cam) = setup();
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(0.0, 0.0)]));
        ctl.handle(&mut cam, &InputEvent::touch_move(&[(20.0, 10.0)]));
        ctl.handle(&mut cam, &InputEvent::touch_move(&[(30.0, 10.0)]));
        assert_abs_diff_eq!(cam.yaw, 0.3 + 30.0 * 0.005, epsilon = 1e-12);
        assert_abs_diff_eq!(cam.pitch, 0.4 + 10.0 * 0.005, epsilon = 1e-12);
    }

    #[test]
    fn test_pinch_scales_from_start() {
        let (mut ctl, mut cam) = setup();
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(0.0, 0.0), (100.0, 0.0)]));
        assert_eq!(
            ctl.touch(),
            TouchGesture::Pinching { start_spread: 100.0, start_distance: 900_000.0 }
        );

        ctl.handle(&mut cam, &InputEvent::touch_move(&[(0.0, 0.0), (150.0, 0.0)]));
        ctl.handle(&mut cam, &InputEvent::touch_move(&[(0.0, 0.0), (200.0, 0.0)]));
        assert_abs_diff_eq!(cam.distance, 450_000.0, epsilon = 1e-9);

        // Not cumulative: returning to the start spread restores the start distance
        ctl.handle(&mut cam, &InputEvent::touch_move(&[(0.0, 0.0), (0.0, 100.0)]));
        assert_abs_diff_eq!(cam.distance, 900_000.0, epsilon = 1e-9);
        assert_eq!((cam.yaw, cam.pitch), (0.3, 0.4));
    }

    #[test]
    fn test_mismatched_touch_count_is_ignored() {
        let (mut ctl, mut cam) = setup();
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(10.0, 10.0)]));
        let r = ctl.handle(&mut cam, &InputEvent::touch_move(&[(50.0, 50.0), (90.0, 90.0)]));
        assert!(r.prevent_default);
        assert!(!r.camera_changed);
        assert_eq!(cam, CameraState::default());

        ctl.handle(&mut cam, &InputEvent::touch_start(&[(0.0, 0.0), (100.0, 0.0)]));
        let r = ctl.handle(&mut cam, &InputEvent::touch_move(&[(40.0, 0.0)]));
        assert!(!r.camera_changed);
        assert_eq!(cam, CameraState::default());
    }

    #[test]
    fn test_touch_end_resets_without_stale_reference() {
        let (mut ctl, mut cam) = setup();
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(0.0, 0.0), (100.0, 0.0)]));
        ctl.handle(&mut cam, &InputEvent::touch_end(&[(0.0, 0.0)]));
        assert_eq!(ctl.touch(), TouchGesture::Idle);

        // Moves while idle do nothing
        ctl.handle(&mut cam, &InputEvent::touch_move(&[(500.0, 500.0)]));
        assert_eq!(cam, CameraState::default());

        ctl.handle(&mut cam, &InputEvent::touch_start(&[(300.0, 300.0)]));
        ctl.handle(&mut cam, &InputEvent::touch_move(&[(302.0, 296.0)]));
        assert_abs_diff_eq!(cam.yaw, 0.3 + 0.01, epsilon = 1e-12);
        assert_abs_diff_eq!(cam.pitch, 0.4 - 0.02, epsilon = 1e-12);
        assert_eq!(cam.distance, 900_000.0);
    }

    #[test]
    fn test_touch_start_with_three_contacts_keeps_gesture() {
        let (mut ctl, mut cam) = setup();
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(5.0, 5.0)]));
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]));
        assert_eq!(ctl.touch(), TouchGesture::Rotating { last: DVec2::new(5.0, 5.0) });
    }

    #[test]
    fn test_second_finger_switches_to_pinch() {
        let (mut ctl, mut cam) = setup();
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(0.0, 0.0)]));
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(0.0, 0.0), (0.0, 40.0)]));
        assert!(matches!(ctl.touch(), TouchGesture::Pinching { start_spread, .. } if start_spread == 40.0));
    }

    #[test]
    fn test_collapsed_pinch_is_ignored() {
        let (mut ctl, mut cam) = setup();
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(0.0, 0.0), (100.0, 0.0)]));
        let r = ctl.handle(&mut cam, &InputEvent::touch_move(&[(50.0, 50.0), (50.0, 50.0)]));
        assert!(!r.camera_changed);
        assert!(cam.distance.is_finite());
        assert_eq!(cam.distance, 900_000.0);
    }

    #[test]
    fn test_pinch_from_coincident_fingers_keeps_distance() {
        let (mut ctl, mut cam) = setup();
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(50.0, 50.0), (50.0, 50.0)]));
        assert_eq!(ctl.touch(), TouchGesture::PinchPending);

        // First measurable spread becomes the reference without rescaling
        let r = ctl.handle(&mut cam, &InputEvent::touch_move(&[(50.0, 50.0), (52.0, 50.0)]));
        assert!(!r.camera_changed);
        assert_eq!(cam.distance, 900_000.0);
        assert_eq!(
            ctl.touch(),
            TouchGesture::Pinching { start_spread: 2.0, start_distance: 900_000.0 }
        );

        ctl.handle(&mut cam, &InputEvent::touch_move(&[(50.0, 50.0), (54.0, 50.0)]));
        assert_abs_diff_eq!(cam.distance, 450_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pinch_is_clamped() {
        let (mut ctl, mut cam) = setup();
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(0.0, 0.0), (10.0, 0.0)]));
        ctl.handle(&mut cam, &InputEvent::touch_move(&[(0.0, 0.0), (5_000.0, 0.0)]));
        assert_eq!(cam.distance, ctl.distance_limits.min);

        ctl.handle(&mut cam, &InputEvent::touch_start(&[(0.0, 0.0), (100_000.0, 0.0)]));
        ctl.handle(&mut cam, &InputEvent::touch_move(&[(0.0, 0.0), (1.0, 0.0)]));
        assert_eq!(cam.distance, ctl.distance_limits.max);
    }

    #[test]
    fn test_inverted_limits_fall_back_to_defaults() {
        let config = ViewConfig {
            distance_limits: DistanceLimits { min: 5_000_000.0, max: 1.0 },
            ..ViewConfig::default()
        };
        let mut ctl = CameraController::new(&config);
        let mut cam = CameraState::default();
        assert_eq!(ctl.distance_limits, DistanceLimits::default());

        ctl.handle(&mut cam, &InputEvent::touch_start(&[(0.0, 0.0), (100.0, 0.0)]));
        ctl.handle(&mut cam, &InputEvent::touch_move(&[(0.0, 0.0), (200.0, 0.0)]));
        assert_abs_diff_eq!(cam.distance, 450_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mouse_drag() {
        let (mut ctl, mut cam) = setup();
        // Not dragging yet
        let r = ctl.handle(&mut cam, &InputEvent::pointer_move(50.0, 50.0));
        assert!(!r.camera_changed);

        ctl.handle(&mut cam, &InputEvent::pointer_down(100.0, 100.0));
        assert!(ctl.mouse().is_dragging());
        let r = ctl.handle(&mut cam, &InputEvent::pointer_move(110.0, 90.0));
        assert!(r.camera_changed);
        assert!(!r.prevent_default);
        assert_abs_diff_eq!(cam.yaw, 0.35, epsilon = 1e-12);
        assert_abs_diff_eq!(cam.pitch, 0.35, epsilon = 1e-12);

        ctl.handle(&mut cam, &InputEvent::PointerUp);
        assert!(!ctl.mouse().is_dragging());
        ctl.handle(&mut cam, &InputEvent::pointer_move(500.0, 500.0));
        assert_abs_diff_eq!(cam.yaw, 0.35, epsilon = 1e-12);
    }

    #[test]
    fn test_mouse_and_touch_are_independent() {
        let (mut ctl, mut cam) = setup();
        ctl.handle(&mut cam, &InputEvent::pointer_down(0.0, 0.0));
        ctl.handle(&mut cam, &InputEvent::touch_start(&[(0.0, 0.0)]));
        ctl.handle(&mut cam, &InputEvent::touch_end(&[]));
        assert!(ctl.mouse().is_dragging());

        ctl.handle(&mut cam, &InputEvent::PointerUp);
        assert_eq!(ctl.touch(), TouchGesture::Idle);
    }
}
