/// Orbit camera looking at the origin.
///
/// `yaw` turns the world around the vertical (Y) axis, `pitch` around the
/// horizontal (X) axis. `distance` is the depth offset added before the
/// perspective divide, in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub distance: f64,
    pub yaw: f64,
    pub pitch: f64,
}

impl CameraState {
    pub fn new(distance: f64, yaw: f64, pitch: f64) -> Self {
        Self { distance, yaw, pitch }
    }

    /// Apply a pointer drag of (dx, dy) pixels: horizontal travel turns around
    /// the vertical axis, vertical travel around the horizontal axis.
    pub fn orbit(&mut self, dx: f64, dy: f64, sensitivity: f64) {
        self.yaw += dx * sensitivity;
        self.pitch += dy * sensitivity;
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            distance: 900_000.0,
            yaw: 0.3,
            pitch: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_orbit_is_incremental() {
        let mut cam = CameraState::new(1.0, 0.0, 0.0);
        cam.orbit(10.0, 0.0, 0.005);
        cam.orbit(10.0, -4.0, 0.005);
        assert_abs_diff_eq!(cam.yaw, 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(cam.pitch, -0.02, epsilon = 1e-12);
        assert_eq!(cam.distance, 1.0);
    }
}
