//! World (km) to screen (px) projection for the orbit camera.
//!
//! Two rotations, vertical axis first, then a divide by depth plus camera
//! distance. This is not a projection matrix: there is no field of view and
//! no near plane beyond `min_depth`.

use glam::{DVec2, DVec3};

use crate::model::CameraState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    /// Numerator of the perspective divide.
    pub k: f64,
    /// Smallest accepted `z' + distance`; anything at or below is unprojectable.
    pub min_depth: f64,
}

impl Projector {
    pub fn new(k: f64, min_depth: f64) -> Self {
        Self { k, min_depth }
    }

    /// Screen position of `point` seen from `camera` on a viewport centred at
    /// `center`, or `None` when the point sits at or behind the camera.
    pub fn project(&self, point: DVec3, camera: &CameraState, center: DVec2) -> Option<DVec2> {
        let r = rotate(point, camera);
        let depth = r.z + camera.distance;
        if !(depth > self.min_depth) {
            return None;
        }
        let scale = self.k / depth;
        Some(DVec2::new(center.x + r.x * scale, center.y - r.y * scale))
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self { k: 500.0, min_depth: 1.0 }
    }
}

/// Camera-space position of `p`: yaw in the X-Z plane, then pitch in the Y-Z
/// plane using the yawed Z.
pub fn rotate(p: DVec3, camera: &CameraState) -> DVec3 {
    let (sy, cy) = camera.yaw.sin_cos();
    let x = cy * p.x + sy * p.z;
    let z = -sy * p.x + cy * p.z;

    let (sp, cp) = camera.pitch.sin_cos();
    let y = cp * p.y - sp * z;
    let z = sp * p.y + cp * z;
    DVec3::new(x, y, z)
}
