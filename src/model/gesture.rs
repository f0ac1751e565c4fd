use glam::DVec2;

/// Touch interaction in progress.
///
/// Each variant carries exactly the references its move handler needs, so a
/// pinch can never be read without its start spread and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TouchGesture {
    #[default]
    Idle,
    /// One finger down; `last` is the previous contact position.
    Rotating { last: DVec2 },
    /// Two fingers down; the camera distance is recomputed from these on every move.
    Pinching { start_spread: f64, start_distance: f64 },
    /// Two fingers down but too close together to measure a spread. The
    /// first move that separates them becomes the pinch reference.
    PinchPending,
}

impl TouchGesture {
    pub fn name(&self) -> &'static str {
        match self {
            TouchGesture::Idle => "idle",
            TouchGesture::Rotating { .. } => "rotating",
            TouchGesture::Pinching { .. } => "pinching",
            TouchGesture::PinchPending => "pinch-pending",
        }
    }
}

/// Mouse drag in progress. `None` while no button is held.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseDrag {
    pub last: Option<DVec2>,
}

impl MouseDrag {
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}
