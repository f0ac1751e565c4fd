/// Platform-agnostic input handling
use glam::DVec2;

/// Input events the viewer understands, in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    // Mouse
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,

    // Touch; `touches` lists every contact still on the surface
    TouchStart { touches: Vec<DVec2> },
    TouchMove { touches: Vec<DVec2> },
    TouchEnd { touches: Vec<DVec2> },
}

impl InputEvent {
    pub fn pointer_down(x: f64, y: f64) -> Self {
        InputEvent::PointerDown { x, y }
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        InputEvent::PointerMove { x, y }
    }

    pub fn touch_start(points: &[(f64, f64)]) -> Self {
        InputEvent::TouchStart { touches: to_points(points) }
    }

    pub fn touch_move(points: &[(f64, f64)]) -> Self {
        InputEvent::TouchMove { touches: to_points(points) }
    }

    pub fn touch_end(points: &[(f64, f64)]) -> Self {
        InputEvent::TouchEnd { touches: to_points(points) }
    }

    pub fn is_touch(&self) -> bool {
        matches!(
            self,
            InputEvent::TouchStart { .. } | InputEvent::TouchMove { .. } | InputEvent::TouchEnd { .. }
        )
    }
}

fn to_points(points: &[(f64, f64)]) -> Vec<DVec2> {
    points.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
}

/// What the host should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputResponse {
    /// Suppress the platform's default scroll/zoom for this event.
    pub prevent_default: bool,
    /// Camera moved; the frame is stale.
    pub camera_changed: bool,
}

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use super::*;
    use web_sys::{MouseEvent, TouchEvent};

    pub fn mouse_down_to_input(e: &MouseEvent) -> InputEvent {
        InputEvent::pointer_down(e.client_x() as f64, e.client_y() as f64)
    }

    pub fn mouse_move_to_input(e: &MouseEvent) -> InputEvent {
        InputEvent::pointer_move(e.client_x() as f64, e.client_y() as f64)
    }

    /// Active contacts of a touch event, in client coordinates.
    pub fn touch_points(e: &TouchEvent) -> Vec<DVec2> {
        let list = e.touches();
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|t| DVec2::new(t.client_x() as f64, t.client_y() as f64))
            .collect()
    }

    pub fn touch_start_to_input(e: &TouchEvent) -> InputEvent {
        InputEvent::TouchStart { touches: touch_points(e) }
    }

    pub fn touch_move_to_input(e: &TouchEvent) -> InputEvent {
        InputEvent::TouchMove { touches: touch_points(e) }
    }

    pub fn touch_end_to_input(e: &TouchEvent) -> InputEvent {
        InputEvent::TouchEnd { touches: touch_points(e) }
    }
}
