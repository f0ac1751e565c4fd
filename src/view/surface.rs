use glam::DVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, for canvas fill/stroke styles.
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Immediate-mode 2D target the scene is drawn onto. Coordinates are pixels,
/// origin top-left, Y down.
pub trait DrawingSurface {
    /// Current (width, height) in pixels.
    fn size(&self) -> (f64, f64);

    /// Wipe the whole surface to a single colour.
    fn fill_background(&mut self, color: Color);

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Color);

    fn center(&self) -> DVec2 {
        let (w, h) = self.size();
        DVec2::new(w / 2.0, h / 2.0)
    }
}
