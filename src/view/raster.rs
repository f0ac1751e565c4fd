use std::path::Path;

use glam::DVec2;
use image::{ImageResult, Rgba, RgbaImage};

use super::surface::{Color, DrawingSurface};

/// CPU-side RGBA surface, used by the native renderer to write PNG frames.
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.image.width() || y >= self.image.height() {
            return None;
        }
        let Rgba([r, g, b, _]) = *self.image.get_pixel(x, y);
        Some(Color::rgb(r, g, b))
    }

    pub fn save_png(&self, path: &Path) -> ImageResult<()> {
        self.image.save_with_format(path, image::ImageFormat::Png)
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, rgba(color));
    }
}

fn rgba(c: Color) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, 255])
}

impl DrawingSurface for RasterSurface {
    fn size(&self) -> (f64, f64) {
        (self.image.width() as f64, self.image.height() as f64)
    }

    fn fill_background(&mut self, color: Color) {
        let px = rgba(color);
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    /// Fills every pixel whose centre lies inside the circle.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let (w, h) = self.size();
        let x0 = (center.x - radius).floor().max(0.0) as i64;
        let x1 = (center.x + radius).ceil().min(w) as i64;
        let y0 = (center.y - radius).floor().max(0.0) as i64;
        let y1 = (center.y + radius).ceil().min(h) as i64;
        let r2 = radius * radius;
        for y in y0..y1 {
            for x in x0..x1 {
                let d = DVec2::new(x as f64 + 0.5, y as f64 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// One-pixel DDA line, clipped to the frame first so far-off endpoints
    /// cost no more than a line across the image.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Color) {
        if !from.is_finite() || !to.is_finite() {
            return;
        }
        let (w, h) = self.size();
        let Some((from, to)) = clip_segment(from, to, DVec2::ZERO, DVec2::new(w, h)) else {
            return;
        };
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0);
        let step = delta / steps;
        let mut p = from;
        for _ in 0..=steps as i64 {
            self.put(p.x.floor() as i64, p.y.floor() as i64, color);
            p += step;
        }
    }
}

/// Liang-Barsky: the part of `from..to` inside the box `min..max`, or `None`
/// if the segment misses it.
fn clip_segment(from: DVec2, to: DVec2, min: DVec2, max: DVec2) -> Option<(DVec2, DVec2)> {
    let d = to - from;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    let edges = [
        (-d.x, from.x - min.x),
        (d.x, max.x - from.x),
        (-d.y, from.y - min.y),
        (d.y, max.y - from.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }
    Some((from + d * t0, from + d * t1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CameraState;
    use crate::view::SceneRenderer;
    use glam::DVec3;

    #[test]
    fn test_background_covers_everything() {
        let mut s = RasterSurface::new(4, 3);
        s.fill_background(Color::rgb(9, 8, 7));
        assert!(s.image().pixels().all(|p| *p == Rgba([9, 8, 7, 255])));
    }

    #[test]
    fn test_circle_is_clipped_and_bounded() {
        let mut s = RasterSurface::new(20, 20);
        s.fill_background(Color::BLACK);
        s.fill_circle(DVec2::new(0.0, 0.0), 5.0, Color::WHITE);
        assert_eq!(s.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(s.pixel(3, 3), Some(Color::WHITE));
        assert_eq!(s.pixel(5, 5), Some(Color::BLACK));
        assert_eq!(s.pixel(19, 19), Some(Color::BLACK));
    }

    #[test]
    fn test_line_hits_both_ends() {
        let mut s = RasterSurface::new(10, 10);
        s.fill_background(Color::BLACK);
        s.stroke_line(DVec2::new(1.5, 1.5), DVec2::new(8.5, 4.5), Color::WHITE);
        assert_eq!(s.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(s.pixel(8, 4), Some(Color::WHITE));
        assert_eq!(s.pixel(1, 8), Some(Color::BLACK));
    }

    #[test]
    fn test_long_line_is_clipped_not_dropped() {
        let mut s = RasterSurface::new(10, 10);
        s.fill_background(Color::BLACK);
        s.stroke_line(DVec2::new(5.5, 5.5), DVec2::new(1.0e7, 5.5), Color::WHITE);
        for x in 5..10 {
            assert_eq!(s.pixel(x, 5), Some(Color::WHITE), "x = {x}");
        }
        assert_eq!(s.pixel(4, 5), Some(Color::BLACK));

        let mut s = RasterSurface::new(10, 10);
        s.fill_background(Color::BLACK);
        s.stroke_line(DVec2::new(-1.0e7, 2.5), DVec2::new(1.0e7, 2.5), Color::WHITE);
        assert!((0..10).all(|x| s.pixel(x, 2) == Some(Color::WHITE)));
        assert_eq!(s.pixel(0, 3), Some(Color::BLACK));
    }

    #[test]
    fn test_line_outside_frame_draws_nothing() {
        let mut s = RasterSurface::new(10, 10);
        s.fill_background(Color::BLACK);
        s.stroke_line(DVec2::new(-1.0e9, -3.0), DVec2::new(1.0e9, -3.0), Color::WHITE);
        s.stroke_line(DVec2::new(20.0, 0.0), DVec2::new(30.0, 9.0), Color::WHITE);
        assert!(s.image().pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn test_rendered_scene_pixels() {
        let mut s = RasterSurface::new(800, 600);
        SceneRenderer::default().render_at(&mut s, &CameraState::default(), DVec3::new(384_400.0, 0.0, 0.0));
        assert_eq!(s.pixel(400, 305), Some(Color::BLUE));
        // Inside the moon disk, below the link line
        assert_eq!(s.pixel(631, 275), Some(Color::GREY));
        assert_eq!(s.pixel(5, 5), Some(Color::BLACK));
    }
}
