//! Screen ↔ model coordinate mapping.
//!
//! Nodes live in model space. Pointer input arrives in screen space and is
//! converted once with [`Viewport::to_model`]; the renderer converts once in
//! the other direction with [`Viewport::to_canvas`]. Zoom is never folded
//! into stored coordinates.

use kurbo::{Point, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Screen-space position of the canvas's top-left corner.
    pub origin: Vec2,
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin = Vec2::new(x, y);
    }

    /// Multiply the zoom level by `factor`. Successive calls compound.
    /// Returns false, leaving zoom untouched, for non-finite or
    /// non-positive factors and for products that would underflow to a
    /// subnormal or overflow to infinity.
    pub fn zoom_by(&mut self, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let zoom = self.zoom * factor;
        if !zoom.is_normal() {
            return false;
        }
        self.zoom = zoom;
        log::debug!("zoom level now {}", self.zoom);
        true
    }

    /// Screen point → model point.
    pub fn to_model(&self, screen: Point) -> Point {
        ((screen - self.origin).to_vec2() / self.zoom).to_point()
    }

    /// Model point → screen point. Inverse of [`Viewport::to_model`].
    pub fn to_screen(&self, model: Point) -> Point {
        self.to_canvas(model) + self.origin
    }

    /// Model point → canvas-local pixel position (no origin offset).
    pub fn to_canvas(&self, model: Point) -> Point {
        (model.to_vec2() * self.zoom).to_point()
    }

    /// Scale a model-space length to canvas pixels.
    pub fn scale(&self, len: f64) -> f64 {
        len * self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_model_divides_by_zoom_after_origin() {
        let mut vp = Viewport::new();
        vp.set_origin(20.0, 10.0);
        assert!(vp.zoom_by(2.0));
        assert_eq!(vp.to_model(Point::new(220.0, 110.0)), Point::new(100.0, 50.0));
    }

    #[test]
    fn screen_roundtrip() {
        let mut vp = Viewport::new();
        vp.set_origin(8.0, 16.0);
        vp.zoom_by(1.5);
        let p = Point::new(42.0, -7.0);
        let back = vp.to_model(vp.to_screen(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_compounds() {
        let mut vp = Viewport::new();
        vp.zoom_by(1.1);
        vp.zoom_by(0.9);
        assert!((vp.zoom() - 0.99).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_factors() {
        let mut vp = Viewport::new();
        assert!(!vp.zoom_by(0.0));
        assert!(!vp.zoom_by(-2.0));
        assert!(!vp.zoom_by(f64::NAN));
        assert!(!vp.zoom_by(f64::INFINITY));
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn zoom_stops_before_underflow() {
        let mut vp = Viewport::new();
        let mut steps = 0;
        while vp.zoom_by(0.5) {
            steps += 1;
            assert!(steps < 5000);
        }
        assert!(vp.zoom().is_normal());
        let p = vp.to_model(Point::new(10.0, 10.0));
        assert!(p.x.is_finite() && p.y.is_finite());

        // Zooming back in still works
        assert!(vp.zoom_by(2.0));
    }

    #[test]
    fn zoom_stops_before_overflow() {
        let mut vp = Viewport::new();
        while vp.zoom_by(1e10) {}
        assert!(vp.zoom().is_normal());
        assert!(vp.zoom_by(0.5));
    }
}
