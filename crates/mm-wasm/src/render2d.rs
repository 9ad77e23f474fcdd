//! Canvas2D surface.
//!
//! Forwards [`DrawContext`] calls to an HTML `<canvas>` through
//! `CanvasRenderingContext2d`.

use mm_core::{Color, Point, Size};
use mm_render::DrawContext;
use web_sys::CanvasRenderingContext2d;

pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawContext for Canvas2dSurface {
    fn clear(&mut self, size: Size) {
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.ctx.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.fill();
    }

    fn stroke(&mut self, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_hex());
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn fill_text_centered(&mut self, text: &str, center: Point, color: Color, font: &str) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(text, center.x, center.y);
    }
}
