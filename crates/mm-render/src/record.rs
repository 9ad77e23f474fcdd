//! Headless drawing surface that logs every call.
//!
//! Used to inspect frames without a browser or GPU.

use crate::paint::DrawContext;
use mm_core::{Color, Point, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Size),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    ClosePath,
    Fill(Color),
    Stroke { color: Color, width: f64 },
    Text { text: String, center: Point, color: Color },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Operations since the most recent clear.
    pub ops: Vec<DrawOp>,
    frames: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames started (calls to `clear`).
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Stroke color and width, in draw order.
    pub fn strokes(&self) -> Vec<(Color, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Stroke { color, width } => Some((*color, *width)),
                _ => None,
            })
            .collect()
    }

    /// Label text and center, in draw order.
    pub fn texts(&self) -> Vec<(String, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, center, .. } => Some((text.clone(), *center)),
                _ => None,
            })
            .collect()
    }

    /// Straight segments: a path made of exactly one move and one line,
    /// then stroked.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.ops
            .windows(4)
            .filter_map(|w| match w {
                [DrawOp::BeginPath, DrawOp::MoveTo(a), DrawOp::LineTo(b), DrawOp::Stroke { .. }] => {
                    Some((*a, *b))
                }
                _ => None,
            })
            .collect()
    }
}

impl DrawContext for RecordingSurface {
    fn clear(&mut self, size: Size) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear(size));
        self.frames += 1;
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.ops.push(DrawOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.ops.push(DrawOp::LineTo(p));
    }

    fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.ops.push(DrawOp::QuadTo(ctrl, to));
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn fill(&mut self, color: Color) {
        self.ops.push(DrawOp::Fill(color));
    }

    fn stroke(&mut self, color: Color, width: f64) {
        self.ops.push(DrawOp::Stroke { color, width });
    }

    fn fill_text_centered(&mut self, text: &str, center: Point, color: Color, _font: &str) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            center,
            color,
        });
    }
}
