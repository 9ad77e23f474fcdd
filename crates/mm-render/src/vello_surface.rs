//! Vello backend for [`DrawContext`].
//!
//! Builds the current path as a `kurbo::BezPath` and emits fills and strokes
//! into a `vello::Scene`. The caller presents the scene via wgpu.

use crate::paint::{DrawContext, RenderStyle, render_scene};
use kurbo::{Affine, BezPath, Stroke};
use mm_core::{NodeId, Point, Scene, Size, Viewport};
use peniko::Fill;
use vello::Scene as VelloScene;

pub struct VelloSurface<'a> {
    scene: &'a mut VelloScene,
    path: BezPath,
}

impl<'a> VelloSurface<'a> {
    pub fn new(scene: &'a mut VelloScene) -> Self {
        Self {
            scene,
            path: BezPath::new(),
        }
    }
}

/// Paint a full frame into a freshly reset Vello scene.
pub fn paint_scene(
    vello: &mut VelloScene,
    scene: &Scene,
    selection: Option<NodeId>,
    viewport: &Viewport,
    canvas: Size,
    style: &RenderStyle,
) {
    let mut surface = VelloSurface::new(vello);
    render_scene(&mut surface, scene, selection, viewport, canvas, style);
}

impl DrawContext for VelloSurface<'_> {
    fn clear(&mut self, _size: Size) {
        // Cleared pixels are transparent, like a fresh `<canvas>`
        self.scene.reset();
        self.path = BezPath::new();
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to(p);
    }

    fn line_to(&mut self, p: Point) {
        self.path.line_to(p);
    }

    fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.path.quad_to(ctrl, to);
    }

    fn close_path(&mut self) {
        self.path.close_path();
    }

    fn fill(&mut self, color: mm_core::Color) {
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            to_peniko(color),
            None,
            &self.path,
        );
    }

    fn stroke(&mut self, color: mm_core::Color, width: f64) {
        self.scene.stroke(
            &Stroke::new(width),
            Affine::IDENTITY,
            to_peniko(color),
            None,
            &self.path,
        );
    }

    fn fill_text_centered(&mut self, text: &str, center: Point, _color: mm_core::Color, _font: &str) {
        // Glyph runs need a font context; labels only appear on the Canvas2D surface for now.
        log::trace!("TEXT {text:?} at ({}, {})", center.x, center.y);
    }
}

fn to_peniko(c: mm_core::Color) -> peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    peniko::Color::from_rgba8(r, g, b, a)
}
