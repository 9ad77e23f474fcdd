//! Scene → drawing commands.
//!
//! The renderer is a pure function of (scene, selection, viewport). Every
//! frame starts by clearing the whole canvas, then paints links underneath
//! and nodes on top in insertion order. There is no retained state or
//! dirty tracking: callers redraw after each mutation.
//!
//! Output goes through [`DrawContext`], a minimal Canvas2D-shaped surface
//! implemented by the browser canvas, Vello, and [`crate::RecordingSurface`].

use mm_core::{Color, NODE_HEIGHT, NODE_WIDTH, NodeId, Point, Scene, Size, Viewport};

/// A 2D drawing surface with path fill/stroke and centered text.
///
/// Coordinates are canvas-local pixels.
pub trait DrawContext {
    /// Wipe the full canvas.
    fn clear(&mut self, size: Size);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn quad_to(&mut self, ctrl: Point, to: Point);
    fn close_path(&mut self);
    /// Fill the current path.
    fn fill(&mut self, color: Color);
    /// Stroke the current path.
    fn stroke(&mut self, color: Color, width: f64);
    /// Draw `text` centered horizontally and vertically on `center`.
    fn fill_text_centered(&mut self, text: &str, center: Point, color: Color, font: &str);
}

/// Visual constants for a frame.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Node corner radius in model units (scaled with zoom).
    pub corner_radius: f64,
    pub link_color: Color,
    pub link_width: f64,
    pub border_color: Color,
    pub border_width: f64,
    pub selected_border_color: Color,
    pub selected_border_width: f64,
    pub label_color: Color,
    /// CSS font shorthand for labels.
    pub font: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            corner_radius: 10.0,
            link_color: Color::rgba(0.6, 0.6, 0.6, 1.0),
            link_width: 2.0,
            border_color: Color::BLACK,
            border_width: 1.0,
            selected_border_color: Color::RED,
            selected_border_width: 3.0,
            label_color: Color::BLACK,
            font: "10px sans-serif".into(),
        }
    }
}

/// Paint one full frame.
pub fn render_scene<C: DrawContext + ?Sized>(
    ctx: &mut C,
    scene: &Scene,
    selection: Option<NodeId>,
    viewport: &Viewport,
    canvas: Size,
    style: &RenderStyle,
) {
    ctx.clear(canvas);

    // Links first so nodes cover their ends
    for link in scene.links() {
        let Some((source, target)) = scene.resolve_link(link) else {
            log::trace!("skipping dangling link {} -> {}", link.source, link.target);
            continue;
        };
        ctx.begin_path();
        ctx.move_to(viewport.to_canvas(source.center()));
        ctx.line_to(viewport.to_canvas(target.center()));
        ctx.stroke(style.link_color, style.link_width);
    }

    for node in scene.nodes() {
        let origin = viewport.to_canvas(node.position());
        draw_rounded_rect(
            ctx,
            origin.x,
            origin.y,
            viewport.scale(NODE_WIDTH),
            viewport.scale(NODE_HEIGHT),
            viewport.scale(style.corner_radius),
        );
        ctx.fill(node.color);

        if selection == Some(node.id) {
            ctx.stroke(style.selected_border_color, style.selected_border_width);
        } else {
            ctx.stroke(style.border_color, style.border_width);
        }

        ctx.fill_text_centered(
            &node.text,
            viewport.to_canvas(node.center()),
            style.label_color,
            &style.font,
        );
    }
}

/// Trace a closed rounded-rectangle path on `ctx`.
///
/// Leaves the path current so the caller can fill and stroke it. The radius
/// is clamped to half the shorter side.
pub fn draw_rounded_rect<C: DrawContext + ?Sized>(
    ctx: &mut C,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    radius: f64,
) {
    let r = radius.max(0.0).min(w / 2.0).min(h / 2.0);
    ctx.begin_path();
    ctx.move_to(Point::new(x + r, y));
    ctx.line_to(Point::new(x + w - r, y));
    ctx.quad_to(Point::new(x + w, y), Point::new(x + w, y + r));
    ctx.line_to(Point::new(x + w, y + h - r));
    ctx.quad_to(Point::new(x + w, y + h), Point::new(x + w - r, y + h));
    ctx.line_to(Point::new(x + r, y + h));
    ctx.quad_to(Point::new(x, y + h), Point::new(x, y + h - r));
    ctx.line_to(Point::new(x, y + r));
    ctx.quad_to(Point::new(x, y), Point::new(x + r, y));
    ctx.close_path();
}
