//! WASM bridge for the mind map canvas.
//!
//! Compiled via `wasm-pack build --target web`. The page creates one
//! [`MindMapCanvas`] around the canvas's 2D context and forwards DOM events
//! to it; every handler repaints the canvas before returning.

mod export;
mod render2d;

use mm_core::{BulletList, Color};
use mm_editor::{EditStatus, Editor, EditorConfig, InputEvent};
use render2d::Canvas2dSurface;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, WheelEvent};

pub use export::EXPORT_FILENAME;

/// The main WASM-facing controller.
///
/// Owns the editor session (scene, selection, drag, zoom) and the bullet
/// list panel. All interaction from page JS goes through this struct.
#[wasm_bindgen]
pub struct MindMapCanvas {
    editor: Editor<Canvas2dSurface>,
    bullets: BulletList,
}

#[wasm_bindgen]
impl MindMapCanvas {
    /// Create a controller with the default 800×600 configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(ctx: CanvasRenderingContext2d) -> Result<MindMapCanvas, JsValue> {
        Self::build(ctx, EditorConfig::default())
    }

    /// Create a controller from a JSON config, e.g. `{"nudgeStep": 10}`.
    /// Missing fields keep their defaults.
    pub fn with_config(ctx: CanvasRenderingContext2d, config_json: &str) -> Result<MindMapCanvas, JsValue> {
        let config = EditorConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?;
        Self::build(ctx, config)
    }

    /// Update the canvas's screen offset (`getBoundingClientRect().left/top`).
    pub fn set_canvas_origin(&mut self, x: f64, y: f64) {
        self.editor.set_canvas_origin(x, y);
    }

    // ─── Toolbar actions ─────────────────────────────────────────────────
    //
    // Each returns the status name (e.g. "created", "noSelection").

    /// Add a node. `color` is the picker's hex value; empty or invalid
    /// input gets a random pastel fill.
    pub fn add_node(&mut self, text: &str, color: &str) -> String {
        self.editor
            .create_node(text, parse_color_input(color))
            .as_str()
            .to_string()
    }

    pub fn delete_selected_node(&mut self) -> String {
        self.editor.delete_selected_node().as_str().to_string()
    }

    pub fn rename_selected_node(&mut self, text: &str) -> String {
        self.editor.rename_selected(text).as_str().to_string()
    }

    pub fn clear(&mut self) -> String {
        self.editor.clear().as_str().to_string()
    }

    // ─── Pointer & keyboard ──────────────────────────────────────────────
    //
    // Coordinates are `clientX`/`clientY`. Each returns true if the canvas
    // was repainted.

    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(InputEvent::PointerDown { x, y })
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(InputEvent::PointerMove { x, y })
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(InputEvent::PointerUp { x, y })
    }

    /// Canvas `click`. The page should stop its propagation so the document
    /// listener only sees clicks outside the canvas.
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(InputEvent::Click { x, y })
    }

    /// Document-level `click` (outside the canvas).
    pub fn document_click(&mut self) -> bool {
        self.dispatch(InputEvent::ClickOutside)
    }

    /// Document-level `keydown`, with `KeyboardEvent.key`.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.dispatch(InputEvent::key(key))
    }

    /// Canvas `wheel`. Suppresses page scrolling and zooms.
    pub fn wheel(&mut self, event: &WheelEvent) -> bool {
        event.prevent_default();
        self.dispatch(InputEvent::Wheel {
            delta_y: event.delta_y(),
        })
    }

    /// Force a full repaint.
    pub fn render(&mut self) {
        self.editor.redraw();
    }

    // ─── State queries ───────────────────────────────────────────────────

    pub fn selected_id(&self) -> Option<f64> {
        self.editor.selection().map(|id| id.raw() as f64)
    }

    pub fn zoom(&self) -> f64 {
        self.editor.zoom()
    }

    pub fn node_count(&self) -> usize {
        self.editor.scene().len()
    }

    /// Current scene as JSON: `{"nodes":[...],"links":[...],"selection":id|null,"zoom":n}`.
    pub fn snapshot_json(&self) -> String {
        let snapshot = serde_json::json!({
            "nodes": self.editor.scene().nodes(),
            "links": self.editor.scene().links(),
            "selection": self.editor.selection(),
            "zoom": self.editor.zoom(),
        });
        snapshot.to_string()
    }

    // ─── Export ──────────────────────────────────────────────────────────

    /// Download the canvas as `mindmap.png`.
    pub fn save_as_image(&self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        export::download(canvas)
    }

    /// The canvas as a `data:image/png` URL.
    pub fn export_data_url(&self, canvas: &HtmlCanvasElement) -> Result<String, JsValue> {
        export::data_url(canvas)
    }

    // ─── Bullet list panel ───────────────────────────────────────────────

    pub fn add_bullet(&mut self, text: &str) -> bool {
        self.bullets.add(text)
    }

    pub fn select_bullet(&mut self, index: usize) -> bool {
        self.bullets.select(index)
    }

    pub fn delete_bullet(&mut self) -> bool {
        self.bullets.delete_selected().is_some()
    }

    /// `{"items":[...],"selected":index|null}`
    pub fn bullets_json(&self) -> String {
        serde_json::to_string(&self.bullets).unwrap_or_else(|_| r#"{"items":[],"selected":null}"#.into())
    }
}

impl MindMapCanvas {
    fn build(ctx: CanvasRenderingContext2d, config: EditorConfig) -> Result<MindMapCanvas, JsValue> {
        init_logging();
        let seed = random_seed();
        let editor = Editor::new(Canvas2dSurface::new(ctx), config, seed)
            .map_err(|e| JsValue::from_str(&e))?;
        log::info!("mind map canvas ready");
        Ok(Self {
            editor,
            bullets: BulletList::new(),
        })
    }

    fn dispatch(&mut self, event: InputEvent) -> bool {
        let status = self.editor.handle(&event);
        if !matches!(status, EditStatus::Applied | EditStatus::Created(_)) {
            log::trace!("{event:?} -> {}", status.as_str());
        }
        status.needs_redraw()
    }
}

/// Color picker value → fill. Empty or malformed input means "pick one".
fn parse_color_input(input: &str) -> Option<Color> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Color::from_hex(input)
}

fn random_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u64::MAX as f64) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

// ─── Logging & panic hook ────────────────────────────────────────────────

fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = console_log::init_with_level(log::Level::Debug);
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("mind map WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn color_input_parsing() {
        assert_eq!(parse_color_input(""), None);
        assert_eq!(parse_color_input("   "), None);
        assert_eq!(parse_color_input("not-a-color"), None);
        assert_eq!(
            parse_color_input("#ff0000"),
            Some(Color::rgba(1.0, 0.0, 0.0, 1.0))
        );
    }

    #[test]
    fn export_filename_is_fixed() {
        assert_eq!(EXPORT_FILENAME, "mindmap.png");
    }
}
