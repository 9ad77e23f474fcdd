//! The editor session: one owned object holding the scene, interaction
//! state, zoom, and the surface it draws on.
//!
//! Every public operation runs to completion and, if it changed anything,
//! repaints the surface before returning. Hosts never see a mutated scene
//! that has not been drawn.

use crate::config::EditorConfig;
use crate::input::InputEvent;
use crate::interaction::{DragState, Interaction};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::status::EditStatus;
use mm_core::{Color, NodeId, Point, Scene, Viewport};
use mm_render::{DrawContext, RenderStyle, render_scene};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

pub struct Editor<S: DrawContext> {
    scene: Scene,
    interaction: Interaction,
    viewport: Viewport,
    config: EditorConfig,
    style: RenderStyle,
    /// Drives random placement and random fill colors.
    rng: StdRng,
    surface: S,
}

impl<S: DrawContext> Editor<S> {
    /// Create an editor drawing onto `surface`. `seed` fixes the sequence of
    /// random placements and colors.
    ///
    /// # Errors
    /// Returns the validation message if `config` is out of range.
    pub fn new(surface: S, config: EditorConfig, seed: u64) -> Result<Self, String> {
        config.validate()?;
        let mut editor = Self {
            scene: Scene::new(),
            interaction: Interaction::new(),
            viewport: Viewport::new(),
            config,
            style: RenderStyle::default(),
            rng: StdRng::seed_from_u64(seed),
            surface,
        };
        editor.redraw();
        Ok(editor)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> Option<NodeId> {
        self.interaction.selection()
    }

    pub fn drag_state(&self) -> DragState {
        self.interaction.drag()
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Tell the editor where the canvas sits on screen.
    pub fn set_canvas_origin(&mut self, x: f64, y: f64) {
        self.viewport.set_origin(x, y);
    }

    // ─── Actions ─────────────────────────────────────────────────────────

    /// Add a node at a random spot that keeps its footprint on canvas.
    /// Without `color`, a random pastel hue is used.
    pub fn create_node(&mut self, text: &str, color: Option<Color>) -> EditStatus {
        if text.is_empty() {
            return EditStatus::EmptyText;
        }
        let (xs, ys) = self.config.placement_ranges();
        let x = sample(&mut self.rng, xs);
        let y = sample(&mut self.rng, ys);
        self.create_node_at(text, color, Point::new(x, y))
    }

    /// Add a node with its top-left corner at a chosen model position.
    pub fn create_node_at(&mut self, text: &str, color: Option<Color>, position: Point) -> EditStatus {
        let color = color.unwrap_or_else(|| Color::pastel(self.rng.random_range(0.0..360.0)));
        let status = match self.scene.add_node(text, position, color) {
            Some(id) => EditStatus::Created(id),
            None => EditStatus::EmptyText,
        };
        self.finish(status)
    }

    /// Remove the selected node and clear selection. Links touching it stay
    /// behind as dangling links.
    pub fn delete_selected_node(&mut self) -> EditStatus {
        let Some(id) = self.interaction.selection() else {
            return EditStatus::NoSelection;
        };
        self.interaction.forget(id);
        let status = match self.scene.remove_node(id) {
            Some(_) => EditStatus::Applied,
            None => EditStatus::UnknownNode,
        };
        self.finish(status)
    }

    /// Rename control hook. Node labels are fixed at creation, so this only
    /// reports that renaming is not available.
    pub fn rename_selected(&mut self, text: &str) -> EditStatus {
        log::debug!("rename to {text:?} requested; labels are immutable");
        EditStatus::Unsupported
    }

    /// Translate a node by a delta in model units.
    pub fn move_node(&mut self, id: NodeId, dx: f64, dy: f64) -> EditStatus {
        let status = if self.scene.move_node(id, dx, dy) {
            EditStatus::Applied
        } else {
            EditStatus::UnknownNode
        };
        self.finish(status)
    }

    /// Connect two nodes. No interaction creates links; this is for hosts
    /// and tests that build scenes directly.
    pub fn add_link(&mut self, source: NodeId, target: NodeId) -> EditStatus {
        if !self.scene.contains(source) || !self.scene.contains(target) {
            return EditStatus::UnknownNode;
        }
        self.scene.add_link(source, target);
        self.finish(EditStatus::Applied)
    }

    /// Remove all nodes and links and drop the selection.
    pub fn clear(&mut self) -> EditStatus {
        self.scene.clear();
        self.interaction.reset();
        log::debug!("scene cleared");
        self.finish(EditStatus::Applied)
    }

    /// Multiply the zoom level. Node coordinates are untouched.
    pub fn zoom_by(&mut self, factor: f64) -> EditStatus {
        let status = if self.viewport.zoom_by(factor) {
            EditStatus::Applied
        } else {
            EditStatus::InvalidZoom
        };
        self.finish(status)
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Feed one input event through the state machine.
    pub fn handle(&mut self, event: &InputEvent) -> EditStatus {
        let status = match event {
            InputEvent::PointerDown { x, y } => {
                let p = self.viewport.to_model(Point::new(*x, *y));
                self.interaction.pointer_down(&self.scene, p)
            }
            InputEvent::PointerMove { x, y } => {
                let p = self.viewport.to_model(Point::new(*x, *y));
                self.interaction.pointer_move(&mut self.scene, p)
            }
            InputEvent::PointerUp { .. } => self.interaction.pointer_up(),
            InputEvent::Click { x, y } => {
                let p = self.viewport.to_model(Point::new(*x, *y));
                self.interaction.click(&self.scene, p)
            }
            InputEvent::ClickOutside => self.interaction.click_outside(),
            InputEvent::Wheel { delta_y } => {
                let factor = if *delta_y > 0.0 {
                    self.config.zoom_out_factor
                } else {
                    self.config.zoom_in_factor
                };
                return self.zoom_by(factor);
            }
            InputEvent::Key { key } => match ShortcutMap::resolve(key) {
                Some(ShortcutAction::Nudge(dir)) => {
                    self.interaction
                        .nudge(&mut self.scene, dir, self.config.nudge_step)
                }
                None => EditStatus::Ignored,
            },
        };
        self.finish(status)
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Repaint the full canvas from current state.
    pub fn redraw(&mut self) {
        render_scene(
            &mut self.surface,
            &self.scene,
            self.interaction.selection(),
            &self.viewport,
            self.config.canvas_size(),
            &self.style,
        );
    }

    fn finish(&mut self, status: EditStatus) -> EditStatus {
        if status.needs_redraw() {
            self.redraw();
        }
        status
    }
}

/// Uniform sample from `range`, or its start when the range is empty.
fn sample(rng: &mut StdRng, range: Range<f64>) -> f64 {
    if range.is_empty() {
        range.start
    } else {
        rng.random_range(range)
    }
}
