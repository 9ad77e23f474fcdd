//! Selection and drag state machine.
//!
//! Two machine states, `Idle` and `Dragging`, plus an orthogonal selection
//! (`None` or one node id). All inputs here are already in model space.
//!
//! Selection is settled once per gesture: the pointer-down hit-tests and
//! remembers what it hit, and the click that closes the gesture reuses that
//! answer instead of hit-testing again. A click that arrives without a
//! preceding pointer-down (synthetic clicks) does its own single hit-test.

use crate::shortcuts::Direction;
use crate::status::EditStatus;
use mm_core::{NodeId, Point, Scene, Vec2};
use mm_render::hit_test;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        node: NodeId,
        /// `pointer - node.position`, captured at drag start in model space.
        offset: Vec2,
    },
}

/// What the pointer-down of the current gesture landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    target: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct Interaction {
    selection: Option<NodeId>,
    drag: DragState,
    press: Option<Press>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Hit-test under the pointer. On a hit, start dragging that node and
    /// select it. On a miss, selection is left for the click to settle.
    pub fn pointer_down(&mut self, scene: &Scene, point: Point) -> EditStatus {
        let target = hit_test(scene, point);
        self.press = Some(Press { target });

        let Some(id) = target else {
            return EditStatus::Miss;
        };
        let Some(node) = scene.get(id) else {
            return EditStatus::UnknownNode;
        };
        let offset = point - node.position();
        self.drag = DragState::Dragging { node: id, offset };
        self.selection = Some(id);
        log::debug!("drag start {id} offset ({}, {})", offset.x, offset.y);
        EditStatus::Applied
    }

    /// Place the dragged node at `point - offset`.
    pub fn pointer_move(&mut self, scene: &mut Scene, point: Point) -> EditStatus {
        let DragState::Dragging { node, offset } = self.drag else {
            return EditStatus::NotDragging;
        };
        if scene.set_position(node, point - offset) {
            log::trace!("drag {node} to ({}, {})", point.x - offset.x, point.y - offset.y);
            EditStatus::Applied
        } else {
            self.drag = DragState::Idle;
            EditStatus::UnknownNode
        }
    }

    /// Always returns to `Idle`.
    pub fn pointer_up(&mut self) -> EditStatus {
        match std::mem::take(&mut self.drag) {
            DragState::Dragging { node, .. } => {
                log::debug!("drag end {node}");
                EditStatus::Applied
            }
            DragState::Idle => EditStatus::NotDragging,
        }
    }

    /// Close the gesture: select what it landed on, or clear selection.
    pub fn click(&mut self, scene: &Scene, point: Point) -> EditStatus {
        let target = match self.press.take() {
            Some(press) => press.target,
            None => hit_test(scene, point),
        };
        // The pressed node may have been removed before the click resolved
        let target = target.filter(|id| scene.contains(*id));

        match target {
            Some(id) => {
                self.selection = Some(id);
                EditStatus::Applied
            }
            None => match self.selection.take() {
                Some(_) => EditStatus::Applied,
                None => EditStatus::Miss,
            },
        }
    }

    /// A click elsewhere on the page drops the selection. It also closes any
    /// gesture whose release landed off the canvas.
    pub fn click_outside(&mut self) -> EditStatus {
        self.press = None;
        match self.selection.take() {
            Some(_) => EditStatus::Applied,
            None => EditStatus::NoSelection,
        }
    }

    /// Move the selected node by `step` in `dir`.
    pub fn nudge(&mut self, scene: &mut Scene, dir: Direction, step: f64) -> EditStatus {
        let Some(id) = self.selection else {
            return EditStatus::NoSelection;
        };
        let delta = dir.unit() * step;
        if scene.move_node(id, delta.x, delta.y) {
            EditStatus::Applied
        } else {
            self.selection = None;
            EditStatus::UnknownNode
        }
    }

    /// Drop every reference to `id`. Call whenever a node leaves the scene.
    pub fn forget(&mut self, id: NodeId) {
        if self.selection == Some(id) {
            self.selection = None;
        }
        if matches!(self.drag, DragState::Dragging { node, .. } if node == id) {
            self.drag = DragState::Idle;
        }
        if let Some(press) = &mut self.press
            && press.target == Some(id)
        {
            press.target = None;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_core::Color;
    use pretty_assertions::assert_eq;

    fn scene_with_node_at(x: f64, y: f64) -> (Scene, NodeId) {
        let mut scene = Scene::new();
        let id = scene.add_node("N", Point::new(x, y), Color::WHITE).unwrap();
        (scene, id)
    }

    #[test]
    fn press_on_node_starts_drag_and_selects() {
        let (scene, id) = scene_with_node_at(10.0, 10.0);
        let mut ix = Interaction::new();

        assert_eq!(ix.pointer_down(&scene, Point::new(30.0, 25.0)), EditStatus::Applied);
        assert_eq!(ix.selection(), Some(id));
        assert_eq!(
            ix.drag(),
            DragState::Dragging {
                node: id,
                offset: Vec2::new(20.0, 15.0)
            }
        );
    }

    #[test]
    fn press_on_empty_canvas_keeps_selection() {
        let (scene, id) = scene_with_node_at(10.0, 10.0);
        let mut ix = Interaction::new();
        let _ = ix.pointer_down(&scene, Point::new(20.0, 20.0));
        let _ = ix.pointer_up();

        assert_eq!(ix.pointer_down(&scene, Point::new(500.0, 500.0)), EditStatus::Miss);
        assert_eq!(ix.selection(), Some(id));
        assert!(!ix.is_dragging());
    }

    #[test]
    fn move_places_node_at_pointer_minus_offset() {
        let (mut scene, id) = scene_with_node_at(10.0, 10.0);
        let mut ix = Interaction::new();
        let _ = ix.pointer_down(&scene, Point::new(30.0, 25.0));

        assert_eq!(
            ix.pointer_move(&mut scene, Point::new(200.0, 100.0)),
            EditStatus::Applied
        );
        assert_eq!(scene.get(id).unwrap().position(), Point::new(180.0, 85.0));
    }

    #[test]
    fn move_without_drag_is_noop() {
        let (mut scene, id) = scene_with_node_at(10.0, 10.0);
        let mut ix = Interaction::new();
        assert_eq!(
            ix.pointer_move(&mut scene, Point::new(200.0, 100.0)),
            EditStatus::NotDragging
        );
        assert_eq!(scene.get(id).unwrap().position(), Point::new(10.0, 10.0));
    }

    #[test]
    fn pointer_up_is_idempotent() {
        let (scene, _) = scene_with_node_at(10.0, 10.0);
        let mut ix = Interaction::new();
        let _ = ix.pointer_down(&scene, Point::new(20.0, 20.0));
        assert_eq!(ix.pointer_up(), EditStatus::Applied);
        assert_eq!(ix.pointer_up(), EditStatus::NotDragging);
        assert_eq!(ix.drag(), DragState::Idle);
    }

    #[test]
    fn click_reuses_the_press_target() {
        let (mut scene, id) = scene_with_node_at(10.0, 10.0);
        let mut ix = Interaction::new();
        let _ = ix.pointer_down(&scene, Point::new(20.0, 20.0));
        let _ = ix.pointer_move(&mut scene, Point::new(400.0, 400.0));
        let _ = ix.pointer_up();

        // The click point is far from the node's original box, but the
        // gesture already resolved to it.
        assert_eq!(ix.click(&scene, Point::new(400.0, 400.0)), EditStatus::Applied);
        assert_eq!(ix.selection(), Some(id));
    }

    #[test]
    fn click_on_empty_canvas_clears_selection() {
        let (scene, _) = scene_with_node_at(10.0, 10.0);
        let mut ix = Interaction::new();
        let _ = ix.pointer_down(&scene, Point::new(20.0, 20.0));
        let _ = ix.pointer_up();
        let _ = ix.click(&scene, Point::new(20.0, 20.0));

        let _ = ix.pointer_down(&scene, Point::new(700.0, 500.0));
        let _ = ix.pointer_up();
        assert_eq!(ix.click(&scene, Point::new(700.0, 500.0)), EditStatus::Applied);
        assert_eq!(ix.selection(), None);

        // Nothing left to clear
        assert_eq!(ix.click(&scene, Point::new(700.0, 500.0)), EditStatus::Miss);
    }

    #[test]
    fn synthetic_click_hit_tests_once() {
        let (scene, id) = scene_with_node_at(10.0, 10.0);
        let mut ix = Interaction::new();
        assert_eq!(ix.click(&scene, Point::new(15.0, 15.0)), EditStatus::Applied);
        assert_eq!(ix.selection(), Some(id));
    }

    #[test]
    fn click_outside_clears_selection() {
        let (scene, _) = scene_with_node_at(10.0, 10.0);
        let mut ix = Interaction::new();
        assert_eq!(ix.click_outside(), EditStatus::NoSelection);
        let _ = ix.click(&scene, Point::new(15.0, 15.0));
        assert_eq!(ix.click_outside(), EditStatus::Applied);
        assert_eq!(ix.selection(), None);
    }

    #[test]
    fn click_outside_ends_the_pending_gesture() {
        let (scene, id) = scene_with_node_at(10.0, 10.0);
        let mut ix = Interaction::new();
        let _ = ix.pointer_down(&scene, Point::new(20.0, 20.0));
        let _ = ix.pointer_up();
        assert_eq!(ix.selection(), Some(id));

        assert_eq!(ix.click_outside(), EditStatus::Applied);
        assert_eq!(ix.click(&scene, Point::new(700.0, 500.0)), EditStatus::Miss);
        assert_eq!(ix.selection(), None);
    }

    #[test]
    fn nudge_requires_selection() {
        let (mut scene, id) = scene_with_node_at(10.0, 10.0);
        let mut ix = Interaction::new();
        assert_eq!(
            ix.nudge(&mut scene, Direction::Left, 5.0),
            EditStatus::NoSelection
        );
        let _ = ix.click(&scene, Point::new(15.0, 15.0));
        assert_eq!(ix.nudge(&mut scene, Direction::Left, 5.0), EditStatus::Applied);
        assert_eq!(scene.get(id).unwrap().position(), Point::new(5.0, 10.0));
    }

    #[test]
    fn forget_clears_every_reference() {
        let (scene, id) = scene_with_node_at(10.0, 10.0);
        let mut ix = Interaction::new();
        let _ = ix.pointer_down(&scene, Point::new(20.0, 20.0));
        ix.forget(id);
        assert_eq!(ix.selection(), None);
        assert_eq!(ix.drag(), DragState::Idle);
        assert_eq!(ix.click(&scene, Point::new(20.0, 20.0)), EditStatus::Miss);
    }
}
