//! Hit testing: model point → node lookup.
//!
//! Walks the scene front-to-back (reverse insertion order) so the node drawn
//! on top is the one that is hit.

use mm_core::{NodeId, Point, Scene};

/// Find the topmost node containing the model-space point.
/// Returns `None` if the point is over empty canvas.
pub fn hit_test(scene: &Scene, point: Point) -> Option<NodeId> {
    scene
        .nodes()
        .iter()
        .rev()
        .find(|node| node.contains(point))
        .map(|node| node.id)
}

/// Every node containing the point, topmost first.
pub fn hit_test_all(scene: &Scene, point: Point) -> Vec<NodeId> {
    scene
        .nodes()
        .iter()
        .rev()
        .filter(|node| node.contains(point))
        .map(|node| node.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_core::Color;

    #[test]
    fn empty_scene_misses() {
        assert_eq!(hit_test(&Scene::new(), Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn topmost_overlapping_node_wins() {
        let mut scene = Scene::new();
        let a = scene.add_node("A", Point::new(0.0, 0.0), Color::WHITE).unwrap();
        let b = scene.add_node("B", Point::new(50.0, 20.0), Color::WHITE).unwrap();

        let overlap = Point::new(60.0, 30.0);
        assert_eq!(hit_test(&scene, overlap), Some(b));
        assert_eq!(hit_test_all(&scene, overlap), vec![b, a]);

        // Only A covers this corner
        assert_eq!(hit_test(&scene, Point::new(5.0, 5.0)), Some(a));
    }

    #[test]
    fn right_and_bottom_edges_are_outside() {
        let mut scene = Scene::new();
        scene.add_node("A", Point::new(0.0, 0.0), Color::WHITE).unwrap();
        assert_eq!(hit_test(&scene, Point::new(100.0, 10.0)), None);
        assert_eq!(hit_test(&scene, Point::new(10.0, 50.0)), None);
    }
}
