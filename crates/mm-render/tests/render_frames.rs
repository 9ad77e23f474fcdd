//! Integration tests: full frames through the recording surface (mm-render).

use mm_core::{Color, Point, Scene, Size, Viewport};
use mm_render::{DrawOp, RecordingSurface, RenderStyle, hit_test, render_scene};
use pretty_assertions::assert_eq;

const CANVAS: Size = Size::new(800.0, 600.0);

fn frame(scene: &Scene, viewport: &Viewport) -> RecordingSurface {
    let mut rec = RecordingSurface::new();
    render_scene(&mut rec, scene, None, viewport, CANVAS, &RenderStyle::default());
    rec
}

#[test]
fn every_frame_starts_with_a_full_clear() {
    let rec = frame(&Scene::new(), &Viewport::new());
    assert_eq!(rec.ops, vec![DrawOp::Clear(CANVAS)]);
    assert_eq!(rec.frames(), 1);
}

#[test]
fn links_connect_node_centers_and_precede_nodes() {
    let mut scene = Scene::new();
    let a = scene.add_node("A", Point::new(0.0, 0.0), Color::WHITE).unwrap();
    let b = scene.add_node("B", Point::new(200.0, 100.0), Color::WHITE).unwrap();
    scene.add_link(a, b);

    let rec = frame(&scene, &Viewport::new());
    assert_eq!(
        rec.segments(),
        vec![(Point::new(50.0, 25.0), Point::new(250.0, 125.0))]
    );

    let first_fill = rec
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Fill(_)))
        .unwrap();
    let link_stroke = rec
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Stroke { .. }))
        .unwrap();
    assert!(link_stroke < first_fill);
}

#[test]
fn link_endpoints_follow_zoom() {
    let mut scene = Scene::new();
    let a = scene.add_node("A", Point::new(0.0, 0.0), Color::WHITE).unwrap();
    let b = scene.add_node("B", Point::new(100.0, 50.0), Color::WHITE).unwrap();
    scene.add_link(a, b);
    let mut vp = Viewport::new();
    vp.zoom_by(0.5);

    let rec = frame(&scene, &vp);
    assert_eq!(
        rec.segments(),
        vec![(Point::new(25.0, 12.5), Point::new(75.0, 37.5))]
    );
}

#[test]
fn deleted_node_and_its_dangling_link_are_skipped() {
    let mut scene = Scene::new();
    let a = scene.add_node("A", Point::new(0.0, 0.0), Color::WHITE).unwrap();
    let b = scene.add_node("B", Point::new(300.0, 0.0), Color::WHITE).unwrap();
    scene.add_link(a, b);

    scene.remove_node(a);
    let rec = frame(&scene, &Viewport::new());

    assert!(rec.segments().is_empty());
    let labels: Vec<String> = rec.texts().into_iter().map(|(t, _)| t).collect();
    assert_eq!(labels, vec!["B".to_string()]);
}

#[test]
fn nodes_paint_in_insertion_order_with_their_fill() {
    let mut scene = Scene::new();
    let red = Color::from_hex("#FF8080").unwrap();
    let blue = Color::from_hex("#8080FF").unwrap();
    scene.add_node("under", Point::new(0.0, 0.0), red).unwrap();
    scene.add_node("over", Point::new(20.0, 20.0), blue).unwrap();

    let rec = frame(&scene, &Viewport::new());
    let fills: Vec<Color> = rec
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Fill(c) => Some(*c),
            _ => None,
        })
        .collect();
    assert_eq!(fills, vec![red, blue]);

    // Drawn last, hit first
    let top = hit_test(&scene, Point::new(30.0, 30.0)).unwrap();
    assert_eq!(scene.get(top).unwrap().text, "over");
}
