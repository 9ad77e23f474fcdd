//! Scene model for the mind map canvas.
//!
//! A scene is an ordered list of fixed-size labeled nodes plus an unordered
//! bag of links between them. Node order is z-order: the last node in the
//! list is drawn on top and wins hit tests. Links refer to nodes by id only
//! and are never cleaned up when an endpoint disappears; such links are
//! "dangling" and renderers skip them.

use crate::id::{IdAllocator, NodeId};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Width of every node, in model units.
pub const NODE_WIDTH: f64 = 100.0;
/// Height of every node, in model units.
pub const NODE_HEIGHT: f64 = 50.0;

/// Footprint of every node, in model units.
pub const NODE_SIZE: Size = Size::new(NODE_WIDTH, NODE_HEIGHT);

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn hex_pair(hi: u8, lo: u8) -> Option<f32> {
    Some((hex_val(hi)? << 4 | hex_val(lo)?) as f32 / 255.0)
}

fn hex_single(c: u8) -> Option<f32> {
    Some((hex_val(c)? * 17) as f32 / 255.0)
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let b = hex.as_bytes();
        match b.len() {
            3 => Some(Self::rgba(
                hex_single(b[0])?,
                hex_single(b[1])?,
                hex_single(b[2])?,
                1.0,
            )),
            4 => Some(Self::rgba(
                hex_single(b[0])?,
                hex_single(b[1])?,
                hex_single(b[2])?,
                hex_single(b[3])?,
            )),
            6 => Some(Self::rgba(
                hex_pair(b[0], b[1])?,
                hex_pair(b[2], b[3])?,
                hex_pair(b[4], b[5])?,
                1.0,
            )),
            8 => Some(Self::rgba(
                hex_pair(b[0], b[1])?,
                hex_pair(b[2], b[3])?,
                hex_pair(b[4], b[5])?,
                hex_pair(b[6], b[7])?,
            )),
            _ => None,
        }
    }

    /// Build a color from hue (degrees), saturation and lightness (0..=1).
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        Self::rgba(r + m, g + m, b + m, 1.0)
    }

    /// The pastel fill given to nodes created without an explicit color.
    pub fn pastel(hue: f32) -> Self {
        Self::from_hsl(hue, 1.0, 0.75)
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s}")))
    }
}

// ─── Nodes & links ───────────────────────────────────────────────────────

/// A labeled box on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Label, fixed at creation.
    pub text: String,
    /// Top-left corner in model space. Unbounded.
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

impl Node {
    pub fn new(id: NodeId, text: impl Into<String>, position: Point, color: Color) -> Self {
        Self {
            id,
            text: text.into(),
            x: position.x,
            y: position.y,
            color,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position(), NODE_SIZE)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + NODE_WIDTH / 2.0, self.y + NODE_HEIGHT / 2.0)
    }

    /// Half-open containment: `[x, x + w) × [y, y + h)`.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }
}

/// An anonymous edge between two node ids. Duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: NodeId,
    pub target: NodeId,
}

impl Link {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}

// ─── Scene ───────────────────────────────────────────────────────────────

/// The authoritative set of nodes and links.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    /// Nodes in insertion (= z) order.
    nodes: Vec<Node>,
    links: Vec<Link>,
    #[serde(skip)]
    ids: IdAllocator,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node on top of the z-order. Returns `None` (and changes
    /// nothing) when `text` is empty.
    pub fn add_node(&mut self, text: &str, position: Point, color: Color) -> Option<NodeId> {
        if text.is_empty() {
            return None;
        }
        let id = self.ids.next_id();
        self.nodes.push(Node::new(id, text, position, color));
        log::debug!("added node {id} {text:?} at ({}, {})", position.x, position.y);
        Some(id)
    }

    /// Remove a node. Links touching it are left in place and become dangling.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let pos = self.nodes.iter().position(|n| n.id == id)?;
        let removed = self.nodes.remove(pos);
        log::debug!("removed node {id}");
        Some(removed)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Translate a node by a delta. Returns false if the id is unknown.
    pub fn move_node(&mut self, id: NodeId, dx: f64, dy: f64) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.x += dx;
                node.y += dy;
                true
            }
            None => false,
        }
    }

    /// Place a node's top-left corner at an absolute model position.
    pub fn set_position(&mut self, id: NodeId, position: Point) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.x = position.x;
                node.y = position.y;
                true
            }
            None => false,
        }
    }

    /// Record a link. Endpoints are not validated; a link to an unknown id
    /// is simply dangling from the start.
    pub fn add_link(&mut self, source: NodeId, target: NodeId) {
        self.links.push(Link::new(source, target));
    }

    /// Both endpoints of a link, or `None` if either is gone.
    pub fn resolve_link(&self, link: &Link) -> Option<(&Node, &Node)> {
        Some((self.get(link.source)?, self.get(link.target)?))
    }

    pub fn is_dangling(&self, link: &Link) -> bool {
        self.resolve_link(link).is_none()
    }

    pub fn dangling_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|l| self.is_dangling(l))
    }

    /// Nodes in z-order (bottom first).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node and link. Ids keep counting up.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.links.clear();
    }
}
