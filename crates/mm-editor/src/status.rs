//! Result of an editor operation.
//!
//! Nothing in the interaction core fails loudly. Invalid requests (no
//! selection, a hit-test miss, empty text) are absorbed and reported here so
//! hosts and tests can tell a no-op from a change.

use mm_core::NodeId;

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStatus {
    /// State changed; a redraw was issued.
    Applied,
    /// A node was created; a redraw was issued.
    Created(NodeId),
    /// Node text was empty, nothing created.
    EmptyText,
    /// The operation needs a selected node and there is none.
    NoSelection,
    /// The pointer was over empty canvas.
    Miss,
    /// Pointer moved or released without an active drag.
    NotDragging,
    /// The referenced node is not in the scene.
    UnknownNode,
    /// Zoom factor was not a positive finite number.
    InvalidZoom,
    /// The action exists at the boundary but has no behavior.
    Unsupported,
    /// The event has no binding (e.g. an unmapped key).
    Ignored,
}

impl EditStatus {
    pub fn needs_redraw(self) -> bool {
        matches!(self, EditStatus::Applied | EditStatus::Created(_))
    }

    pub fn created(self) -> Option<NodeId> {
        match self {
            EditStatus::Created(id) => Some(id),
            _ => None,
        }
    }

    /// Stable lowercase name, for hosts that forward status as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            EditStatus::Applied => "applied",
            EditStatus::Created(_) => "created",
            EditStatus::EmptyText => "emptyText",
            EditStatus::NoSelection => "noSelection",
            EditStatus::Miss => "miss",
            EditStatus::NotDragging => "notDragging",
            EditStatus::UnknownNode => "unknownNode",
            EditStatus::InvalidZoom => "invalidZoom",
            EditStatus::Unsupported => "unsupported",
            EditStatus::Ignored => "ignored",
        }
    }
}
