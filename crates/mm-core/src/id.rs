//! Node identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a node in the scene.
///
/// Assigned monotonically by [`IdAllocator`]; a value is never handed out
/// twice within one session, even after the scene is cleared.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn from_raw(raw: u64) -> Self {
        NodeId(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh node ids. Lives inside the scene it numbers.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let mut alloc = IdAllocator::new();
        let a = alloc.next_id();
        let b = alloc.next_id();
        assert!(b > a);
        assert_eq!(alloc.next_id(), NodeId::from_raw(2));
    }

    #[test]
    fn display_uses_hash_prefix() {
        assert_eq!(NodeId::from_raw(7).to_string(), "#7");
    }
}
