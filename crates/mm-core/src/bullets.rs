//! Free-text bullet annotations shown beside the canvas.
//!
//! A flat, ordered list of strings with one optional selected row. It has no
//! relation to the node graph.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct BulletList {
    items: Vec<String>,
    selected: Option<usize>,
}

impl BulletList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bullet. Empty text is ignored.
    pub fn add(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.items.push(text.to_string());
        true
    }

    /// Mark a row as selected. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Remove the selected row and clear the selection.
    pub fn delete_selected(&mut self) -> Option<String> {
        let index = self.selected.take()?;
        Some(self.items.remove(index))
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_select_delete() {
        let mut list = BulletList::new();
        assert!(list.add("first"));
        assert!(list.add("second"));
        assert!(!list.add(""));
        assert!(list.select(0));
        assert_eq!(list.delete_selected().as_deref(), Some("first"));
        assert_eq!(list.items(), ["second".to_string()]);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn delete_without_selection_is_noop() {
        let mut list = BulletList::new();
        list.add("only");
        assert_eq!(list.delete_selected(), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut list = BulletList::new();
        list.add("a");
        assert!(!list.select(3));
        assert_eq!(list.selected(), None);
    }
}
