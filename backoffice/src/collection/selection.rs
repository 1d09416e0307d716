//! Multi-select state for bulk operations.
use std::collections::HashSet;
use std::hash::Hash;

/// Set of selected entity identifiers for one screen.
///
/// Selections survive page and filter changes; only an explicit toggle,
/// clear or removal of the underlying entity drops an id.
#[derive(Clone, Debug)]
pub struct SelectionSet<Id> {
    selected: HashSet<Id>,
}

impl<Id> Default for SelectionSet<Id> {
    fn default() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }
}

impl<Id: Clone + Eq + Hash> SelectionSet<Id> {
    pub fn toggle(&mut self, id: Id) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }
    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }
    /// Select-all over the currently rendered slice: if every visible id is
    /// already selected, clear the selection, otherwise the selection becomes
    /// exactly the visible slice.
    pub fn select_all_visible(&mut self, visible: &[Id]) {
        if !visible.is_empty() && visible.iter().all(|id| self.selected.contains(id)) {
            self.selected.clear();
        } else {
            self.selected = visible.iter().cloned().collect();
        }
    }
    pub fn retain<F: Fn(&Id) -> bool>(&mut self, keep: F) {
        self.selected.retain(|id| keep(id));
    }
    pub fn clear(&mut self) {
        self.selected.clear();
    }
    pub fn len(&self) -> usize {
        self.selected.len()
    }
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
    pub fn to_vec(&self) -> Vec<Id> {
        self.selected.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_the_identity() {
        let mut selection = SelectionSet::default();
        selection.toggle("x");
        assert!(selection.is_selected(&"x"));
        selection.toggle("x");
        assert!(!selection.is_selected(&"x"));
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_visible_toggles_between_all_and_none() {
        let mut selection = SelectionSet::default();
        selection.select_all_visible(&["x", "y"]);
        assert!(selection.is_selected(&"x"));
        assert!(selection.is_selected(&"y"));
        assert_eq!(selection.len(), 2);
        selection.select_all_visible(&["x", "y"]);
        assert!(selection.is_empty());
    }

    #[test]
    fn select_all_replaces_a_partial_selection() {
        let mut selection = SelectionSet::default();
        selection.toggle("x");
        selection.select_all_visible(&["x", "y", "z"]);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn select_all_over_an_empty_slice_selects_nothing() {
        let mut selection: SelectionSet<&str> = SelectionSet::default();
        selection.select_all_visible(&[]);
        assert!(selection.is_empty());
    }

    #[test]
    fn retain_drops_removed_ids_only() {
        let mut selection = SelectionSet::default();
        selection.select_all_visible(&["x", "y", "z"]);
        selection.retain(|id| *id != "y");
        assert!(selection.is_selected(&"x"));
        assert!(!selection.is_selected(&"y"));
        assert_eq!(selection.len(), 2);
    }
}
