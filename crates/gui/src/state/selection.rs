use shared::ObjectId;

/// Object selection state (supports multi-select)
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    /// Selected object IDs (in order of selection)
    selected: Vec<ObjectId>,
}

impl SelectionState {
    /// Primary (first) selected object
    pub fn primary(&self) -> Option<&ObjectId> {
        self.selected.first()
    }

    /// All selected objects
    pub fn all(&self) -> &[ObjectId] {
        &self.selected
    }

    /// Check if an object is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Select a single object (clears previous selection)
    pub fn select(&mut self, id: ObjectId) {
        self.selected.clear();
        self.selected.push(id);
    }

    /// Replace the selection, dropping duplicates but keeping order
    pub fn select_many(&mut self, ids: impl IntoIterator<Item = ObjectId>) {
        self.selected.clear();
        for id in ids {
            if !self.is_selected(&id) {
                self.selected.push(id);
            }
        }
    }

    /// Toggle selection (Ctrl+click behavior)
    pub fn toggle(&mut self, id: ObjectId) {
        if let Some(pos) = self.selected.iter().position(|s| s == &id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    /// Drop ids for which `exists` is false (after undo or removal)
    pub fn retain_existing(&mut self, exists: impl Fn(&str) -> bool) {
        self.selected.retain(|id| exists(id));
    }

    /// Clear all selection
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of selected objects
    pub fn count(&self) -> usize {
        self.selected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_empty() {
        let s = SelectionState::default();
        assert!(s.primary().is_none());
        assert!(s.all().is_empty());
        assert_eq!(s.count(), 0);
    }

    #[test]
    fn test_select_clears_previous() {
        let mut s = SelectionState::default();
        s.select("a".to_string());
        s.select("b".to_string());
        assert_eq!(s.count(), 1);
        assert!(!s.is_selected("a"));
        assert!(s.is_selected("b"));
    }

    #[test]
    fn test_toggle() {
        let mut s = SelectionState::default();
        s.select("a".to_string());
        s.toggle("b".to_string());
        assert_eq!(s.count(), 2);
        s.toggle("a".to_string());
        assert_eq!(s.all(), &["b".to_string()]);
    }

    #[test]
    fn test_select_many_dedup() {
        let mut s = SelectionState::default();
        s.select_many(["c", "a", "c", "b"].map(String::from));
        assert_eq!(s.all(), &["c".to_string(), "a".to_string(), "b".to_string()]);
        assert_eq!(s.primary(), Some(&"c".to_string()));
    }

    #[test]
    fn test_retain_existing() {
        let mut s = SelectionState::default();
        s.select_many(["a", "b"].map(String::from));
        s.retain_existing(|id| id == "b");
        assert_eq!(s.all(), &["b".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut s = SelectionState::default();
        s.select("a".to_string());
        s.toggle("b".to_string());
        s.clear();
        assert_eq!(s.count(), 0);
    }
}
