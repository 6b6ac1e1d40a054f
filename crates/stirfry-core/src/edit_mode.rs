//! Edit Modes
//!
//! Tracks which cards are shown as edit forms. Kept apart from `Card`
//! so the cooking data carries no presentation state.

use std::collections::HashSet;

use crate::card::CardId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditModes {
    editing: HashSet<CardId>,
}

impl EditModes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self, id: CardId) -> bool {
        self.editing.contains(&id)
    }

    /// Flip the mode, returning the new state
    pub fn toggle(&mut self, id: CardId) -> bool {
        if self.editing.remove(&id) {
            false
        } else {
            self.editing.insert(id);
            true
        }
    }

    /// Back to display mode
    pub fn clear(&mut self, id: CardId) {
        self.editing.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.editing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut modes = EditModes::new();
        let id = CardId::new();
        assert!(!modes.is_editing(id));
        assert!(modes.toggle(id));
        assert!(modes.is_editing(id));
        assert!(!modes.toggle(id));
        assert!(modes.is_empty());
    }

    #[test]
    fn test_clear_from_any_state() {
        let mut modes = EditModes::new();
        let id = CardId::new();
        modes.clear(id);
        assert!(!modes.is_editing(id));
        modes.toggle(id);
        modes.clear(id);
        assert!(!modes.is_editing(id));
    }
}
