//! Timeline Editor
//!
//! The state behind the page: the board, which cards are being edited,
//! and the reconciler. Each method is one synchronous transition driven
//! by a UI callback (add, delete, edit, toggle edit, drag end).

use crate::board::{Board, ListId};
use crate::card::{Card, CardFields, CardId};
use crate::draft::CardDraft;
use crate::edit_mode::EditModes;
use crate::entity::DomainResult;
use crate::reconciler::{DragEvent, DragOutcome, ListReconciler};
use crate::recipe::Recipe;

#[derive(Debug, Clone, Default)]
pub struct TimelineEditor {
    board: Board,
    edit_modes: EditModes,
    reconciler: ListReconciler,
}

impl TimelineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reconciler(reconciler: ListReconciler) -> Self {
        Self {
            reconciler,
            ..Self::default()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cards(&self, list: ListId) -> &[Card] {
        self.board.list(list).as_slice()
    }

    pub fn is_editing(&self, id: CardId) -> bool {
        self.edit_modes.is_editing(id)
    }

    pub fn edit_modes(&self) -> &EditModes {
        &self.edit_modes
    }

    pub fn total_timeline_minutes(&self) -> u32 {
        self.board.total_timeline_minutes()
    }

    /// Append a new card to `list`
    pub fn add(&mut self, list: ListId, fields: CardFields) -> CardId {
        let id = self.board.list_mut(list).add(Card::new(fields));
        tracing::debug!(%id, %list, "card added");
        id
    }

    pub fn add_draft(&mut self, list: ListId, draft: &CardDraft) -> DomainResult<CardId> {
        let fields = draft.validate().inspect_err(|e| {
            tracing::warn!(%list, error = %e, "add rejected");
        })?;
        Ok(self.add(list, fields))
    }

    /// Remove a card from `list`. Unknown ids are a no-op.
    pub fn delete(&mut self, list: ListId, id: CardId) -> Option<Card> {
        let removed = self.board.list_mut(list).delete(id);
        if removed.is_some() {
            self.edit_modes.clear(id);
            tracing::debug!(%id, %list, "card deleted");
        }
        removed
    }

    /// Save new fields for a card. Always leaves the card in display mode.
    pub fn edit(&mut self, list: ListId, id: CardId, fields: CardFields) -> bool {
        self.edit_modes.clear(id);
        let found = self.board.list_mut(list).edit(id, fields);
        tracing::debug!(%id, %list, found, "card edited");
        found
    }

    pub fn edit_draft(&mut self, list: ListId, id: CardId, draft: &CardDraft) -> DomainResult<bool> {
        let fields = draft.validate().inspect_err(|e| {
            tracing::warn!(%id, %list, error = %e, "edit rejected");
        })?;
        Ok(self.edit(list, id, fields))
    }

    /// Switch a card between display and edit form. Returns the new mode,
    /// or None if `list` does not hold the card.
    pub fn toggle_edit(&mut self, list: ListId, id: CardId) -> Option<bool> {
        if !self.board.list(list).contains(id) {
            return None;
        }
        Some(self.edit_modes.toggle(id))
    }

    pub fn drag_end(&mut self, event: &DragEvent) -> DragOutcome {
        self.reconciler.apply(&mut self.board, event)
    }

    pub fn export_recipe(&self) -> DomainResult<Recipe> {
        Ok(Recipe::from_timeline(&self.board.timeline)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Heat;
    use crate::draft::ValidationError;
    use crate::entity::DomainError;
    use crate::reconciler::DragLocation;
    use crate::recipe::RecipeError;

    fn fields(action: &str, minutes: u32) -> CardFields {
        CardFields {
            action: action.to_string(),
            minutes,
            heat: Heat::High,
            ingredients: vec!["菜品1".to_string()],
        }
    }

    fn copy_to_timeline(editor: &mut TimelineEditor, from: usize, to: usize) -> CardId {
        let event = DragEvent::new(
            DragLocation::new(ListId::Pool, from),
            DragLocation::new(ListId::Timeline, to),
        );
        match editor.drag_end(&event) {
            DragOutcome::Copied { id, .. } => id,
            other => panic!("expected copy, got {:?}", other),
        }
    }

    #[test]
    fn test_add_draft_validates() {
        let mut editor = TimelineEditor::new();
        let bad = CardDraft {
            action: "爆炒".to_string(),
            time: "abc".to_string(),
            heat: "高".to_string(),
            ingredients: "菜品1".to_string(),
        };
        assert_eq!(
            editor.add_draft(ListId::Pool, &bad),
            Err(DomainError::Validation(ValidationError::InvalidTime("abc".to_string())))
        );
        assert!(editor.board().pool().is_empty());

        let good = CardDraft { time: "5".to_string(), ..bad };
        let id = editor.add_draft(ListId::Pool, &good).unwrap();
        assert_eq!(editor.board().locate(id), Some(ListId::Pool));
    }

    #[test]
    fn test_edit_always_clears_edit_mode() {
        let mut editor = TimelineEditor::new();
        let id = editor.add(ListId::Pool, fields("炒", 2));

        assert_eq!(editor.toggle_edit(ListId::Pool, id), Some(true));
        assert!(editor.edit(ListId::Pool, id, fields("爆炒", 3)));
        assert!(!editor.is_editing(id));

        assert!(editor.edit(ListId::Pool, id, fields("爆炒", 4)));
        assert!(!editor.is_editing(id));
        assert_eq!(editor.cards(ListId::Pool)[0].minutes, 4);
    }

    #[test]
    fn test_toggle_edit_checks_list() {
        let mut editor = TimelineEditor::new();
        let id = editor.add(ListId::Pool, fields("炒", 2));
        assert_eq!(editor.toggle_edit(ListId::Timeline, id), None);
        assert!(!editor.is_editing(id));
        assert_eq!(editor.toggle_edit(ListId::Pool, id), Some(true));
        assert_eq!(editor.toggle_edit(ListId::Pool, id), Some(false));
    }

    #[test]
    fn test_delete_idempotent_and_no_cascade() {
        let mut editor = TimelineEditor::new();
        let original = editor.add(ListId::Pool, fields("爆炒", 5));
        let copy = copy_to_timeline(&mut editor, 0, 0);

        assert!(editor.delete(ListId::Pool, original).is_some());
        assert!(editor.delete(ListId::Pool, original).is_none());
        assert!(editor.board().pool().is_empty());
        assert_eq!(editor.board().locate(copy), Some(ListId::Timeline));
        assert_eq!(editor.total_timeline_minutes(), 5);
    }

    #[test]
    fn test_delete_from_wrong_list_is_noop() {
        let mut editor = TimelineEditor::new();
        let id = editor.add(ListId::Pool, fields("炒", 2));
        assert!(editor.delete(ListId::Timeline, id).is_none());
        assert_eq!(editor.board().pool().len(), 1);
    }

    #[test]
    fn test_delete_forgets_edit_mode() {
        let mut editor = TimelineEditor::new();
        let id = editor.add(ListId::Timeline, fields("炒", 2));
        editor.toggle_edit(ListId::Timeline, id);
        editor.delete(ListId::Timeline, id);
        assert!(editor.edit_modes().is_empty());
    }

    #[test]
    fn test_copy_starts_in_display_mode() {
        let mut editor = TimelineEditor::new();
        let id = editor.add(ListId::Pool, fields("炒", 2));
        editor.toggle_edit(ListId::Pool, id);
        let copy = copy_to_timeline(&mut editor, 0, 0);
        assert!(editor.is_editing(id));
        assert!(!editor.is_editing(copy));
    }

    #[test]
    fn test_edit_copy_leaves_original() {
        let mut editor = TimelineEditor::new();
        editor.add(ListId::Pool, fields("炒", 2));
        let copy = copy_to_timeline(&mut editor, 0, 0);
        editor.edit(ListId::Timeline, copy, fields("焖", 10));
        assert_eq!(editor.cards(ListId::Pool)[0].action, "炒");
        assert_eq!(editor.cards(ListId::Timeline)[0].action, "焖");
        assert_eq!(editor.total_timeline_minutes(), 10);
    }

    #[test]
    fn test_export_recipe() {
        let mut editor = TimelineEditor::new();
        assert_eq!(
            editor.export_recipe(),
            Err(DomainError::Recipe(RecipeError::EmptyTimeline))
        );
        editor.add(ListId::Pool, fields("爆炒", 5));
        copy_to_timeline(&mut editor, 0, 0);
        copy_to_timeline(&mut editor, 0, 1);
        let recipe = editor.export_recipe().unwrap();
        assert_eq!(recipe.steps.len(), 2);
        assert_eq!(recipe.total_minutes, 10);
    }
}
