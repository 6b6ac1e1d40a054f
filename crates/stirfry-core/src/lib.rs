//! Stir-Fry Timeline Core
//!
//! Pure domain layer behind the timeline UI:
//! - card / draft: action cards, their ids and form validation
//! - list / board: the pool and timeline lists with per-list CRUD
//! - reconciler: dual-list drag-and-drop reconciliation
//! - editor: the callback surface the presentation layer drives
//! - recipe: export of the finished timeline
//!
//! This crate has NO browser dependencies and is tested natively.

mod entity;
mod card;
mod draft;
mod list;
mod board;
mod edit_mode;
mod reconciler;
mod editor;
mod recipe;

pub use entity::{Entity, DomainError, DomainResult};
pub use card::{Card, CardFields, CardId, Heat, INGREDIENT_OPTIONS};
pub use draft::{CardDraft, ValidationError, parse_ingredients};
pub use list::CardList;
pub use board::{Board, ListId};
pub use edit_mode::EditModes;
pub use reconciler::{
    reconcile, DragEvent, DragLocation, DragOutcome, ListReconciler, TransferPolicy, TransferRule,
};
pub use editor::TimelineEditor;
pub use recipe::{Recipe, RecipeError, RecipeStep};
