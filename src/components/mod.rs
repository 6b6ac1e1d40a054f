//! UI Components
//!
//! Reusable Leptos components.

mod add_card_form;
mod card_form_fields;
mod card_lane;
mod card_view;
mod delete_confirm_button;
mod heat_selector;
mod log_panel;
mod modal;
mod recipe_panel;

pub use add_card_form::AddCardForm;
pub use card_lane::CardLane;
pub use card_view::CardView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use log_panel::LogPanel;
pub use modal::Modal;
pub use recipe_panel::RecipePanel;
