//! Core Entity Trait
//!
//! Basic contract for domain entities plus the crate-wide error type.

use crate::draft::ValidationError;
use crate::recipe::RecipeError;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("invalid card: {0}")]
    Validation(#[from] ValidationError),
    #[error("cannot export recipe: {0}")]
    Recipe(#[from] RecipeError),
}

impl DomainError {
    /// Message suitable for showing next to a form
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Validation(e) => e.to_string(),
            DomainError::Recipe(e) => e.to_string(),
        }
    }
}
