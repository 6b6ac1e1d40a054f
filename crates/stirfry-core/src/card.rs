//! Card Entity
//!
//! An action card is one step of a stir-fry: what to do, for how many
//! minutes, at which heat, with which ingredients.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Ingredient choices offered by the card forms
pub const INGREDIENT_OPTIONS: &[&str] = &["菜品1", "菜品2", "菜品3", "菜品4"];

/// Card identifier (UUIDv7: millisecond timestamp followed by random bits).
///
/// Ids are process-unique and time-ordered. A copy dragged onto the
/// timeline always gets a fresh one.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(uuid::Uuid);

impl CardId {
    /// Create a new time-ordered ID
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// First 8 hex characters, for display only
    pub fn short(&self) -> String {
        self.0.as_simple().to_string()[..8].to_string()
    }

    /// Parse the standard hyphenated form or 32 hex chars
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardId({})", self.short())
    }
}

/// Heat level (火候)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heat {
    #[serde(rename = "低")]
    Low,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "高")]
    High,
}

impl Heat {
    /// All levels in display order
    pub const ALL: [Heat; 3] = [Heat::Low, Heat::Medium, Heat::High];

    pub fn label(&self) -> &'static str {
        match self {
            Heat::Low => "低",
            Heat::Medium => "中",
            Heat::High => "高",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|heat| heat.label() == s)
    }
}

impl fmt::Display for Heat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The cooking content of a card, everything except its identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFields {
    pub action: String,
    pub minutes: u32,
    pub heat: Heat,
    pub ingredients: Vec<String>,
}

/// An action card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique across pool and timeline
    pub id: CardId,
    /// Action text (动作), e.g. "爆炒"
    pub action: String,
    /// Duration in whole minutes
    pub minutes: u32,
    pub heat: Heat,
    pub ingredients: Vec<String>,
}

impl Card {
    /// Create a card with a freshly generated id
    pub fn new(fields: CardFields) -> Self {
        Self::with_id(CardId::new(), fields)
    }

    pub fn with_id(id: CardId, fields: CardFields) -> Self {
        let CardFields { action, minutes, heat, ingredients } = fields;
        Self { id, action, minutes, heat, ingredients }
    }

    /// Copy of this card under a new id
    pub fn duplicate(&self) -> Self {
        Self {
            id: CardId::new(),
            ..self.clone()
        }
    }

    /// Replace every field except the id
    pub fn apply(&mut self, fields: CardFields) {
        let CardFields { action, minutes, heat, ingredients } = fields;
        self.action = action;
        self.minutes = minutes;
        self.heat = heat;
        self.ingredients = ingredients;
    }

    pub fn fields(&self) -> CardFields {
        CardFields {
            action: self.action.clone(),
            minutes: self.minutes,
            heat: self.heat,
            ingredients: self.ingredients.clone(),
        }
    }

    /// Equal in every field except id
    pub fn same_content(&self, other: &Card) -> bool {
        self.action == other.action
            && self.minutes == other.minutes
            && self.heat == other.heat
            && self.ingredients == other.ingredients
    }
}

impl Entity for Card {
    type Id = CardId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stir_fry() -> CardFields {
        CardFields {
            action: "爆炒".to_string(),
            minutes: 5,
            heat: Heat::High,
            ingredients: vec!["菜品1".to_string()],
        }
    }

    #[test]
    fn test_card_creation() {
        let card = Card::new(stir_fry());
        assert_eq!(card.action, "爆炒");
        assert_eq!(card.minutes, 5);
        assert_eq!(card.heat, Heat::High);
        assert_eq!(card.id(), card.id);
    }

    #[test]
    fn test_duplicate_gets_new_id() {
        let card = Card::new(stir_fry());
        let copy = card.duplicate();
        assert_ne!(copy.id, card.id);
        assert!(copy.same_content(&card));
        assert_eq!(copy.fields(), card.fields());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut card = Card::new(stir_fry());
        let id = card.id;
        card.apply(CardFields {
            action: "焖".to_string(),
            minutes: 12,
            heat: Heat::Low,
            ingredients: vec!["菜品2".to_string(), "菜品3".to_string()],
        });
        assert_eq!(card.id, id);
        assert_eq!(card.action, "焖");
        assert_eq!(card.ingredients.len(), 2);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: Vec<CardId> = (0..1000).map(|_| CardId::new()).collect();
        let unique: std::collections::HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_id_parse_round_trip() {
        let id = CardId::new();
        assert_eq!(CardId::parse(&id.to_string()).unwrap(), id);
        assert_eq!(id.short().len(), 8);
    }

    #[test]
    fn test_heat_labels() {
        assert_eq!(Heat::from_label("高"), Some(Heat::High));
        assert_eq!(Heat::from_label("中"), Some(Heat::Medium));
        assert_eq!(Heat::from_label("大火"), None);
        assert_eq!(Heat::Low.to_string(), "低");
        assert_eq!(serde_json::to_string(&Heat::High).unwrap(), "\"高\"");
    }
}
