//! Card Draft
//!
//! Raw text from the add/edit forms and its validation into `CardFields`.

use crate::card::{Card, CardFields, Heat};

/// Form input as typed by the user, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub action: String,
    pub time: String,
    pub heat: String,
    /// Comma separated
    pub ingredients: String,
}

/// Why a draft cannot become a card
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("请输入动作")]
    EmptyAction,
    #[error("请输入时间")]
    EmptyTime,
    #[error("时间必须是非负整数分钟: {0}")]
    InvalidTime(String),
    #[error("请选择火候")]
    EmptyHeat,
    #[error("未知火候: {0}")]
    InvalidHeat(String),
    #[error("请选择菜品")]
    NoIngredients,
}

impl CardDraft {
    /// Pre-fill an edit form from an existing card
    pub fn from_card(card: &Card) -> Self {
        Self {
            action: card.action.clone(),
            time: card.minutes.to_string(),
            heat: card.heat.label().to_string(),
            ingredients: card.ingredients.join(", "),
        }
    }

    pub fn validate(&self) -> Result<CardFields, ValidationError> {
        let action = self.action.trim();
        if action.is_empty() {
            return Err(ValidationError::EmptyAction);
        }

        let time = self.time.trim();
        if time.is_empty() {
            return Err(ValidationError::EmptyTime);
        }
        let minutes = time
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidTime(time.to_string()))?;

        let heat = self.heat.trim();
        if heat.is_empty() {
            return Err(ValidationError::EmptyHeat);
        }
        let heat = Heat::from_label(heat).ok_or_else(|| ValidationError::InvalidHeat(heat.to_string()))?;

        let ingredients = parse_ingredients(&self.ingredients);
        if ingredients.is_empty() {
            return Err(ValidationError::NoIngredients);
        }

        Ok(CardFields {
            action: action.to_string(),
            minutes,
            heat,
            ingredients,
        })
    }
}

/// Split on ASCII or full-width commas, trimming and dropping empty tokens
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split([',', '，'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(action: &str, time: &str, heat: &str, ingredients: &str) -> CardDraft {
        CardDraft {
            action: action.to_string(),
            time: time.to_string(),
            heat: heat.to_string(),
            ingredients: ingredients.to_string(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let fields = draft(" 爆炒 ", " 5 ", "高", "菜品1").validate().unwrap();
        assert_eq!(fields.action, "爆炒");
        assert_eq!(fields.minutes, 5);
        assert_eq!(fields.heat, Heat::High);
        assert_eq!(fields.ingredients, vec!["菜品1"]);
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(draft("", "5", "高", "菜品1").validate(), Err(ValidationError::EmptyAction));
        assert_eq!(draft("炒", "  ", "高", "菜品1").validate(), Err(ValidationError::EmptyTime));
        assert_eq!(draft("炒", "5", "", "菜品1").validate(), Err(ValidationError::EmptyHeat));
        assert_eq!(draft("炒", "5", "高", " , ").validate(), Err(ValidationError::NoIngredients));
    }

    #[test]
    fn test_non_numeric_time_rejected() {
        assert_eq!(
            draft("炒", "five", "高", "菜品1").validate(),
            Err(ValidationError::InvalidTime("five".to_string()))
        );
        assert_eq!(
            draft("炒", "-3", "高", "菜品1").validate(),
            Err(ValidationError::InvalidTime("-3".to_string()))
        );
        assert!(draft("炒", "2.5", "高", "菜品1").validate().is_err());
    }

    #[test]
    fn test_unknown_heat_rejected() {
        assert_eq!(
            draft("炒", "5", "猛火", "菜品1").validate(),
            Err(ValidationError::InvalidHeat("猛火".to_string()))
        );
    }

    #[test]
    fn test_parse_ingredients() {
        assert_eq!(parse_ingredients("菜品1, 菜品2"), vec!["菜品1", "菜品2"]);
        assert_eq!(parse_ingredients("菜品1，菜品3,,"), vec!["菜品1", "菜品3"]);
        assert!(parse_ingredients("").is_empty());
    }

    #[test]
    fn test_from_card_round_trips_through_validation() {
        let card = Card::new(draft("翻炒", "3", "中", "菜品2, 菜品4").validate().unwrap());
        let refilled = CardDraft::from_card(&card);
        assert_eq!(refilled.ingredients, "菜品2, 菜品4");
        assert_eq!(refilled.validate().unwrap(), card.fields());
    }
}
