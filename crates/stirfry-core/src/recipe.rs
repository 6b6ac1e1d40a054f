//! Recipe Export
//!
//! Snapshot of the timeline as a numbered list of cooking steps.

use serde::{Deserialize, Serialize};

use crate::card::Heat;
use crate::list::CardList;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeError {
    #[error("时间轴为空")]
    EmptyTimeline,
    #[error("serialization failed: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStep {
    /// 1-based
    pub order: usize,
    pub action: String,
    pub minutes: u32,
    pub heat: Heat,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub steps: Vec<RecipeStep>,
    pub total_minutes: u32,
}

impl Recipe {
    pub fn from_timeline(timeline: &CardList) -> Result<Self, RecipeError> {
        if timeline.is_empty() {
            return Err(RecipeError::EmptyTimeline);
        }
        let steps = timeline
            .iter()
            .enumerate()
            .map(|(i, card)| RecipeStep {
                order: i + 1,
                action: card.action.clone(),
                minutes: card.minutes,
                heat: card.heat,
                ingredients: card.ingredients.clone(),
            })
            .collect();
        Ok(Self {
            steps,
            total_minutes: timeline.total_minutes(),
        })
    }

    pub fn to_json(&self) -> Result<String, RecipeError> {
        serde_json::to_string_pretty(self).map_err(|e| RecipeError::Serialize(e.to_string()))
    }
}
