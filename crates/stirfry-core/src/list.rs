//! Card List
//!
//! An ordered sequence of cards. Order is meaningful: arrangement in the
//! pool, cooking sequence in the timeline.

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardFields, CardId};
use crate::entity::Entity;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardList {
    cards: Vec<Card>,
}

impl CardList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn find(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    /// Append a card at the end
    pub fn add(&mut self, card: Card) -> CardId {
        let id = card.id;
        self.cards.push(card);
        id
    }

    /// Remove the card with this id. Unknown ids are a no-op.
    pub fn delete(&mut self, id: CardId) -> Option<Card> {
        let index = self.position(id)?;
        Some(self.cards.remove(index))
    }

    /// Replace the fields of the card with this id. Returns false if absent.
    pub fn edit(&mut self, id: CardId, fields: CardFields) -> bool {
        match self.cards.iter_mut().find(|card| card.id() == id) {
            Some(card) => {
                card.apply(fields);
                true
            }
            None => false,
        }
    }

    /// Sum of card durations in minutes
    pub fn total_minutes(&self) -> u32 {
        self.cards.iter().fold(0u32, |total, card| total.saturating_add(card.minutes))
    }

    /// Insert at `index`, shifting later cards right. `index == len` appends.
    pub(crate) fn insert(&mut self, index: usize, card: Card) {
        self.cards.insert(index, card);
    }

    /// Remove the card at `from` and reinsert it at `to`, where `to` indexes
    /// the list after removal.
    pub(crate) fn move_card(&mut self, from: usize, to: usize) {
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
    }
}

impl<'a> IntoIterator for &'a CardList {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
