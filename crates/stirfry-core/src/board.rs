//! Board
//!
//! The two named card lists: the pool (动作库) and the timeline (炒菜时间轴).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::CardId;
use crate::list::CardList;

/// Which of the two lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListId {
    /// Reusable cards, arbitrary arrangement
    Pool,
    /// Final cooking sequence
    Timeline,
}

impl ListId {
    pub fn label(&self) -> &'static str {
        match self {
            ListId::Pool => "动作库",
            ListId::Timeline => "炒菜时间轴",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListId::Pool => "pool",
            ListId::Timeline => "timeline",
        }
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both lists. Card ids are unique across the whole board.
///
/// Lists are only reachable read-only from outside this crate, so every
/// mutation goes through `TimelineEditor` or `ListReconciler`:
///
/// ```compile_fail
/// use stirfry_core::{Board, CardList};
///
/// let mut board = Board::new();
/// board.timeline = CardList::new();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    pub(crate) pool: CardList,
    pub(crate) timeline: CardList,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self) -> &CardList {
        &self.pool
    }

    pub fn timeline(&self) -> &CardList {
        &self.timeline
    }

    pub fn list(&self, list: ListId) -> &CardList {
        match list {
            ListId::Pool => &self.pool,
            ListId::Timeline => &self.timeline,
        }
    }

    pub(crate) fn list_mut(&mut self, list: ListId) -> &mut CardList {
        match list {
            ListId::Pool => &mut self.pool,
            ListId::Timeline => &mut self.timeline,
        }
    }

    /// Which list currently holds this id
    pub fn locate(&self, id: CardId) -> Option<ListId> {
        [ListId::Pool, ListId::Timeline]
            .into_iter()
            .find(|list| self.list(*list).contains(id))
    }

    /// Derived on demand, never stored
    pub fn total_timeline_minutes(&self) -> u32 {
        self.timeline.total_minutes()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::card::{CardFields, Heat};
    use crate::reconciler::{DragEvent, DragLocation, ListReconciler};

    fn fields(action: &str) -> CardFields {
        CardFields {
            action: action.to_string(),
            minutes: 2,
            heat: Heat::Medium,
            ingredients: vec!["菜品1".to_string()],
        }
    }

    fn all_ids(board: &Board) -> Vec<CardId> {
        board.pool().iter().chain(board.timeline().iter()).map(|c| c.id).collect()
    }

    #[test]
    fn test_ids_unique_across_lists() {
        let mut board = Board::new();
        board.list_mut(ListId::Pool).add(crate::card::Card::new(fields("热油")));
        board.list_mut(ListId::Pool).add(crate::card::Card::new(fields("爆炒")));

        let reconciler = ListReconciler::default();
        for index in 0..3 {
            let event = DragEvent::new(
                DragLocation::new(ListId::Pool, index % 2),
                DragLocation::new(ListId::Timeline, index),
            );
            reconciler.apply(&mut board, &event);
        }

        let ids = all_ids(&board);
        assert_eq!(ids.len(), 5);
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        for id in ids {
            assert!(board.locate(id).is_some());
        }
    }

    #[test]
    fn test_read_accessors_match_lists() {
        let mut board = Board::new();
        board.list_mut(ListId::Timeline).add(crate::card::Card::new(fields("焖")));
        assert_eq!(board.timeline(), board.list(ListId::Timeline));
        assert_eq!(board.pool(), board.list(ListId::Pool));
        assert_eq!(board.total_timeline_minutes(), 2);
    }
}
