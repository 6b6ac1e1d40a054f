//! List Reconciler
//!
//! Turns a finished drag into the next state of the pool and timeline.
//!
//! Four outcomes:
//! - no destination: cancelled, nothing changes
//! - within one list: reorder, identity preserved
//! - pool -> timeline: the card is copied under a new id, pool untouched
//! - timeline -> pool: rejected, cards leave the timeline only by delete
//!
//! Indices are a caller contract. An out-of-range index panics before
//! any list is touched.

use serde::{Deserialize, Serialize};

use crate::board::{Board, ListId};
use crate::card::CardId;

/// A position in one of the lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub list: ListId,
    pub index: usize,
}

impl DragLocation {
    pub fn new(list: ListId, index: usize) -> Self {
        Self { list, index }
    }
}

/// A completed drag gesture.
///
/// For same-list drags `destination.index` is the position in the list
/// after the source card has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub source: DragLocation,
    /// None when dropped outside any list
    pub destination: Option<DragLocation>,
}

impl DragEvent {
    pub fn new(source: DragLocation, destination: DragLocation) -> Self {
        Self { source, destination: Some(destination) }
    }

    pub fn cancelled(source: DragLocation) -> Self {
        Self { source, destination: None }
    }
}

/// What a cross-list drag does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferRule {
    /// Insert a duplicate with a fresh id, leave the source list alone
    Copy,
    /// Leave both lists unchanged
    Reject,
}

/// Cross-list rules, one per direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferPolicy {
    pub pool_to_timeline: TransferRule,
    pub timeline_to_pool: TransferRule,
}

impl TransferPolicy {
    /// Copy onto the timeline, reject from the timeline
    pub const COPY_ONTO_TIMELINE: Self = Self {
        pool_to_timeline: TransferRule::Copy,
        timeline_to_pool: TransferRule::Reject,
    };

    /// Rule for a drag between two different lists
    pub fn rule(&self, from: ListId, to: ListId) -> TransferRule {
        debug_assert_ne!(from, to, "transfer rule asked for a same-list drag");
        match from {
            ListId::Pool => self.pool_to_timeline,
            ListId::Timeline => self.timeline_to_pool,
        }
    }
}

impl Default for TransferPolicy {
    fn default() -> Self {
        Self::COPY_ONTO_TIMELINE
    }
}

/// Result of reconciling one drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Cancelled,
    Rejected { from: ListId, to: ListId },
    Copied { id: CardId, to: ListId, index: usize },
    Reordered { list: ListId, from: usize, to: usize },
}

impl DragOutcome {
    /// True if either list changed
    pub fn changed(&self) -> bool {
        match self {
            DragOutcome::Copied { .. } => true,
            DragOutcome::Reordered { from, to, .. } => from != to,
            DragOutcome::Cancelled | DragOutcome::Rejected { .. } => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListReconciler {
    policy: TransferPolicy,
}

impl ListReconciler {
    pub fn new(policy: TransferPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TransferPolicy {
        self.policy
    }

    /// Pure form: the next board and what happened. `board` is not touched.
    pub fn reconcile(&self, board: &Board, event: &DragEvent) -> (Board, DragOutcome) {
        let mut next = board.clone();
        let outcome = self.apply(&mut next, event);
        (next, outcome)
    }

    /// Apply a drag to `board` in place
    pub fn apply(&self, board: &mut Board, event: &DragEvent) -> DragOutcome {
        let Some(destination) = event.destination else {
            tracing::debug!(source = %event.source.list, index = event.source.index, "drag cancelled");
            return DragOutcome::Cancelled;
        };
        let source = event.source;

        let source_len = board.list(source.list).len();
        assert!(
            source.index < source_len,
            "drag source index {} out of bounds for {} list of length {}",
            source.index,
            source.list,
            source_len
        );

        if source.list == destination.list {
            let list = board.list_mut(source.list);
            assert!(
                destination.index < list.len(),
                "reorder destination index {} out of bounds for {} list of length {}",
                destination.index,
                source.list,
                list.len()
            );
            list.move_card(source.index, destination.index);
            tracing::debug!(list = %source.list, from = source.index, to = destination.index, "card reordered");
            return DragOutcome::Reordered {
                list: source.list,
                from: source.index,
                to: destination.index,
            };
        }

        match self.policy.rule(source.list, destination.list) {
            TransferRule::Reject => {
                tracing::warn!(from = %source.list, to = %destination.list, "transfer rejected");
                DragOutcome::Rejected {
                    from: source.list,
                    to: destination.list,
                }
            }
            TransferRule::Copy => {
                let target_len = board.list(destination.list).len();
                assert!(
                    destination.index <= target_len,
                    "copy destination index {} out of bounds for {} list of length {}",
                    destination.index,
                    destination.list,
                    target_len
                );
                let copy = board.list(source.list).as_slice()[source.index].duplicate();
                let id = copy.id;
                board.list_mut(destination.list).insert(destination.index, copy);
                tracing::debug!(%id, from = %source.list, to = %destination.list, index = destination.index, "card copied");
                DragOutcome::Copied {
                    id,
                    to: destination.list,
                    index: destination.index,
                }
            }
        }
    }
}

/// Reconcile with the default policy
pub fn reconcile(board: &Board, event: &DragEvent) -> (Board, DragOutcome) {
    ListReconciler::default().reconcile(board, event)
}
