//! Undo/redo stacks of full-state snapshots.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::piles::Piles;

/// Complete game state captured before a mutation.
///
/// Cloning is cheap: piles share structure through `im::Vector`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Every pile's contents.
    pub piles: Piles,
    /// Move counter at capture time.
    pub moves: u32,
    /// Redeal counter at capture time.
    pub redeals: u32,
}

/// LIFO snapshot history with an optional size bound.
///
/// Recording a new snapshot invalidates the redo stack. When the bound is
/// reached the oldest snapshot is dropped.
#[derive(Clone, Debug, Default)]
pub struct UndoManager {
    history: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    limit: Option<usize>,
}

impl UndoManager {
    /// Create an unbounded manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager that keeps at most `limit` undo snapshots.
    ///
    /// Panics if `limit` is zero.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        assert!(limit > 0, "History limit must be at least 1");
        Self {
            history: VecDeque::with_capacity(limit),
            redo: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Push the state about to be mutated.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.redo.clear();
        self.push_history(snapshot);
    }

    /// Pop the most recent snapshot, parking `current` for redo.
    ///
    /// Returns `None` if there is nothing to undo; `current` is then dropped.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.history.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Pop the most recently undone state, parking `current` for undo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.push_history(current);
        Some(next)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undo snapshots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Drop all undo and redo snapshots.
    pub fn clear(&mut self) {
        self.history.clear();
        self.redo.clear();
    }

    fn push_history(&mut self, snapshot: Snapshot) {
        if let Some(limit) = self.limit {
            while self.history.len() >= limit {
                self.history.pop_front();
            }
        }
        self.history.push_back(snapshot);
    }
}
