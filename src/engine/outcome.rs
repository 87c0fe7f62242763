//! Command outcomes.
//!
//! Commands never fail: an illegal or meaningless command leaves the state
//! unchanged. These values only tell the caller which transition happened.

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::interaction::Selection;
use crate::piles::PileId;

/// A move that was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Source pile.
    pub from: PileId,
    /// Destination pile.
    pub to: PileId,
    /// Number of cards moved (more than one only for tableau runs).
    pub count: usize,
}

/// Result of `draw()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawResult {
    /// A card moved from stock to waste (now face-up).
    Drew(Card),
    /// Stock was empty; the waste was turned back into the stock.
    Redealt { cards: usize },
    /// Stock and waste were both empty.
    Empty,
}

/// Result of a click or double-click command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Nothing happened.
    Ignored,
    /// A card or run is now selected.
    Selected(Selection),
    /// The selection was cleared without moving anything.
    Deselected,
    /// A move was applied.
    Moved(Move),
    /// A move was attempted and refused; the selection is cleared.
    Rejected,
}

impl ClickOutcome {
    /// True if the command changed the piles.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, ClickOutcome::Moved(_))
    }
}
