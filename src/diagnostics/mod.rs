//! Move-attempt diagnostics.
//!
//! A non-authoritative side channel: every attempted move (legal or not)
//! is reported to observers. Nothing in the rules depends on it, and it is
//! not part of undo snapshots.
//!
//! ```
//! use klondike_engine::{EngineConfig, Klondike};
//!
//! let mut game = Klondike::new(EngineConfig::default().with_seed(3));
//! game.double_click_waste();
//! // Nothing on the waste yet, so nothing was attempted
//! assert!(game.move_log().is_empty());
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::core::card::Card;
use crate::piles::PileId;

/// One attempted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveAttempt {
    /// The moving card (the first card of a run).
    pub card: Card,
    /// Source pile.
    pub from: PileId,
    /// Destination pile.
    pub to: PileId,
    /// Destination's top card before the attempt, `None` if empty.
    pub target_top: Option<Card>,
    /// Whether the move was legal (and therefore applied).
    pub legal: bool,
}

impl fmt::Display for MoveAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {} onto ", self.card, self.from, self.to)?;
        match self.target_top {
            Some(top) => write!(f, "{}", top)?,
            None => write!(f, "empty")?,
        }
        write!(f, ": {}", if self.legal { "legal" } else { "illegal" })
    }
}

/// Receives move attempts as they happen.
pub trait MoveObserver {
    fn on_move_attempt(&mut self, attempt: &MoveAttempt);
}

/// Shared observers stay readable by their owner after registration.
impl<T: MoveObserver + ?Sized> MoveObserver for Rc<RefCell<T>> {
    fn on_move_attempt(&mut self, attempt: &MoveAttempt) {
        self.borrow_mut().on_move_attempt(attempt);
    }
}

/// Built-in recorder of move attempts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    attempts: Vector<MoveAttempt>,
}

impl MoveLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, attempt: MoveAttempt) {
        self.attempts.push_back(attempt);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    /// Most recent attempt.
    #[must_use]
    pub fn last(&self) -> Option<&MoveAttempt> {
        self.attempts.back()
    }

    /// Attempts in the order they happened.
    pub fn iter(&self) -> impl Iterator<Item = &MoveAttempt> {
        self.attempts.iter()
    }

    /// Number of attempts that were legal.
    #[must_use]
    pub fn legal_count(&self) -> usize {
        self.attempts.iter().filter(|a| a.legal).count()
    }

    /// Number of attempts that were rejected.
    #[must_use]
    pub fn illegal_count(&self) -> usize {
        self.len() - self.legal_count()
    }

    pub fn clear(&mut self) {
        self.attempts.clear();
    }
}

impl MoveObserver for MoveLog {
    fn on_move_attempt(&mut self, attempt: &MoveAttempt) {
        self.record(*attempt);
    }
}
