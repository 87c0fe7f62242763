//! A single ordered pile of cards.
//!
//! Index 0 is the bottom of the pile; the last card is the top. Piles are
//! backed by `im::Vector`, so cloning one (for an undo snapshot) shares
//! structure instead of copying cards.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{Card, CARDS_PER_SUIT};

/// Cards detached from a pile as a unit.
///
/// A valid tableau run is at most 13 cards, so runs stay on the stack.
pub type Run = SmallVec<[Card; CARDS_PER_SUIT]>;

/// Ordered sequence of cards, bottom first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pile from cards listed bottom first.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top (accessible) card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// Index of the top card.
    #[must_use]
    pub fn top_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    /// Card at `index` (0 = bottom).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Iterate cards bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Owned copy of the cards, bottom first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.iter().collect()
    }

    /// Cards from `start` to the top, or `None` if `start` is out of range.
    #[must_use]
    pub fn run_from(&self, start: usize) -> Option<Run> {
        if start >= self.cards.len() {
            return None;
        }
        Some(self.cards.iter().skip(start).copied().collect())
    }

    /// Index of the lowest card in the face-up suffix.
    ///
    /// Returns `None` if the pile is empty or its top card is face-down.
    #[must_use]
    pub fn face_up_start(&self) -> Option<usize> {
        let top = self.top_index()?;
        let mut start = None;
        for index in (0..=top).rev() {
            if !self.cards[index].is_face_up() {
                break;
            }
            start = Some(index);
        }
        start
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Detach every card from `start` to the top, preserving order.
    pub(crate) fn detach_from(&mut self, start: usize) -> Run {
        if start >= self.cards.len() {
            return Run::new();
        }
        let detached = self.cards.split_off(start);
        detached.into_iter().collect()
    }

    pub(crate) fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Replace a face-down top card with its face-up counterpart.
    ///
    /// Returns true if a card was turned over.
    pub(crate) fn flip_top_face_up(&mut self) -> bool {
        let Some(index) = self.top_index() else {
            return false;
        };
        let top = self.cards[index];
        if top.is_face_up() {
            return false;
        }
        self.cards.set(index, top.turned_up());
        true
    }
}
