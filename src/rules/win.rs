//! Win detection.

use crate::core::card::CARDS_PER_SUIT;
use crate::piles::Piles;

/// True when every foundation holds a complete suit.
#[must_use]
pub fn is_won(piles: &Piles) -> bool {
    piles
        .foundations()
        .iter()
        .all(|pile| pile.len() == CARDS_PER_SUIT)
}
