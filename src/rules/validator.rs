//! Move legality predicates.
//!
//! Pure, side-effect-free checks against a [`Piles`] layout. Out-of-range
//! pile indices are never legal destinations.

use crate::core::card::{Card, ACE, KING};
use crate::piles::Piles;

/// Can `card` go on a foundation whose top is `top`?
#[must_use]
pub fn can_stack_foundation(top: Option<Card>, card: Card) -> bool {
    match top {
        None => card.rank() == ACE,
        Some(top) => top.suit() == card.suit() && card.rank() == top.rank() + 1,
    }
}

/// Can `card` go on a tableau column whose top is `top`?
#[must_use]
pub fn can_stack_tableau(top: Option<Card>, card: Card) -> bool {
    match top {
        None => card.rank() == KING,
        Some(top) => {
            top.is_face_up() && top.is_red() != card.is_red() && card.rank() + 1 == top.rank()
        }
    }
}

/// May `card` be placed on foundation `foundation`?
///
/// True iff the foundation is empty and `card` is an Ace, or `card` is the
/// next rank of the top card's suit.
#[must_use]
pub fn can_place_on_foundation(piles: &Piles, card: Card, foundation: usize) -> bool {
    piles
        .foundation(foundation)
        .map_or(false, |pile| can_stack_foundation(pile.top(), card))
}

/// May `card` be placed on tableau column `column`?
///
/// True iff the column is empty and `card` is a King, or the column's top
/// is face-up, of the opposite color, and exactly one rank higher.
#[must_use]
pub fn can_place_on_tableau(piles: &Piles, card: Card, column: usize) -> bool {
    piles
        .tableau(column)
        .map_or(false, |pile| can_stack_tableau(pile.top(), card))
}

/// Can `cards` move together as a unit?
///
/// Every card must be face-up, and each adjacent pair must alternate color
/// with the rank dropping by exactly one. An empty run is not valid.
#[must_use]
pub fn is_valid_run(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return false;
    };
    first.is_face_up()
        && cards.windows(2).all(|pair| {
            let (upper, lower) = (pair[0], pair[1]);
            lower.is_face_up()
                && upper.is_red() != lower.is_red()
                && lower.rank() + 1 == upper.rank()
        })
}

/// Foundation that should receive `card` on an auto-move.
///
/// Prefers a foundation already building `card`'s suit; otherwise the first
/// foundation that accepts it (an empty one, for an Ace).
#[must_use]
pub fn find_foundation_index_for(piles: &Piles, card: Card) -> Option<usize> {
    let foundations = piles.foundations();

    foundations
        .iter()
        .position(|pile| {
            pile.top().map_or(false, |top| top.suit() == card.suit())
                && can_stack_foundation(pile.top(), card)
        })
        .or_else(|| {
            foundations
                .iter()
                .position(|pile| can_stack_foundation(pile.top(), card))
        })
}
