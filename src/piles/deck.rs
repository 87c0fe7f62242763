//! Deck construction, shuffling and the opening deal.

use rustc_hash::FxHashSet;

use super::layout::{Piles, FOUNDATION_COUNT, TABLEAU_COUNT};
use super::pile::Pile;
use crate::core::card::{Card, Suit, ACE, DECK_SIZE, KING};
use crate::core::rng::ShuffleSource;

/// Cards dealt to the tableau: 1 + 2 + ... + 7.
pub const TABLEAU_DEAL_SIZE: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;

/// A full 52-card deck in deal order.
///
/// The first 28 cards go to the tableau, the rest to the stock. Every card
/// is face-down until the deal turns the column tops over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck: suits in `Suit::ALL` order, Ace to King.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| (ACE..=KING).map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// Use a pre-arranged deck.
    ///
    /// Returns `None` unless `cards` is exactly the 52 distinct
    /// `(suit, rank)` pairs. Orientation is normalised to face-down.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Option<Self> {
        if !is_full_deck(cards.iter().copied()) {
            return None;
        }
        Some(Self {
            cards: cards.into_iter().map(Card::turned_down).collect(),
        })
    }

    /// A standard deck shuffled with `source`.
    pub fn shuffled<S: ShuffleSource + ?Sized>(source: &mut S) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(source);
        deck
    }

    /// Fisher–Yates: for i from last down to 1, swap with a uniform j in `0..=i`.
    pub fn shuffle<S: ShuffleSource + ?Sized>(&mut self, source: &mut S) {
        for i in (1..self.cards.len()).rev() {
            let j = source.index_up_to(i);
            self.cards.swap(i, j);
        }
    }

    /// Cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deal into the opening layout.
    ///
    /// Column `c` receives `c + 1` cards with only the last one face-up;
    /// the remaining 24 cards form the stock face-down in deal order, so the
    /// last card of the deck is the top of the stock.
    #[must_use]
    pub fn deal(self) -> Piles {
        let mut cards = self.cards.into_iter();
        let tableau: [Pile; TABLEAU_COUNT] = std::array::from_fn(|column| {
            Pile::from_cards((0..=column).filter_map(|row| {
                let card = cards.next()?;
                Some(if row == column { card.turned_up() } else { card })
            }))
        });
        let stock = Pile::from_cards(cards);
        let foundations: [Pile; FOUNDATION_COUNT] = Default::default();

        Piles::from_parts(stock, Pile::new(), foundations, tableau)
    }
}

/// True if `cards` are exactly the 52 distinct `(suit, rank)` pairs with
/// standard ranks.
pub(crate) fn is_full_deck(cards: impl IntoIterator<Item = Card>) -> bool {
    let mut seen = FxHashSet::default();
    for card in cards {
        if !card.has_standard_rank() || !seen.insert(card.identity()) {
            return false;
        }
    }
    seen.len() == DECK_SIZE
}
