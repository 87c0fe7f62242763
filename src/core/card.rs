//! Card values: suits, ranks and the face-up flag.
//!
//! Cards are small `Copy` values. Turning a card over never mutates it in
//! place; `turned_up()` / `turned_down()` return a new value that replaces
//! the old one in its pile slot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;

/// Cards per suit (Ace through King).
pub const CARDS_PER_SUIT: usize = 13;

/// Cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Hearts and Diamonds are red; Clubs and Spades are black.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
            Suit::Spades => '\u{2660}',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Short label for a rank: "A", "2".."10", "J", "Q", "K".
#[must_use]
pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}

/// A playing card.
///
/// Identity is the `(suit, rank)` pair; `face_up` is presentation state
/// that only changes by replacing the value. The rank is always in
/// `1..=13`, including for deserialized cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardFields")]
pub struct Card {
    suit: Suit,
    rank: u8,
    face_up: bool,
}

/// Unchecked wire form of a [`Card`].
#[derive(Deserialize)]
struct CardFields {
    suit: Suit,
    rank: u8,
    face_up: bool,
}

impl TryFrom<CardFields> for Card {
    type Error = String;

    fn try_from(fields: CardFields) -> Result<Self, Self::Error> {
        let card = Card::try_new(fields.suit, fields.rank)
            .ok_or_else(|| format!("Rank must be 1-13, got {}", fields.rank))?;
        Ok(if fields.face_up { card.turned_up() } else { card })
    }
}

impl Card {
    /// Create a face-down card.
    ///
    /// Panics if `rank` is outside `1..=13`.
    #[must_use]
    pub fn new(suit: Suit, rank: u8) -> Self {
        assert!((ACE..=KING).contains(&rank), "Rank must be 1-13, got {}", rank);
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-down card, or `None` if `rank` is outside `1..=13`.
    #[must_use]
    pub fn try_new(suit: Suit, rank: u8) -> Option<Self> {
        (ACE..=KING).contains(&rank).then(|| Self::new(suit, rank))
    }

    /// Build a card without the rank check.
    #[cfg(test)]
    pub(crate) const fn unchecked(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub fn up(suit: Suit, rank: u8) -> Self {
        Self::new(suit, rank).turned_up()
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    #[must_use]
    pub const fn is_red(self) -> bool {
        self.suit.is_red()
    }

    /// Same card with `face_up` set.
    #[must_use]
    pub const fn turned_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }

    /// Same card with `face_up` cleared.
    #[must_use]
    pub const fn turned_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }

    /// Same card with `face_up` toggled.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            face_up: !self.face_up,
            ..self
        }
    }

    /// True if the rank is one of Ace through King.
    #[must_use]
    pub const fn has_standard_rank(self) -> bool {
        self.rank >= ACE && self.rank <= KING
    }

    /// `(suit, rank)` identity, ignoring orientation.
    #[must_use]
    pub const fn identity(self) -> (Suit, u8) {
        (self.suit, self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", rank_label(self.rank), self.suit)
    }
}
