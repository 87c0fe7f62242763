//! The full Klondike layout: stock, waste, 4 foundations, 7 tableau columns.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::deck::is_full_deck;
use super::pile::Pile;
use crate::core::card::Card;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// The five kinds of pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Stock,
    Waste,
    Foundation,
    Tableau,
}

/// Address of a single pile in the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Waste,
    Foundation(usize),
    Tableau(usize),
}

impl PileId {
    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            PileId::Stock => PileKind::Stock,
            PileId::Waste => PileKind::Waste,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Tableau(_) => PileKind::Tableau,
        }
    }

    /// Iterate over every pile address in layout order.
    pub fn all() -> impl Iterator<Item = PileId> {
        [PileId::Stock, PileId::Waste]
            .into_iter()
            .chain((0..FOUNDATION_COUNT).map(PileId::Foundation))
            .chain((0..TABLEAU_COUNT).map(PileId::Tableau))
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => write!(f, "stock"),
            PileId::Waste => write!(f, "waste"),
            PileId::Foundation(i) => write!(f, "foundation {}", i),
            PileId::Tableau(i) => write!(f, "tableau {}", i),
        }
    }
}

/// Every pile in a game.
///
/// This is mechanical storage plus the auto-flip rule; legality checks live
/// in `rules`. Mutation is crate-private so only the engine's commands can
/// change a layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piles {
    stock: Pile,
    waste: Pile,
    foundations: [Pile; FOUNDATION_COUNT],
    tableau: [Pile; TABLEAU_COUNT],
}

impl Piles {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a layout from its parts.
    ///
    /// No validation is performed; use [`Piles::is_complete_deck`] to check
    /// that the result holds exactly one standard deck.
    #[must_use]
    pub fn from_parts(
        stock: Pile,
        waste: Pile,
        foundations: [Pile; FOUNDATION_COUNT],
        tableau: [Pile; TABLEAU_COUNT],
    ) -> Self {
        Self {
            stock,
            waste,
            foundations,
            tableau,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    #[must_use]
    pub fn foundation(&self, index: usize) -> Option<&Pile> {
        self.foundations.get(index)
    }

    #[must_use]
    pub fn tableau(&self, column: usize) -> Option<&Pile> {
        self.tableau.get(column)
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile; FOUNDATION_COUNT] {
        &self.foundations
    }

    #[must_use]
    pub fn tableau_columns(&self) -> &[Pile; TABLEAU_COUNT] {
        &self.tableau
    }

    /// Look up any pile by address.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Foundation(i) => self.foundations.get(i),
            PileId::Tableau(i) => self.tableau.get(i),
        }
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
            PileId::Foundation(i) => self.foundations.get_mut(i),
            PileId::Tableau(i) => self.tableau.get_mut(i),
        }
    }

    pub(crate) fn stock_mut(&mut self) -> &mut Pile {
        &mut self.stock
    }

    pub(crate) fn waste_mut(&mut self) -> &mut Pile {
        &mut self.waste
    }

    // === Whole-layout queries ===

    /// Iterate every card in layout order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        PileId::all()
            .filter_map(|id| self.pile(id))
            .flat_map(Pile::iter)
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        PileId::all()
            .filter_map(|id| self.pile(id))
            .map(Pile::len)
            .sum()
    }

    /// True if the layout holds exactly the 52 distinct `(suit, rank)` pairs,
    /// every rank between Ace and King.
    #[must_use]
    pub fn is_complete_deck(&self) -> bool {
        is_full_deck(self.cards())
    }

    // === Flip rule ===

    /// Turn the top card of a tableau column face-up if it is face-down.
    ///
    /// Returns true if a card was turned over.
    pub(crate) fn auto_flip_tableau(&mut self, column: usize) -> bool {
        self.tableau
            .get_mut(column)
            .map_or(false, Pile::flip_top_face_up)
    }
}
