//! Pending selection: the "picked up" card or run.

use serde::{Deserialize, Serialize};

use crate::piles::{PileId, Piles};

/// Pile kinds a selection may originate from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    Tableau,
    Waste,
    Foundation,
}

/// A picked-up card (or, on the tableau, the run starting at that card).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Kind of pile the selection came from.
    pub source: SourceKind,
    /// Foundation or tableau index (0 for the waste).
    pub pile_index: usize,
    /// Index of the selected card; on the tableau the run extends to the top.
    pub run_start: usize,
}

impl Selection {
    #[must_use]
    pub const fn waste(top: usize) -> Self {
        Self {
            source: SourceKind::Waste,
            pile_index: 0,
            run_start: top,
        }
    }

    #[must_use]
    pub const fn foundation(index: usize, top: usize) -> Self {
        Self {
            source: SourceKind::Foundation,
            pile_index: index,
            run_start: top,
        }
    }

    #[must_use]
    pub const fn tableau(column: usize, run_start: usize) -> Self {
        Self {
            source: SourceKind::Tableau,
            pile_index: column,
            run_start,
        }
    }

    /// Pile this selection lives in.
    #[must_use]
    pub const fn pile_id(&self) -> PileId {
        match self.source {
            SourceKind::Tableau => PileId::Tableau(self.pile_index),
            SourceKind::Waste => PileId::Waste,
            SourceKind::Foundation => PileId::Foundation(self.pile_index),
        }
    }

    /// Does this selection still name a face-up card that may be picked up?
    ///
    /// Waste and foundation selections must point at the pile's top card;
    /// tableau selections may point at any face-up card.
    #[must_use]
    pub fn is_valid_in(&self, piles: &Piles) -> bool {
        let Some(pile) = piles.pile(self.pile_id()) else {
            return false;
        };
        let Some(card) = pile.get(self.run_start) else {
            return false;
        };
        if !card.is_face_up() {
            return false;
        }
        match self.source {
            SourceKind::Tableau => true,
            SourceKind::Waste | SourceKind::Foundation => pile.top_index() == Some(self.run_start),
        }
    }
}
