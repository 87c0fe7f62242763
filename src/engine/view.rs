//! Read-only, serializable view for presentation layers.

use serde::{Deserialize, Serialize};

use super::game::Klondike;
use crate::core::card::Card;
use crate::interaction::Selection;
use crate::piles::Pile;

/// Owned copy of everything a renderer needs.
///
/// Piles are listed bottom first, each card carrying its face-up flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundations: Vec<Vec<Card>>,
    pub tableau: Vec<Vec<Card>>,
    /// Pending selection, for highlighting.
    pub selection: Option<Selection>,
    pub moves: u32,
    pub redeals: u32,
    pub won: bool,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl From<&Klondike> for GameView {
    fn from(game: &Klondike) -> Self {
        let piles = game.piles();
        Self {
            stock: piles.stock().to_vec(),
            waste: piles.waste().to_vec(),
            foundations: piles.foundations().iter().map(Pile::to_vec).collect(),
            tableau: piles.tableau_columns().iter().map(Pile::to_vec).collect(),
            selection: game.selection(),
            moves: game.moves(),
            redeals: game.redeals(),
            won: game.is_won(),
            can_undo: game.can_undo(),
            can_redo: game.can_redo(),
        }
    }
}
