//! Click resolution.
//!
//! Turns "current selection + clicked element" into an intent. Resolution
//! is pure; the engine executes the intent.
//!
//! | State        | Click                                   | Intent              |
//! |--------------|-----------------------------------------|---------------------|
//! | Idle         | face-up card (waste/foundation top, any tableau card) | `Select`  |
//! | Idle         | empty pile, face-down card              | `Ignore`            |
//! | Selected(X)  | the selected card again                 | `Deselect`          |
//! | Selected(X)  | another face-up card in X's column      | `Select` (new run)  |
//! | Selected(X)  | a different tableau or foundation pile  | `Attempt`           |
//! | Selected(X)  | anything else                           | `Deselect`          |

use super::selection::Selection;
use crate::piles::{PileId, PileKind, Piles};

/// An element the presentation layer reports a click on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// The waste pile (its top card).
    Waste,
    /// A foundation pile.
    Foundation(usize),
    /// A tableau column as a whole (its top card, or the empty slot).
    Tableau(usize),
    /// A specific card in a tableau column.
    TableauCard { column: usize, index: usize },
}

impl ClickTarget {
    #[must_use]
    pub const fn pile_id(self) -> PileId {
        match self {
            ClickTarget::Waste => PileId::Waste,
            ClickTarget::Foundation(i) => PileId::Foundation(i),
            ClickTarget::Tableau(column) | ClickTarget::TableauCard { column, .. } => {
                PileId::Tableau(column)
            }
        }
    }
}

/// What a click means given the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickIntent {
    /// No effect; selection unchanged.
    Ignore,
    /// Pick up (or re-pick) a card or run.
    Select(Selection),
    /// Drop the current selection without moving anything.
    Deselect,
    /// Try to move the selection onto `to`; selection clears either way.
    Attempt { from: Selection, to: PileId },
}

/// Resolve a click against the current selection.
#[must_use]
pub fn resolve_click(current: Option<Selection>, target: ClickTarget, piles: &Piles) -> ClickIntent {
    if piles.pile(target.pile_id()).is_none() {
        return ClickIntent::Ignore;
    }
    let target = focus_top(target, piles);

    match current {
        None => pick_up(target, piles).map_or(ClickIntent::Ignore, ClickIntent::Select),
        Some(selected) => resolve_with_selection(selected, target, piles),
    }
}

/// A click on a whole non-empty column is a click on its top card.
fn focus_top(target: ClickTarget, piles: &Piles) -> ClickTarget {
    match target {
        ClickTarget::Tableau(column) => piles
            .tableau(column)
            .and_then(|pile| pile.top_index())
            .map_or(target, |index| ClickTarget::TableauCard { column, index }),
        other => other,
    }
}

fn pick_up(target: ClickTarget, piles: &Piles) -> Option<Selection> {
    let selection = match target {
        ClickTarget::Waste => Selection::waste(piles.waste().top_index()?),
        ClickTarget::Foundation(i) => Selection::foundation(i, piles.foundation(i)?.top_index()?),
        ClickTarget::Tableau(_) => return None,
        ClickTarget::TableauCard { column, index } => Selection::tableau(column, index),
    };
    selection.is_valid_in(piles).then_some(selection)
}

fn resolve_with_selection(selected: Selection, target: ClickTarget, piles: &Piles) -> ClickIntent {
    let to = target.pile_id();

    if to != selected.pile_id() {
        return match to.kind() {
            PileKind::Foundation | PileKind::Tableau => ClickIntent::Attempt { from: selected, to },
            PileKind::Stock | PileKind::Waste => ClickIntent::Deselect,
        };
    }

    match target {
        ClickTarget::TableauCard { index, .. } if index != selected.run_start => {
            pick_up(target, piles).map_or(ClickIntent::Deselect, ClickIntent::Select)
        }
        _ => ClickIntent::Deselect,
    }
}
