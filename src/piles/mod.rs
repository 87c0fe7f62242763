//! Card/pile model.
//!
//! - [`Pile`]: ordered card sequence (index 0 = bottom)
//! - [`Piles`]: stock, waste, 4 foundations and 7 tableau columns
//! - [`Deck`]: validated 52-card deck, Fisher–Yates shuffle, opening deal
//!
//! No move validation lives here; this layer is storage plus the
//! tableau auto-flip rule.

mod deck;
mod layout;
mod pile;

pub use deck::{Deck, TABLEAU_DEAL_SIZE};
pub use layout::{PileId, PileKind, Piles, FOUNDATION_COUNT, TABLEAU_COUNT};
pub use pile::{Pile, Run};
