//! Game orchestration: the command surface for presentation layers.
//!
//! Data flows one way per command: a click enters [`Klondike`], the
//! selection state machine resolves intent, the rules judge legality, and
//! only then is an undo snapshot taken and the piles mutated.

mod game;
mod outcome;
mod view;

pub use game::Klondike;
pub use outcome::{ClickOutcome, DrawResult, Move};
pub use view::GameView;
