//! # klondike-engine
//!
//! Rule engine and interaction state machine for single-player Klondike
//! solitaire, meant to sit behind a thin presentation layer.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: Piles, selection, counters, win flag and
//!    undo history live in one [`Klondike`] value. Only its commands mutate
//!    them.
//!
//! 2. **Total commands**: Every command either applies a valid transition or
//!    leaves the state untouched. There is no error type; outcomes are
//!    reported as plain values.
//!
//! 3. **Injectable randomness**: Shuffling goes through [`ShuffleSource`],
//!    so deals are reproducible from a seed or fully scripted.
//!
//! ## Architecture
//!
//! - **Click state machine**: Click-to-select then click-to-drop replaces
//!   drag-and-drop. Double-clicks are separate commands.
//!
//! - **Persistent snapshots**: Piles use `im` vectors, so an undo snapshot
//!   of the whole layout is an O(1) clone.
//!
//! - **Logging**: The engine logs through the `log` facade under the
//!   `klondike` target; the embedding application installs the logger.
//!
//! ## Modules
//!
//! - `core`: Cards, RNG, configuration
//! - `piles`: Pile storage, deck, deal, auto-flip
//! - `rules`: Move legality and win detection
//! - `interaction`: Selection and click resolution
//! - `history`: Undo/redo snapshots
//! - `diagnostics`: Move-attempt side channel
//! - `engine`: The `Klondike` orchestrator

pub mod core;
pub mod piles;
pub mod rules;
pub mod interaction;
pub mod history;
pub mod diagnostics;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{Card, EngineConfig, GameRng, GameRngState, ShuffleSource, Suit};

pub use crate::piles::{Deck, Pile, PileId, PileKind, Piles};

pub use crate::interaction::{ClickTarget, Selection, SourceKind};

pub use crate::history::Snapshot;

pub use crate::diagnostics::{MoveAttempt, MoveLog, MoveObserver};

pub use crate::engine::{ClickOutcome, DrawResult, GameView, Klondike, Move};
