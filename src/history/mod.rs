//! Undo/redo via full-state snapshots.

mod undo;

pub use undo::{Snapshot, UndoManager};
