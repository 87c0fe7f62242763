//! Click-driven interaction: the pick-up/drop substitute for drag-and-drop.
//!
//! Two states: Idle (no [`Selection`]) and Selected. [`resolve_click`]
//! maps a click in either state to a [`ClickIntent`]; the engine applies it.

mod click;
mod selection;

pub use click::{resolve_click, ClickIntent, ClickTarget};
pub use selection::{Selection, SourceKind};
