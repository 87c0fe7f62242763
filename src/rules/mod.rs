//! Klondike rules: move legality and win detection.
//!
//! Everything here is a pure function of a [`Piles`](crate::piles::Piles)
//! layout. The engine consults these predicates before mutating state and
//! never interprets legality itself.

pub mod validator;
pub mod win;

pub use validator::{
    can_place_on_foundation, can_place_on_tableau, can_stack_foundation, can_stack_tableau,
    find_foundation_index_for, is_valid_run,
};
pub use win::is_won;
