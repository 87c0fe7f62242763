//! Core value types: cards, randomness, configuration.

pub mod card;
pub mod config;
pub mod rng;

pub use card::{rank_label, Card, Suit, ACE, CARDS_PER_SUIT, DECK_SIZE, JACK, KING, QUEEN};
pub use config::EngineConfig;
pub use rng::{GameRng, GameRngState, ShuffleSource};
