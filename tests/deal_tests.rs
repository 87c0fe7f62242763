//! Integration tests for shuffling and the opening deal.

mod common;

use klondike_engine::core::{Suit, ACE, KING};
use klondike_engine::piles::{TABLEAU_COUNT, TABLEAU_DEAL_SIZE};
use klondike_engine::{Card, Deck, EngineConfig, GameRng, Klondike, ShuffleSource};

use common::{arranged_deck, assert_invariants, column_top, nth_draw};

/// Always picks the highest allowed index, so the shuffle is the identity.
struct Identity;

impl ShuffleSource for Identity {
    fn index_up_to(&mut self, upper: usize) -> usize {
        upper
    }
}

// =============================================================================
// Deal shape
// =============================================================================

/// Column c holds c + 1 cards with only the top one face-up.
#[test]
fn test_tableau_triangle() {
    let game = Klondike::with_seed(17);

    for column in 0..TABLEAU_COUNT {
        let pile = game.tableau(column).unwrap();
        assert_eq!(pile.len(), column + 1);
        for (index, card) in pile.iter().enumerate() {
            assert_eq!(card.is_face_up(), index == column);
        }
    }
}

/// The 24 cards left after the deal sit face-down in the stock.
#[test]
fn test_stock_and_waste_after_deal() {
    let game = Klondike::with_seed(17);

    assert_eq!(game.stock().len(), 52 - TABLEAU_DEAL_SIZE);
    assert!(game.stock().iter().all(|card| !card.is_face_up()));
    assert!(game.waste().is_empty());
    for f in 0..4 {
        assert!(game.foundation(f).unwrap().is_empty());
    }
    assert_invariants(&game);
}

/// Counters and flags start cleared.
#[test]
fn test_fresh_game_counters() {
    let game = Klondike::with_seed(17);

    assert_eq!(game.moves(), 0);
    assert_eq!(game.redeals(), 0);
    assert!(!game.is_won());
    assert!(!game.can_undo());
    assert_eq!(game.selection(), None);
}

// =============================================================================
// Deal order
// =============================================================================

/// Cards are dealt column by column; the last deck card ends on top of the stock.
#[test]
fn test_identity_shuffle_deals_in_deck_order() {
    let mut game = Klondike::with_seed(0);
    game.new_game_from(&mut Identity);
    let deck = Deck::standard();

    assert_eq!(
        game.tableau(0).unwrap().top().map(Card::identity),
        Some(deck.cards()[column_top(0)].identity())
    );
    assert_eq!(
        game.tableau(6).unwrap().top().map(Card::identity),
        Some(deck.cards()[column_top(6)].identity())
    );
    assert_eq!(
        game.stock().top().map(Card::identity),
        Some(deck.cards()[nth_draw(0)].identity())
    );
    assert_eq!(game.stock().get(0).map(Card::identity), Some(deck.cards()[TABLEAU_DEAL_SIZE].identity()));
}

/// A pre-arranged deck lands exactly where the deal positions say.
#[test]
fn test_arranged_deck_positions() {
    let game = {
        let mut game = Klondike::with_seed(0);
        game.new_game_with_deck(arranged_deck(&[
            (column_top(3), Card::up(Suit::Hearts, KING)),
            (nth_draw(0), Card::up(Suit::Spades, ACE)),
        ]));
        game
    };

    assert_eq!(game.tableau(3).unwrap().top(), Some(Card::up(Suit::Hearts, KING)));
    assert_eq!(game.stock().top(), Some(Card::new(Suit::Spades, ACE)));
}

// =============================================================================
// Determinism
// =============================================================================

/// Same seed, same deal, including the stock order.
#[test]
fn test_seeded_games_reproduce() {
    let a = Klondike::new(EngineConfig::default().with_seed(99));
    let b = Klondike::new(EngineConfig::default().with_seed(99));

    assert_eq!(a.piles(), b.piles());
    assert_eq!(a.rng_state(), b.rng_state());
}

/// Shuffling with a seeded `GameRng` matches the engine's own deal.
#[test]
fn test_external_rng_matches_engine() {
    let engine = Klondike::with_seed(123);

    let mut rng = GameRng::new(123);
    let mut other = Klondike::with_seed(0);
    other.new_game_from(&mut rng);

    assert_eq!(engine.piles(), other.piles());
}

/// Restoring an RNG state continues the same sequence of games.
#[test]
fn test_rng_state_resumes_sequence() {
    let mut game = Klondike::with_seed(8);
    let mut rng = GameRng::from_state(&game.rng_state());

    game.new_game();
    let mut other = Klondike::with_seed(0);
    other.new_game_from(&mut rng);

    assert_eq!(game.piles(), other.piles());
}

/// Deals from many seeds are all complete, well-formed layouts.
#[test]
fn test_many_seeds_deal_valid_layouts() {
    for seed in 0..50 {
        assert_invariants(&Klondike::with_seed(seed));
    }
}
