//! Integration tests for draw/redeal cycles and undo/redo.

mod common;

use klondike_engine::core::{Suit, ACE, KING, QUEEN};
use klondike_engine::piles::{FOUNDATION_COUNT, TABLEAU_COUNT};
use klondike_engine::{Card, DrawResult, EngineConfig, Klondike, Pile, Piles, Selection};

use common::{assert_invariants, column_top, game_with};

fn draw_all(game: &mut Klondike) -> Vec<Card> {
    let mut drawn = Vec::new();
    while let DrawResult::Drew(card) = game.draw() {
        drawn.push(card);
        if game.stock().is_empty() {
            break;
        }
    }
    drawn
}

/// Every card on a foundation except the King of Spades, which tops column 0.
fn nothing_to_draw() -> Klondike {
    let foundations: [Pile; FOUNDATION_COUNT] = std::array::from_fn(|i| {
        let suit = Suit::ALL[i];
        let top = if suit == Suit::Spades { QUEEN } else { KING };
        Pile::from_cards((ACE..=top).map(|rank| Card::up(suit, rank)))
    });
    let mut tableau: [Pile; TABLEAU_COUNT] = Default::default();
    tableau[0] = Pile::from_cards([Card::up(Suit::Spades, KING)]);
    let piles = Piles::from_parts(Pile::new(), Pile::new(), foundations, tableau);
    Klondike::from_piles(EngineConfig::default(), piles).unwrap()
}

// =============================================================================
// Draw and redeal
// =============================================================================

/// A draw turns the stock's top card face-up onto the waste.
#[test]
fn test_draw_moves_top_card() {
    let mut game = Klondike::with_seed(4);
    let top = game.stock().top().unwrap();

    assert_eq!(game.draw(), DrawResult::Drew(top.turned_up()));
    assert_eq!(game.waste().top(), Some(top.turned_up()));
    assert_eq!(game.stock().len(), 23);
    assert_eq!(game.moves(), 1);
}

/// Redealing flips the waste back so the next pass draws in the same order.
#[test]
fn test_redeal_preserves_draw_order() {
    let mut game = Klondike::with_seed(4);
    let first_pass = draw_all(&mut game);
    assert_eq!(first_pass.len(), 24);

    assert_eq!(game.draw(), DrawResult::Redealt { cards: 24 });
    assert!(game.waste().is_empty());
    assert_eq!(game.stock().len(), 24);
    assert!(game.stock().iter().all(|card| !card.is_face_up()));
    assert_eq!(game.redeals(), 1);

    assert_eq!(draw_all(&mut game), first_pass);
    assert_invariants(&game);
}

/// There is no cap on the number of passes through the stock.
#[test]
fn test_redeals_are_unlimited() {
    let mut game = Klondike::with_seed(4);

    for pass in 1..=6 {
        draw_all(&mut game);
        assert!(matches!(game.draw(), DrawResult::Redealt { .. }));
        assert_eq!(game.redeals(), pass);
    }
    assert_eq!(game.moves(), 6 * 25);
}

/// With stock and waste both empty a draw is a no-op.
#[test]
fn test_draw_with_nothing_left() {
    let mut game = nothing_to_draw();

    assert_eq!(game.draw(), DrawResult::Empty);
    assert_eq!(game.moves(), 0);
    assert!(!game.can_undo());
}

// =============================================================================
// Undo
// =============================================================================

/// Undo restores the exact layout and still advances the move counter.
#[test]
fn test_undo_draw_is_exact() {
    let mut game = Klondike::with_seed(4);
    game.draw();
    let before = game.piles().clone();
    let moves = game.moves();

    game.draw();
    assert!(game.undo());

    assert_eq!(game.piles(), &before);
    assert_eq!(game.moves(), moves + 1);
}

/// Undoing a redeal brings the waste back and restores the redeal count.
#[test]
fn test_undo_redeal() {
    let mut game = Klondike::with_seed(4);
    draw_all(&mut game);
    let before = game.piles().clone();

    game.draw();
    assert_eq!(game.redeals(), 1);
    assert!(game.undo());

    assert_eq!(game.piles(), &before);
    assert_eq!(game.redeals(), 0);
    assert_eq!(game.waste().len(), 24);
}

/// Undoing a tableau move turns the exposed card face-down again.
#[test]
fn test_undo_restores_hidden_card() {
    let mut game = game_with(&[
        (column_top(0), Card::up(Suit::Diamonds, KING)),
        (column_top(1), Card::up(Suit::Clubs, QUEEN)),
    ]);
    let before = game.piles().clone();

    game.click_tableau(1);
    assert!(game.click_tableau(0).is_move());
    assert!(game.tableau(1).unwrap().top().unwrap().is_face_up());

    assert!(game.undo());

    assert_eq!(game.piles(), &before);
    assert!(!game.tableau(1).unwrap().get(0).unwrap().is_face_up());
    assert_eq!(game.tableau(1).unwrap().top(), Some(Card::up(Suit::Clubs, QUEEN)));
}

/// Undo with no history changes nothing, not even the selection.
#[test]
fn test_undo_without_history() {
    let mut game = game_with(&[(column_top(2), Card::up(Suit::Hearts, 5))]);
    game.click_tableau(2);

    assert!(!game.undo());

    assert_eq!(game.moves(), 0);
    assert_eq!(game.selection(), Some(Selection::tableau(2, 2)));
}

/// Undo drops a pending selection.
#[test]
fn test_undo_clears_selection() {
    let mut game = Klondike::with_seed(4);
    game.draw();
    game.click_waste();

    assert!(game.undo());
    assert_eq!(game.selection(), None);
}

/// Repeated undo walks back to the deal.
#[test]
fn test_undo_back_to_deal() {
    let mut game = Klondike::with_seed(4);
    let dealt = game.piles().clone();

    for _ in 0..5 {
        game.draw();
    }
    for _ in 0..5 {
        assert!(game.undo());
    }

    assert_eq!(game.piles(), &dealt);
    assert!(!game.can_undo());
    // The last undo lands on the dealt state's count plus one
    assert_eq!(game.moves(), 1);
}

/// Selection-only clicks are not undoable steps.
#[test]
fn test_selection_is_not_recorded() {
    let mut game = Klondike::with_seed(4);
    game.draw();
    game.click_waste();
    game.click_waste();

    assert!(game.undo());
    assert!(game.waste().is_empty());
    assert!(!game.can_undo());
}

// =============================================================================
// Redo
// =============================================================================

#[test]
fn test_redo_reapplies_undone_draw() {
    let mut game = Klondike::with_seed(4);
    game.draw();
    let after_draw = game.piles().clone();

    game.undo();
    assert!(game.can_redo());
    assert!(game.redo());

    assert_eq!(game.piles(), &after_draw);
    // draw (1), undo (0 + 1), redo (1 + 1)
    assert_eq!(game.moves(), 2);
    assert!(game.can_undo());
}

/// Any new mutation invalidates redo.
#[test]
fn test_new_move_clears_redo() {
    let mut game = Klondike::with_seed(4);
    game.draw();
    game.undo();

    game.draw();

    assert!(!game.can_redo());
    assert!(!game.redo());
}

/// A new game forgets both stacks.
#[test]
fn test_new_game_clears_history() {
    let mut game = Klondike::with_seed(4);
    game.draw();
    game.draw();
    game.undo();

    game.new_game();

    assert!(!game.can_undo());
    assert!(!game.can_redo());
}

/// Bounded history keeps only the most recent snapshots.
#[test]
fn test_bounded_history() {
    let mut game = Klondike::new(EngineConfig::default().with_seed(4).with_history_limit(3));
    for _ in 0..10 {
        game.draw();
    }

    let mut undone = 0;
    while game.undo() {
        undone += 1;
    }

    assert_eq!(undone, 3);
    assert_eq!(game.waste().len(), 7);
}
