//! Shared helpers for integration tests.

#![allow(dead_code)]

use klondike_engine::core::{ACE, CARDS_PER_SUIT};
use klondike_engine::piles::{FOUNDATION_COUNT, TABLEAU_COUNT};
use klondike_engine::{Card, Deck, Klondike};

/// Deal position of the face-up card on top of `column`.
pub fn column_top(column: usize) -> usize {
    column * (column + 1) / 2 + column
}

/// Deal position of the card the `nth` draw (0-based) turns over.
pub fn nth_draw(nth: usize) -> usize {
    51 - nth
}

/// A full deck with `placed` cards at fixed deal positions and every other
/// card filling the gaps in standard order.
pub fn arranged_deck(placed: &[(usize, Card)]) -> Deck {
    let mut slots: Vec<Option<Card>> = vec![None; 52];
    for &(position, card) in placed {
        slots[position] = Some(card);
    }

    let used: Vec<_> = placed.iter().map(|(_, card)| card.identity()).collect();
    let mut rest = Deck::standard()
        .cards()
        .iter()
        .copied()
        .filter(|card| !used.contains(&card.identity()))
        .collect::<Vec<_>>()
        .into_iter();

    let cards = slots
        .into_iter()
        .map(|slot| slot.or_else(|| rest.next()).expect("enough filler cards"))
        .collect();
    Deck::from_cards(cards).expect("arranged deck is a full deck")
}

/// An engine dealt from `arranged_deck(placed)`.
pub fn game_with(placed: &[(usize, Card)]) -> Klondike {
    let mut game = Klondike::with_seed(0);
    game.new_game_with_deck(arranged_deck(placed));
    game
}

/// Check every structural invariant of a game.
pub fn assert_invariants(game: &Klondike) {
    let piles = game.piles();

    assert!(piles.is_complete_deck(), "card conservation violated");

    for f in 0..FOUNDATION_COUNT {
        let pile = piles.foundation(f).unwrap();
        assert!(pile.len() <= CARDS_PER_SUIT);
        for (index, card) in pile.iter().enumerate() {
            assert!(card.is_face_up(), "face-down card on foundation {}", f);
            assert_eq!(card.rank() as usize, usize::from(ACE) + index, "foundation {} out of order", f);
            assert_eq!(card.suit(), pile.get(0).unwrap().suit(), "foundation {} mixes suits", f);
        }
    }

    for column in 0..TABLEAU_COUNT {
        let pile = piles.tableau(column).unwrap();
        if pile.is_empty() {
            continue;
        }
        let start = pile.face_up_start().expect("non-empty column has a face-up top");
        for (index, card) in pile.iter().enumerate() {
            assert_eq!(card.is_face_up(), index >= start, "column {} orientation", column);
        }
        let run: Vec<_> = pile.iter().skip(start).collect();
        for pair in run.windows(2) {
            assert_ne!(pair[0].is_red(), pair[1].is_red(), "column {} colors", column);
            assert_eq!(pair[0].rank(), pair[1].rank() + 1, "column {} ranks", column);
        }
    }

    assert!(piles.stock().iter().all(|card| !card.is_face_up()));
    assert!(piles.waste().iter().all(|card| card.is_face_up()));

    if let Some(selection) = game.selection() {
        assert!(selection.is_valid_in(piles), "stale selection {:?}", selection);
    }
}
