//! The Klondike orchestrator.
//!
//! `Klondike` owns the whole mutable surface of one game: piles, selection,
//! counters, win flag, undo history and diagnostics. Its command methods are
//! the only way to change that state, and each command is applied fully or
//! not at all.

use log::{debug, info, trace};

use crate::core::card::Card;
use crate::core::config::EngineConfig;
use crate::core::rng::{GameRng, GameRngState, ShuffleSource};
use crate::diagnostics::{MoveAttempt, MoveLog, MoveObserver};
use crate::history::{Snapshot, UndoManager};
use crate::interaction::{resolve_click, ClickIntent, ClickTarget, Selection};
use crate::piles::{Deck, Pile, PileId, PileKind, Piles};
use crate::rules::{
    can_place_on_foundation, can_place_on_tableau, find_foundation_index_for, is_valid_run, is_won,
};

use super::outcome::{ClickOutcome, DrawResult, Move};
use super::view::GameView;

/// A single Klondike game instance.
///
/// ## Example
///
/// ```
/// use klondike_engine::{DrawResult, EngineConfig, Klondike};
///
/// let mut game = Klondike::new(EngineConfig::default().with_seed(7));
/// assert_eq!(game.stock().len(), 24);
///
/// assert!(matches!(game.draw(), DrawResult::Drew(_)));
/// assert_eq!(game.waste().len(), 1);
/// assert_eq!(game.moves(), 1);
///
/// assert!(game.undo());
/// assert_eq!(game.waste().len(), 0);
/// assert_eq!(game.moves(), 1); // the undo counts as a move
/// ```
pub struct Klondike {
    config: EngineConfig,
    rng: GameRng,
    piles: Piles,
    selection: Option<Selection>,
    moves: u32,
    redeals: u32,
    won: bool,
    history: UndoManager,
    move_log: MoveLog,
    observers: Vec<Box<dyn MoveObserver>>,
}

impl Klondike {
    /// Create an engine and deal the first game from the configured seed.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut game = Self::blank(config);
        game.new_game();
        game
    }

    /// Create an engine with default settings and the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineConfig::default().with_seed(seed))
    }

    /// Resume from an arbitrary layout.
    ///
    /// Returns `None` unless `piles` holds exactly one standard deck.
    /// Counters start at zero; the win flag reflects the foundations.
    #[must_use]
    pub fn from_piles(config: EngineConfig, piles: Piles) -> Option<Self> {
        if !piles.is_complete_deck() {
            return None;
        }
        let mut game = Self::blank(config);
        game.won = is_won(&piles);
        game.piles = piles;
        Some(game)
    }

    fn blank(config: EngineConfig) -> Self {
        // A zero limit can only arrive through a deserialized or literal
        // config; it means unbounded.
        let history = match config.history_limit {
            Some(limit) if limit > 0 => UndoManager::with_limit(limit),
            _ => UndoManager::new(),
        };
        Self {
            rng: GameRng::new(config.seed),
            config,
            piles: Piles::new(),
            selection: None,
            moves: 0,
            redeals: 0,
            won: false,
            history,
            move_log: MoveLog::new(),
            observers: Vec::new(),
        }
    }

    /// Register an extra diagnostics observer.
    pub fn add_observer(&mut self, observer: impl MoveObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Game lifecycle ===

    /// Shuffle with the engine's RNG and deal a fresh game.
    pub fn new_game(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.start(deck);
    }

    /// Shuffle with an external source and deal a fresh game.
    pub fn new_game_from<S: ShuffleSource + ?Sized>(&mut self, source: &mut S) {
        self.start(Deck::shuffled(source));
    }

    /// Deal a fresh game from a pre-arranged deck.
    pub fn new_game_with_deck(&mut self, deck: Deck) {
        self.start(deck);
    }

    fn start(&mut self, deck: Deck) {
        self.piles = deck.deal();
        self.selection = None;
        self.moves = 0;
        self.redeals = 0;
        self.won = false;
        self.history.clear();
        self.move_log.clear();
        debug!(target: "klondike", "New game dealt, {} cards in stock", self.piles.stock().len());
        self.debug_check();
    }

    // === Commands ===

    /// Draw one card, or redeal the waste when the stock is exhausted.
    ///
    /// Always clears the selection. Redeals are unlimited.
    pub fn draw(&mut self) -> DrawResult {
        self.selection = None;

        let result = if let Some(card) = self.piles.stock().top() {
            self.checkpoint();
            self.piles.stock_mut().pop();
            let card = card.turned_up();
            self.piles.waste_mut().push(card);
            DrawResult::Drew(card)
        } else if !self.piles.waste().is_empty() {
            self.checkpoint();
            let waste = self.piles.waste_mut().detach_from(0);
            let cards = waste.len();
            // Reversed so the next pass draws in the same order.
            self.piles
                .stock_mut()
                .extend(waste.into_iter().rev().map(Card::turned_down));
            self.redeals += 1;
            debug!(target: "klondike", "Redeal {} returned {} cards to stock", self.redeals, cards);
            DrawResult::Redealt { cards }
        } else {
            return DrawResult::Empty;
        };

        self.moves += 1;
        self.debug_check();
        result
    }

    /// Restore the state before the last mutating command.
    ///
    /// Returns false (and changes nothing) if there is no history. The undo
    /// itself counts as a move, and never leaves the game won.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let current = self.snapshot();
        let Some(previous) = self.history.undo(current) else {
            return false;
        };

        self.selection = None;
        self.piles = previous.piles;
        self.moves = previous.moves + 1;
        self.redeals = previous.redeals;
        self.won = false;
        debug!(target: "klondike", "Undo, {} snapshots left", self.history.len());
        self.debug_check();
        true
    }

    /// Re-apply the state most recently undone.
    ///
    /// Returns false if nothing was undone since the last mutating command.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let current = self.snapshot();
        let Some(next) = self.history.redo(current) else {
            return false;
        };

        self.selection = None;
        self.piles = next.piles;
        self.moves += 1;
        self.redeals = next.redeals;
        self.won = is_won(&self.piles);
        debug!(target: "klondike", "Redo, {} snapshots left", self.history.len());
        self.debug_check();
        true
    }

    pub fn click_waste(&mut self) -> ClickOutcome {
        self.click(ClickTarget::Waste)
    }

    pub fn click_foundation(&mut self, foundation: usize) -> ClickOutcome {
        self.click(ClickTarget::Foundation(foundation))
    }

    pub fn click_tableau(&mut self, column: usize) -> ClickOutcome {
        self.click(ClickTarget::Tableau(column))
    }

    pub fn click_tableau_card(&mut self, column: usize, index: usize) -> ClickOutcome {
        self.click(ClickTarget::TableauCard { column, index })
    }

    /// Apply a click to the selection state machine.
    pub fn click(&mut self, target: ClickTarget) -> ClickOutcome {
        match resolve_click(self.selection, target, &self.piles) {
            ClickIntent::Ignore => ClickOutcome::Ignored,
            ClickIntent::Select(selection) => {
                self.selection = Some(selection);
                ClickOutcome::Selected(selection)
            }
            ClickIntent::Deselect => {
                self.selection = None;
                ClickOutcome::Deselected
            }
            ClickIntent::Attempt { from, to } => {
                self.selection = None;
                self.attempt_drop(from, to)
            }
        }
    }

    /// Send the waste's top card to a foundation, if one accepts it.
    pub fn double_click_waste(&mut self) -> ClickOutcome {
        self.selection = None;
        match self.piles.waste().top_index() {
            Some(top) => self.auto_move(PileId::Waste, top),
            None => ClickOutcome::Ignored,
        }
    }

    /// Send a tableau column's top card to a foundation, if one accepts it.
    ///
    /// Ignored unless `index` is the column's current top index.
    pub fn double_click_tableau_card(&mut self, column: usize, index: usize) -> ClickOutcome {
        self.selection = None;
        let is_top = self
            .piles
            .tableau(column)
            .map_or(false, |pile| pile.top_index() == Some(index));
        if !is_top {
            return ClickOutcome::Ignored;
        }
        self.auto_move(PileId::Tableau(column), index)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        self.piles.stock()
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        self.piles.waste()
    }

    #[must_use]
    pub fn foundation(&self, index: usize) -> Option<&Pile> {
        self.piles.foundation(index)
    }

    #[must_use]
    pub fn tableau(&self, column: usize) -> Option<&Pile> {
        self.piles.tableau(column)
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Cards the current selection would move, bottom first.
    #[must_use]
    pub fn selected_cards(&self) -> Vec<Card> {
        self.selection
            .and_then(|s| self.piles.pile(s.pile_id())?.run_from(s.run_start))
            .map_or_else(Vec::new, |run| run.to_vec())
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn redeals(&self) -> u32 {
        self.redeals
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Diagnostics recorded since the last new game.
    #[must_use]
    pub fn move_log(&self) -> &MoveLog {
        &self.move_log
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Would a double-click on the waste move its top card?
    #[must_use]
    pub fn can_auto_move_waste(&self) -> bool {
        self.piles
            .waste()
            .top()
            .map_or(false, |card| find_foundation_index_for(&self.piles, card).is_some())
    }

    /// Would a double-click on this column's top card move it?
    #[must_use]
    pub fn can_auto_move_tableau(&self, column: usize) -> bool {
        self.piles
            .tableau(column)
            .and_then(Pile::top)
            .map_or(false, |card| {
                card.is_face_up() && find_foundation_index_for(&self.piles, card).is_some()
            })
    }

    /// Piles the current selection could legally be dropped on.
    #[must_use]
    pub fn legal_drop_targets(&self) -> Vec<PileId> {
        let Some(selection) = self.selection else {
            return Vec::new();
        };
        PileId::all()
            .filter(|&to| to != selection.pile_id() && self.is_legal_drop(selection, to))
            .collect()
    }

    /// Owned snapshot for presentation layers.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }

    // === Internals ===

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            piles: self.piles.clone(),
            moves: self.moves,
            redeals: self.redeals,
        }
    }

    fn checkpoint(&mut self) {
        let snapshot = self.snapshot();
        self.history.record(snapshot);
    }

    fn is_legal_drop(&self, from: Selection, to: PileId) -> bool {
        let Some(run) = self
            .piles
            .pile(from.pile_id())
            .and_then(|pile| pile.run_from(from.run_start))
        else {
            return false;
        };
        let Some(&first) = run.first() else {
            return false;
        };

        match to {
            PileId::Foundation(i) => run.len() == 1 && can_place_on_foundation(&self.piles, first, i),
            PileId::Tableau(column) => {
                can_place_on_tableau(&self.piles, first, column) && is_valid_run(&run)
            }
            PileId::Stock | PileId::Waste => false,
        }
    }

    fn attempt_drop(&mut self, from: Selection, to: PileId) -> ClickOutcome {
        let Some(card) = self
            .piles
            .pile(from.pile_id())
            .and_then(|pile| pile.get(from.run_start))
        else {
            return ClickOutcome::Rejected;
        };
        let legal = self.is_legal_drop(from, to);
        self.report(card, from.pile_id(), to, legal);

        if legal {
            ClickOutcome::Moved(self.apply_move(from.pile_id(), from.run_start, to))
        } else {
            ClickOutcome::Rejected
        }
    }

    fn auto_move(&mut self, from: PileId, index: usize) -> ClickOutcome {
        let Some(card) = self.piles.pile(from).and_then(|pile| pile.get(index)) else {
            return ClickOutcome::Ignored;
        };
        if !card.is_face_up() {
            return ClickOutcome::Ignored;
        }

        match find_foundation_index_for(&self.piles, card) {
            Some(foundation) => {
                let to = PileId::Foundation(foundation);
                self.report(card, from, to, true);
                ClickOutcome::Moved(self.apply_move(from, index, to))
            }
            None => {
                let to = PileId::Foundation(fallback_foundation(&self.piles, card));
                self.report(card, from, to, false);
                ClickOutcome::Rejected
            }
        }
    }

    /// Move every card from `start` to the top of `from` onto `to`.
    ///
    /// Callers have already established legality.
    fn apply_move(&mut self, from: PileId, start: usize, to: PileId) -> Move {
        self.checkpoint();

        let cards = self
            .piles
            .pile_mut(from)
            .map(|pile| pile.detach_from(start))
            .unwrap_or_default();
        let count = cards.len();
        if let Some(destination) = self.piles.pile_mut(to) {
            destination.extend(cards);
        }
        if let PileId::Tableau(column) = from {
            self.piles.auto_flip_tableau(column);
        }

        self.moves += 1;
        if to.kind() == PileKind::Foundation && is_won(&self.piles) {
            self.won = true;
            info!(target: "klondike", "Game won in {} moves", self.moves);
        }
        self.debug_check();

        Move { from, to, count }
    }

    fn report(&mut self, card: Card, from: PileId, to: PileId, legal: bool) {
        let attempt = MoveAttempt {
            card,
            from,
            to,
            target_top: self.piles.pile(to).and_then(Pile::top),
            legal,
        };
        trace!(target: "klondike", "{}", attempt);
        if self.config.record_moves {
            self.move_log.record(attempt);
        }
        for observer in &mut self.observers {
            observer.on_move_attempt(&attempt);
        }
    }

    fn debug_check(&self) {
        debug_assert!(self.piles.is_complete_deck(), "card conservation violated");
        debug_assert!(
            self.selection.map_or(true, |s| s.is_valid_in(&self.piles)),
            "selection points at an unavailable card"
        );
    }
}

/// Foundation reported for a refused auto-move: the one building the card's
/// suit, else the first empty one, else the first.
fn fallback_foundation(piles: &Piles, card: Card) -> usize {
    let foundations = piles.foundations();
    foundations
        .iter()
        .position(|pile| pile.top().map_or(false, |top| top.suit() == card.suit()))
        .or_else(|| foundations.iter().position(Pile::is_empty))
        .unwrap_or(0)
}
