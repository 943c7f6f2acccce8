//! Game engine and state management.

use alloc::vec::Vec;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::hand::Hand;
use crate::log::ActionLog;
use crate::options::GameOptions;
use crate::player::{PLAYER_COUNT, Player};
use crate::result::FinalScores;

mod deal;
mod scoring;
pub mod state;
mod turn;

pub use state::{AskRequest, GamePhase};

/// A four-seat Go Fish game: one human at seat 0 and three bots.
///
/// The game owns the deck, every player's hand and books, the turn pointer,
/// and the action log. It is driven one turn at a time by the caller through
/// [`Game::human_request`], [`Game::bot_turn`] and [`Game::pass`].
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    deck: Deck,
    players: [Player; PLAYER_COUNT],
    current_turn: usize,
    log: ActionLog,
    phase: GamePhase,
    final_scores: Option<FinalScores>,
    /// Random number generator used by bot turns.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed: shuffles a fresh deck and deals
    /// `options.hand_size` cards to every seat, round-robin.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), 52 - 4 * 5);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::from_rng(options, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game, shuffling with `rng`. The bot RNG is derived from
    /// it as well, so the whole game replays from the same source.
    #[must_use]
    pub fn from_rng<R: RngCore>(options: GameOptions, rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        let bot_rng = ChaCha8Rng::from_rng(rng);

        let mut game = Self::with_parts(options, deck, Default::default(), bot_rng);
        game.deal_initial_hands();
        game
    }

    /// Creates a game from an explicit deck and hands without dealing.
    ///
    /// Seat 0 moves first. The caller is responsible for the layout forming a
    /// sensible card set; this is meant for replays and tests.
    #[must_use]
    pub fn from_layout(
        options: GameOptions,
        deck: Deck,
        hands: [Hand; PLAYER_COUNT],
        seed: u64,
    ) -> Self {
        let players = hands.map(|hand| Player {
            hand,
            books: Vec::new(),
        });
        Self::with_parts(options, deck, players, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_parts(
        options: GameOptions,
        deck: Deck,
        players: [Player; PLAYER_COUNT],
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            options,
            deck,
            players,
            current_turn: 0,
            log: ActionLog::new(),
            phase: GamePhase::InProgress,
            final_scores: None,
            rng,
        }
    }

    /// Throws the current game away and deals a new one with the same options.
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(self.options, seed);
    }

    /// Returns the options this game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns every seat, in seat order.
    #[must_use]
    pub const fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    /// Returns the player at `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the book count of every seat.
    #[must_use]
    pub fn book_counts(&self) -> [usize; PLAYER_COUNT] {
        core::array::from_fn(|seat| self.players[seat].book_count())
    }

    /// Returns the seat whose turn it is.
    #[must_use]
    pub const fn current_turn(&self) -> usize {
        self.current_turn
    }

    /// Returns the action log.
    #[must_use]
    pub const fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Returns the final scores once the game is over.
    #[must_use]
    pub const fn final_scores(&self) -> Option<&FinalScores> {
        self.final_scores.as_ref()
    }

    const fn advance_turn(&mut self) {
        self.current_turn = (self.current_turn + 1) % PLAYER_COUNT;
    }
}
