//! A four-seat Go Fish game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck, the hands, the
//! books, the turn pointer and an action log. A caller (terminal, web page,
//! test) drives it one turn at a time and renders whatever it exposes.
//!
//! # Example
//!
//! ```
//! use gofish::{Game, GameOptions, HUMAN_SEAT};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let rank = game.players()[HUMAN_SEAT].hand().ranks()[0];
//! let outcome = game.human_request(1, rank).unwrap();
//! assert_eq!(outcome.seat, HUMAN_SEAT);
//! assert_eq!(game.current_turn(), 1);
//!
//! while game.current_turn() != HUMAN_SEAT && !game.is_game_over() {
//!     game.bot_turn().unwrap();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bot;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod log;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use bot::{BotPolicy, RandomPolicy, TableView};
pub use card::{BOOK_SIZE, Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, ParseRankError, TurnError};
pub use game::{AskRequest, Game, GamePhase};
pub use hand::{Book, Hand};
pub use log::{ActionLog, ActorKind, LogEntry};
pub use options::GameOptions;
pub use player::{HUMAN_SEAT, PLAYER_COUNT, Player, SeatKind, player_name};
pub use result::{AskResult, FinalScores, TurnAction, TurnOutcome};
