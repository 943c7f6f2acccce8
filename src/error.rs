//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when taking a turn.
///
/// A turn that fails with any of these leaves the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The target is the asker or not a seat at the table.
    #[error("invalid target player")]
    InvalidTarget,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// Passing is only allowed with an empty hand.
    #[error("cannot pass while holding cards")]
    CannotPass,
    /// Drawing failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Error returned when a rank symbol cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown card rank")]
pub struct ParseRankError;
