//! Game state types.

use crate::card::Rank;

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Turns are being played.
    InProgress,
    /// Deck and every hand are empty; scores are final.
    Over,
}

/// A request by `asker` for every card of `rank` held by `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AskRequest {
    /// Seat making the ask.
    pub asker: usize,
    /// Seat being asked.
    pub target: usize,
    /// Rank asked for.
    pub rank: Rank,
}

impl AskRequest {
    /// Creates a new request.
    #[must_use]
    pub const fn new(asker: usize, target: usize, rank: Rank) -> Self {
        Self {
            asker,
            target,
            rank,
        }
    }
}
