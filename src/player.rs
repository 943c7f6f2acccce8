//! Seats at the table.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::{Book, Hand};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// The seat played by the human.
pub const HUMAN_SEAT: usize = 0;

/// Who is acting at a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatKind {
    /// The human player.
    Human,
    /// An automated opponent.
    Bot,
}

impl SeatKind {
    /// Returns the kind of player sitting at `seat`.
    #[must_use]
    pub const fn of(seat: usize) -> Self {
        if seat == HUMAN_SEAT { Self::Human } else { Self::Bot }
    }
}

/// Returns the display name of a seat ("Player 1" for seat 0).
#[must_use]
pub fn player_name(seat: usize) -> String {
    format!("Player {}", seat + 1)
}

/// A player's hand and completed books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    pub(crate) hand: Hand,
    pub(crate) books: Vec<Book>,
}

impl Player {
    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's books in the order they were completed.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of completed books.
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}
