//! Turn outcomes and final scores.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::player::{PLAYER_COUNT, player_name};

/// What an ask produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskResult {
    /// The target handed over this many cards.
    Received(usize),
    /// The target had none; the asker drew this card.
    Drew(Card),
    /// The target had none and the deck was empty.
    NoCardsLeft,
}

/// What the acting player did this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Asked another seat for a rank.
    Ask {
        /// Seat that was asked.
        target: usize,
        /// Rank asked for.
        rank: Rank,
        /// What came of it.
        result: AskResult,
    },
    /// Had no cards and passed, drawing `drawn` if empty hands are refilled.
    Pass {
        /// Card drawn while passing, if any.
        drawn: Option<Card>,
    },
}

/// Result of one resolved turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The seat that acted.
    pub seat: usize,
    /// What the seat did.
    pub action: TurnAction,
    /// Ranks of books completed this turn.
    pub new_books: Vec<Rank>,
    /// Whether the game ended with this turn.
    pub game_over: bool,
}

impl TurnOutcome {
    /// Returns the number of cards received from the target (0 on a pass or go fish).
    #[must_use]
    pub const fn received(&self) -> usize {
        match self.action {
            TurnAction::Ask {
                result: AskResult::Received(n),
                ..
            } => n,
            _ => 0,
        }
    }

    /// Returns the card drawn from the deck this turn, if any.
    #[must_use]
    pub const fn drawn(&self) -> Option<Card> {
        match self.action {
            TurnAction::Ask {
                result: AskResult::Drew(card),
                ..
            } => Some(card),
            TurnAction::Pass { drawn } => drawn,
            TurnAction::Ask { .. } => None,
        }
    }
}

/// Book counts at the end of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalScores {
    /// Books per seat.
    pub book_counts: [usize; PLAYER_COUNT],
    /// The highest book count.
    pub max_books: usize,
    /// Every seat holding `max_books`, in seat order.
    pub winners: Vec<usize>,
}

impl FinalScores {
    /// Ranks the seats by book count. Ties produce several winners.
    #[must_use]
    pub fn from_book_counts(book_counts: [usize; PLAYER_COUNT]) -> Self {
        let max_books = book_counts.iter().copied().max().unwrap_or(0);
        let winners = (0..PLAYER_COUNT)
            .filter(|&seat| book_counts[seat] == max_books)
            .collect();

        Self {
            book_counts,
            max_books,
            winners,
        }
    }

    /// Returns whether more than one seat shares the top score.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }

    /// Returns whether `seat` is among the winners.
    #[must_use]
    pub fn is_winner(&self, seat: usize) -> bool {
        self.winners.contains(&seat)
    }

    /// Formats the end-of-game announcement and every seat's final count.
    #[must_use]
    pub fn summary(&self) -> String {
        let headline = if let [winner] = self.winners.as_slice() {
            format!("{} wins with {} books!", player_name(*winner), self.max_books)
        } else {
            let names: Vec<String> = self.winners.iter().map(|&s| player_name(s)).collect();
            format!(
                "It's a tie between {} with {} books!",
                names.join(", "),
                self.max_books
            )
        };

        let scores: Vec<String> = self
            .book_counts
            .iter()
            .enumerate()
            .map(|(seat, books)| format!("{}: {books} books", player_name(seat)))
            .collect();

        format!("Game over! {headline} Final scores: {}", scores.join(", "))
    }
}
