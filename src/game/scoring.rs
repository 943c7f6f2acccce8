use crate::log::ActorKind;
use crate::result::FinalScores;

use super::{Game, GamePhase};

impl Game {
    /// Checks whether the game has ended and, the first time it has, records
    /// the final scores.
    ///
    /// The game is over once the deck and every hand are empty. On that
    /// transition the winners (every seat with the most books) are computed
    /// and one summary entry is appended to the log. Later calls return
    /// `true` without logging again.
    pub fn check_game_over(&mut self) -> bool {
        if self.phase == GamePhase::Over {
            return true;
        }

        let all_hands_empty = self.players.iter().all(|p| p.hand.is_empty());
        if !all_hands_empty || !self.deck.is_empty() {
            return false;
        }

        let scores = FinalScores::from_book_counts(self.book_counts());
        self.log.push(ActorKind::System, scores.summary());

        tracing::info!(
            winners = ?scores.winners,
            max_books = scores.max_books,
            "game over"
        );

        self.final_scores = Some(scores);
        self.phase = GamePhase::Over;
        true
    }
}
