use crate::player::PLAYER_COUNT;

use super::Game;

impl Game {
    fn deal_one_card_to_players(&mut self) {
        for player in &mut self.players {
            if let Ok(card) = self.deck.draw() {
                player.hand.add_card(card);
            }
        }
    }

    /// Deals `hand_size` rounds of one card per seat, stopping if the deck
    /// runs dry.
    pub(super) fn deal_initial_hands(&mut self) {
        for _ in 0..self.options.hand_size {
            if self.deck.is_empty() {
                break;
            }
            self.deal_one_card_to_players();
        }

        tracing::debug!(
            seats = PLAYER_COUNT,
            hand_size = self.options.hand_size,
            cards_remaining = self.deck.len(),
            "initial hands dealt"
        );
    }
}
