//! Move selection for automated seats.
//!
//! A [`BotPolicy`] only picks the request; the game engine resolves it. Swap
//! in a different policy through [`Game::bot_turn_with`](crate::Game::bot_turn_with).

use alloc::vec::Vec;

use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::game::AskRequest;
use crate::hand::Hand;
use crate::player::PLAYER_COUNT;

/// What a bot can see when choosing its ask.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    /// The seat choosing a move.
    pub seat: usize,
    /// That seat's own hand.
    pub hand: &'a Hand,
    /// Number of cards held by every seat.
    pub hand_sizes: [usize; PLAYER_COUNT],
    /// Number of books held by every seat.
    pub book_counts: [usize; PLAYER_COUNT],
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

impl TableView<'_> {
    /// Returns every seat other than the viewer's.
    #[must_use]
    pub fn opponents(&self) -> Vec<usize> {
        (0..PLAYER_COUNT).filter(|&s| s != self.seat).collect()
    }
}

/// Chooses an ask for an automated seat.
pub trait BotPolicy {
    /// Returns the request to make, or `None` to pass.
    ///
    /// The returned rank should be one the seat holds and the target should
    /// be another seat; the engine rejects self-targeting.
    fn choose_ask(&mut self, view: &TableView<'_>, rng: &mut dyn RngCore) -> Option<AskRequest>;
}

/// Uniformly random choice of rank (among ranks held) and target (among the
/// other seats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomPolicy;

impl BotPolicy for RandomPolicy {
    fn choose_ask(&mut self, view: &TableView<'_>, rng: &mut dyn RngCore) -> Option<AskRequest> {
        let rank = *view.hand.ranks().choose(rng)?;
        let target = *view.opponents().choose(rng)?;
        Some(AskRequest::new(view.seat, target, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn view(seat: usize, hand: &Hand) -> TableView<'_> {
        TableView {
            seat,
            hand,
            hand_sizes: [hand.len(); PLAYER_COUNT],
            book_counts: [0; PLAYER_COUNT],
            cards_remaining: 10,
        }
    }

    #[test]
    fn random_policy_passes_with_empty_hand() {
        let hand = Hand::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(RandomPolicy.choose_ask(&view(2, &hand), &mut rng), None);
    }

    #[test]
    fn random_policy_asks_for_held_rank_from_another_seat() {
        let hand = Hand::from_cards(vec![
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Four, Suit::Spades),
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..200 {
            let request = RandomPolicy
                .choose_ask(&view(1, &hand), &mut rng)
                .expect("non-empty hand always asks");
            assert_eq!(request.asker, 1);
            assert_ne!(request.target, 1);
            assert!(request.target < PLAYER_COUNT);
            assert!(hand.has_rank(request.rank));
        }
    }

    #[test]
    fn random_policy_reaches_every_opponent_and_rank() {
        let hand = Hand::from_cards(vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut targets = [0_usize; PLAYER_COUNT];
        let mut aces = 0;

        for _ in 0..600 {
            let request = RandomPolicy
                .choose_ask(&view(0, &hand), &mut rng)
                .expect("non-empty hand always asks");
            targets[request.target] += 1;
            if request.rank == Rank::Ace {
                aces += 1;
            }
        }

        assert_eq!(targets[0], 0);
        assert!(targets[1..].iter().all(|&n| n > 100));
        // Uniform over ranks, not over cards: roughly half the asks are for Aces.
        assert!((200..400).contains(&aces), "aces = {aces}");
    }
}
