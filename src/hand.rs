//! Hands and books.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{BOOK_SIZE, Card, Rank};

/// Four cards of one rank, removed from a hand as a scoring unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    rank: Rank,
    cards: [Card; BOOK_SIZE],
}

impl Book {
    /// Returns the rank shared by every card in the book.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the four cards.
    #[must_use]
    pub const fn cards(&self) -> &[Card; BOOK_SIZE] {
        &self.cards
    }
}

/// A player's hand.
///
/// Cards keep the order in which they arrived; the order has no meaning for
/// play but gives a stable rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds several cards to the hand.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many cards of `rank` the hand holds.
    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank == rank).count()
    }

    /// Returns whether the hand holds at least one card of `rank`.
    #[must_use]
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|c| c.rank == rank)
    }

    /// Returns the distinct ranks in the hand, in first-seen order.
    #[must_use]
    pub fn ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = Vec::new();
        for card in &self.cards {
            if !ranks.contains(&card.rank) {
                ranks.push(card.rank);
            }
        }
        ranks
    }

    /// Removes and returns every card of `rank`.
    pub fn take_rank(&mut self, rank: Rank) -> Vec<Card> {
        let (taken, kept): (Vec<Card>, Vec<Card>) = core::mem::take(&mut self.cards)
            .into_iter()
            .partition(|c| c.rank == rank);
        self.cards = kept;
        taken
    }

    /// Removes every complete book from the hand.
    ///
    /// Books are returned in the order their rank first appears in the hand.
    pub fn extract_books(&mut self) -> Vec<Book> {
        let mut counts = [0_usize; Rank::ALL.len()];
        for card in &self.cards {
            counts[card.rank.index()] += 1;
        }

        let mut books = Vec::new();
        for rank in self.ranks() {
            if counts[rank.index()] != BOOK_SIZE {
                continue;
            }
            if let Ok(cards) = <[Card; BOOK_SIZE]>::try_from(self.take_rank(rank)) {
                tracing::trace!(rank = %rank, "book extracted");
                books.push(Book { rank, cards });
            }
        }
        books
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    const fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn four_of(rank: Rank) -> Vec<Card> {
        Suit::ALL.into_iter().map(|suit| card(rank, suit)).collect()
    }

    #[test]
    fn take_rank_moves_all_matches() {
        let mut hand = Hand::from_cards(vec![
            card(Rank::Seven, Suit::Hearts),
            card(Rank::Two, Suit::Clubs),
            card(Rank::Seven, Suit::Spades),
        ]);

        let taken = hand.take_rank(Rank::Seven);
        assert_eq!(taken.len(), 2);
        assert!(taken.iter().all(|c| c.rank == Rank::Seven));
        assert_eq!(hand.cards(), &[card(Rank::Two, Suit::Clubs)]);
        assert!(hand.take_rank(Rank::Ace).is_empty());
    }

    #[test]
    fn extract_books_leaves_incomplete_ranks() {
        let mut cards = vec![card(Rank::Queen, Suit::Hearts)];
        cards.extend(four_of(Rank::Nine));
        cards.push(card(Rank::Queen, Suit::Clubs));
        let mut hand = Hand::from_cards(cards);

        let books = hand.extract_books();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].rank(), Rank::Nine);
        assert!(books[0].cards().iter().all(|c| c.rank == Rank::Nine));
        assert!(!hand.has_rank(Rank::Nine));
        assert_eq!(hand.count_rank(Rank::Queen), 2);
        assert!(hand.extract_books().is_empty());
    }

    #[test]
    fn extract_books_orders_by_first_seen_rank() {
        let mut cards = four_of(Rank::Ace);
        cards.insert(0, card(Rank::Three, Suit::Spades));
        cards.extend([Suit::Clubs, Suit::Hearts, Suit::Diamonds].map(|s| card(Rank::Three, s)));
        let mut hand = Hand::from_cards(cards);

        let ranks: Vec<Rank> = hand.extract_books().iter().map(Book::rank).collect();
        assert_eq!(ranks, vec![Rank::Three, Rank::Ace]);
        assert!(hand.is_empty());
    }
}
