//! Game configuration options.

/// Configuration options for a Go Fish game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gofish::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_reveal_bot_draws(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each seat at the start of the game.
    pub hand_size: u8,
    /// Whether log lines name the card a bot drew when going fishing.
    /// The human's drawn card is always shown.
    pub reveal_bot_draws: bool,
    /// Whether a bot passing with an empty hand draws a card from the deck.
    /// The human always draws when passing with an empty hand.
    pub refill_empty_hands: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            reveal_bot_draws: false,
            refill_empty_hands: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each seat.
    ///
    /// Dealing stops early if the deck runs out, so large values are safe.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: u8) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether bot draws are named in the log.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_reveal_bot_draws(true);
    /// assert!(options.reveal_bot_draws);
    /// ```
    #[must_use]
    pub const fn with_reveal_bot_draws(mut self, reveal: bool) -> Self {
        self.reveal_bot_draws = reveal;
        self
    }

    /// Sets whether a bot passing with an empty hand draws a card.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_refill_empty_hands(true);
    /// assert!(options.refill_empty_hands);
    /// ```
    #[must_use]
    pub const fn with_refill_empty_hands(mut self, refill: bool) -> Self {
        self.refill_empty_hands = refill;
        self
    }
}
