use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::RngCore;

use crate::bot::{BotPolicy, RandomPolicy, TableView};
use crate::card::{Card, Rank};
use crate::error::TurnError;
use crate::hand::Book;
use crate::log::ActorKind;
use crate::player::{HUMAN_SEAT, PLAYER_COUNT, Player, SeatKind, player_name};
use crate::result::{AskResult, TurnAction, TurnOutcome};

use super::{AskRequest, Game, GamePhase};

const fn actor_kind(seat: usize) -> ActorKind {
    match SeatKind::of(seat) {
        SeatKind::Human => ActorKind::Human,
        SeatKind::Bot => ActorKind::Bot,
    }
}

impl Game {
    fn ensure_turn(&self, seat: usize) -> Result<(), TurnError> {
        if self.phase == GamePhase::Over {
            return Err(TurnError::GameOver);
        }

        if seat != self.current_turn {
            return Err(TurnError::NotYourTurn);
        }

        Ok(())
    }

    /// Resolves one ask for the seat whose turn it is.
    ///
    /// Every card of the asked rank moves from the target to the asker. If the
    /// target has none, the asker goes fishing: draws the top card, or gains
    /// nothing when the deck is empty. Books completed by either route are
    /// then extracted, the turn passes to the next seat, and the end of the
    /// game is checked.
    ///
    /// The engine does not check that the asker holds `rank`; offering only
    /// held ranks is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not the asker's turn, or the
    /// target is the asker or not a seat. The game is unchanged on error.
    pub fn take_turn(&mut self, request: AskRequest) -> Result<TurnOutcome, TurnError> {
        let AskRequest {
            asker,
            target,
            rank,
        } = request;

        self.ensure_turn(asker)?;

        if target == asker || target >= PLAYER_COUNT {
            return Err(TurnError::InvalidTarget);
        }

        let transferred = self.players[target].hand.take_rank(rank);
        let result = if !transferred.is_empty() {
            let count = transferred.len();
            self.players[asker].hand.add_cards(transferred);
            AskResult::Received(count)
        } else if self.deck.is_empty() {
            AskResult::NoCardsLeft
        } else {
            let card = self.deck.draw()?;
            self.players[asker].hand.add_card(card);
            AskResult::Drew(card)
        };

        let message = self.ask_message(asker, target, rank, result);
        self.log.push(actor_kind(asker), message);

        tracing::debug!(
            seat = asker,
            target,
            rank = %rank,
            result = ?result,
            "ask resolved"
        );

        let action = TurnAction::Ask {
            target,
            rank,
            result,
        };
        Ok(self.finish_turn(asker, action))
    }

    /// The human asks `target` for `rank`.
    ///
    /// # Errors
    ///
    /// See [`Game::take_turn`].
    pub fn human_request(&mut self, target: usize, rank: Rank) -> Result<TurnOutcome, TurnError> {
        self.take_turn(AskRequest::new(HUMAN_SEAT, target, rank))
    }

    /// Plays the current bot seat with [`RandomPolicy`] and the game's own RNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or it is the human's turn. The
    /// RNG is not touched on error.
    pub fn bot_turn(&mut self) -> Result<TurnOutcome, TurnError> {
        let seat = self.ensure_bot_turn()?;
        let request = Self::choose_bot_request(
            &self.players,
            self.deck.len(),
            seat,
            &mut RandomPolicy,
            &mut self.rng,
        );
        self.play_bot_request(seat, request)
    }

    /// Plays the current bot seat with the given policy and random source.
    ///
    /// A bot with an empty hand, or whose policy declines to ask, passes.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is the human's turn, or the
    /// policy names an invalid target.
    pub fn bot_turn_with<P: BotPolicy + ?Sized>(
        &mut self,
        policy: &mut P,
        rng: &mut dyn RngCore,
    ) -> Result<TurnOutcome, TurnError> {
        let seat = self.ensure_bot_turn()?;
        let request = Self::choose_bot_request(&self.players, self.deck.len(), seat, policy, rng);
        self.play_bot_request(seat, request)
    }

    fn ensure_bot_turn(&self) -> Result<usize, TurnError> {
        if self.phase == GamePhase::Over {
            return Err(TurnError::GameOver);
        }

        let seat = self.current_turn;
        if SeatKind::of(seat) == SeatKind::Human {
            return Err(TurnError::NotYourTurn);
        }

        Ok(seat)
    }

    /// Asks the policy for a move. Takes the table by field so callers can
    /// lend out the game's own RNG alongside it.
    fn choose_bot_request<P: BotPolicy + ?Sized>(
        players: &[Player; PLAYER_COUNT],
        cards_remaining: usize,
        seat: usize,
        policy: &mut P,
        rng: &mut dyn RngCore,
    ) -> Option<AskRequest> {
        let hand = &players[seat].hand;
        if hand.is_empty() {
            return None;
        }

        let view = TableView {
            seat,
            hand,
            hand_sizes: core::array::from_fn(|s| players[s].hand.len()),
            book_counts: core::array::from_fn(|s| players[s].book_count()),
            cards_remaining,
        };

        policy
            .choose_ask(&view, rng)
            .map(|request| AskRequest { asker: seat, ..request })
    }

    fn play_bot_request(
        &mut self,
        seat: usize,
        request: Option<AskRequest>,
    ) -> Result<TurnOutcome, TurnError> {
        match request {
            Some(request) => self.take_turn(request),
            None => Ok(self.resolve_pass(seat)),
        }
    }

    /// The current seat passes because it holds no cards.
    ///
    /// The human goes fishing instead and draws a card if the deck has one.
    /// Bots only draw when
    /// [`GameOptions::refill_empty_hands`](crate::GameOptions::refill_empty_hands)
    /// is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or the current seat holds cards.
    pub fn pass(&mut self) -> Result<TurnOutcome, TurnError> {
        let seat = self.current_turn;
        self.ensure_turn(seat)?;

        if !self.players[seat].hand.is_empty() {
            return Err(TurnError::CannotPass);
        }

        Ok(self.resolve_pass(seat))
    }

    fn resolve_pass(&mut self, seat: usize) -> TurnOutcome {
        let may_draw = SeatKind::of(seat) == SeatKind::Human || self.options.refill_empty_hands;
        let drawn = if may_draw && self.players[seat].hand.is_empty() {
            self.deck.draw().ok()
        } else {
            None
        };

        let name = player_name(seat);
        let message = match drawn {
            Some(card) => {
                self.players[seat].hand.add_card(card);
                format!("{name} has no cards and draws {}", self.describe_draw(seat, card))
            }
            None => format!("{name} has no cards and passes."),
        };
        self.log.push(actor_kind(seat), message);

        tracing::debug!(seat, drew = drawn.is_some(), "turn passed");

        self.finish_turn(seat, TurnAction::Pass { drawn })
    }

    /// Extracts books, advances the turn and checks for the end of the game.
    fn finish_turn(&mut self, seat: usize, action: TurnAction) -> TurnOutcome {
        let books = self.players[seat].hand.extract_books();
        let new_books: Vec<Rank> = books.iter().map(Book::rank).collect();

        if !books.is_empty() {
            let count = books.len();
            self.players[seat].books.extend(books);
            self.log.push(
                actor_kind(seat),
                format!("{} completed {count} book(s)!", player_name(seat)),
            );
        }

        self.advance_turn();
        let game_over = self.check_game_over();

        TurnOutcome {
            seat,
            action,
            new_books,
            game_over,
        }
    }

    fn ask_message(&self, asker: usize, target: usize, rank: Rank, result: AskResult) -> String {
        let ask = format!(
            "{} asks {} for {rank}s",
            player_name(asker),
            player_name(target)
        );

        match result {
            AskResult::Received(count) => format!("{ask} and receives {count} card(s)!"),
            AskResult::Drew(card) => match SeatKind::of(asker) {
                SeatKind::Human => format!("{ask} - Go fish! You drew {card}"),
                SeatKind::Bot if self.options.reveal_bot_draws => {
                    format!("{ask} - Go fish! Drew {card}")
                }
                SeatKind::Bot => format!("{ask} - Go fish!"),
            },
            AskResult::NoCardsLeft => format!("{ask} - No cards left in deck!"),
        }
    }

    fn describe_draw(&self, seat: usize, card: Card) -> String {
        if SeatKind::of(seat) == SeatKind::Human || self.options.reveal_bot_draws {
            format!("{card}.")
        } else {
            String::from("a card.")
        }
    }
}
